// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	mem,
	sync::Arc,
};

use parking_lot::Mutex;
use reifydb_core::{CacheProvider, Dictionary, DictionaryColumnIdentifier, DictionaryError, StoreLocation};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

#[derive(Default)]
enum HandleState {
	#[default]
	Unbound,
	Bound(Arc<dyn Dictionary>),
	Released,
}

/// Dictionary handle that can cross an execution boundary.
///
/// Only the identifying keys are serialized. A handle without a live
/// reference fetches one from the cache registered for its store location
/// the first time it is used.
#[derive(Serialize, Deserialize)]
pub struct ReacquirableDictionary {
	location: StoreLocation,
	identifier: DictionaryColumnIdentifier,
	#[serde(skip)]
	state: Mutex<HandleState>,
}

impl ReacquirableDictionary {
	pub fn unbound(location: StoreLocation, identifier: DictionaryColumnIdentifier) -> Self {
		Self {
			location,
			identifier,
			state: Mutex::new(HandleState::Unbound),
		}
	}

	pub fn bound(location: StoreLocation, identifier: DictionaryColumnIdentifier, dictionary: Arc<dyn Dictionary>) -> Self {
		Self {
			location,
			identifier,
			state: Mutex::new(HandleState::Bound(dictionary)),
		}
	}

	pub fn identifier(&self) -> &DictionaryColumnIdentifier {
		&self.identifier
	}

	pub fn location(&self) -> &StoreLocation {
		&self.location
	}

	pub fn is_bound(&self) -> bool {
		matches!(*self.state.lock(), HandleState::Bound(_))
	}

	pub fn is_released(&self) -> bool {
		matches!(*self.state.lock(), HandleState::Released)
	}

	/// An unbound copy carrying the same keys. The live reference stays with `self`.
	pub fn detach(&self) -> Self {
		Self::unbound(self.location.clone(), self.identifier.clone())
	}

	/// Returns the live reference, fetching it from the cache if needed.
	///
	/// The fetch runs without holding the state lock. If another caller bound
	/// the handle meanwhile, the extra pin is given back.
	pub fn ensure_bound(&self) -> Result<Arc<dyn Dictionary>, DictionaryError> {
		match &*self.state.lock() {
			HandleState::Bound(dictionary) => return Ok(Arc::clone(dictionary)),
			HandleState::Released => return Err(self.released()),
			HandleState::Unbound => {}
		}

		let fetched = self.fetch()?;

		let mut state = self.state.lock();
		match &*state {
			HandleState::Unbound => {
				*state = HandleState::Bound(Arc::clone(&fetched));
				Ok(fetched)
			}
			HandleState::Bound(current) => {
				let current = Arc::clone(current);
				drop(state);
				fetched.release();
				Ok(current)
			}
			HandleState::Released => {
				drop(state);
				fetched.release();
				Err(self.released())
			}
		}
	}

	fn fetch(&self) -> Result<Arc<dyn Dictionary>, DictionaryError> {
		trace!(location = %self.location, dictionary = %self.identifier, "reacquiring dictionary");
		CacheProvider::get(&self.location)?.get(&self.identifier)
	}

	fn released(&self) -> DictionaryError {
		DictionaryError::Released {
			identifier: self.identifier.to_string(),
		}
	}
}

impl Dictionary for ReacquirableDictionary {
	fn lookup(&self, key: i32) -> Result<Option<Vec<u8>>, DictionaryError> {
		self.ensure_bound()?.lookup(key)
	}

	/// Releases the pin exactly once. An unbound handle is reacquired first so
	/// the cache sees a matching get and release; later calls do nothing.
	fn release(&self) {
		let previous = mem::replace(&mut *self.state.lock(), HandleState::Released);
		match previous {
			HandleState::Bound(dictionary) => dictionary.release(),
			HandleState::Unbound => match self.fetch() {
				Ok(dictionary) => dictionary.release(),
				Err(err) => {
					warn!(dictionary = %self.identifier, error = %err, "cannot reacquire dictionary for release")
				}
			},
			HandleState::Released => {}
		}
	}
}

impl Debug for ReacquirableDictionary {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let state = match *self.state.lock() {
			HandleState::Unbound => "unbound",
			HandleState::Bound(_) => "bound",
			HandleState::Released => "released",
		};
		f.debug_struct("ReacquirableDictionary")
			.field("location", &self.location)
			.field("identifier", &self.identifier)
			.field("state", &state)
			.finish()
	}
}
