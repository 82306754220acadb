// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_type::{Diagnostic, IntoDiagnostic};

use crate::interface::catalog::DictionaryColumnIdentifier;

mod provider;

pub use provider::CacheProvider;

/// Surrogate keys are 32-bit in every dictionary encoded column.
pub type SurrogateKey = i32;

/// A column dictionary pinned in the external cache.
///
/// Both methods may be called repeatedly. Each successful
/// [`DictionaryCache::get`] pins the dictionary once and must be matched by
/// exactly one [`Dictionary::release`].
pub trait Dictionary: Send + Sync {
	/// Canonical bytes of the member, `None` when the key is not in the dictionary.
	fn lookup(&self, key: SurrogateKey) -> Result<Option<Vec<u8>>, DictionaryError>;

	fn release(&self);
}

/// The shared, evictable dictionary cache. Implementations must be safe for
/// concurrent use by many tasks; `get` may block on storage I/O.
pub trait DictionaryCache: Send + Sync {
	fn get(&self, identifier: &DictionaryColumnIdentifier) -> Result<Arc<dyn Dictionary>, DictionaryError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
	#[error("dictionary for {identifier} not found")]
	NotFound {
		identifier: String,
	},

	#[error("failed to load dictionary for {identifier}: {reason}")]
	Load {
		identifier: String,
		reason: String,
	},

	#[error("no dictionary cache registered for store location {location}")]
	NoCache {
		location: String,
	},

	#[error("dictionary handle for {identifier} was already released")]
	Released {
		identifier: String,
	},
}

impl DictionaryError {
	pub fn not_found(identifier: &DictionaryColumnIdentifier) -> Self {
		DictionaryError::NotFound {
			identifier: identifier.to_string(),
		}
	}

	pub fn load(identifier: &DictionaryColumnIdentifier, reason: impl Into<String>) -> Self {
		DictionaryError::Load {
			identifier: identifier.to_string(),
			reason: reason.into(),
		}
	}
}

impl IntoDiagnostic for DictionaryError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			DictionaryError::NotFound {
				..
			} => Diagnostic::new("DICT_001", message),
			DictionaryError::Load {
				..
			} => Diagnostic::new("DICT_002", message)
				.with_help("the dictionary file may be missing or corrupt, retry after the cache reloads it"),
			DictionaryError::NoCache {
				..
			} => Diagnostic::new("DICT_003", message)
				.with_help("register a cache with CacheProvider::register before executing the plan"),
			DictionaryError::Released {
				..
			} => Diagnostic::new("DICT_004", message),
		}
	}
}
