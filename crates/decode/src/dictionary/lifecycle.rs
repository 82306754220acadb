// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_core::{Dictionary, TaskContext};
use tracing::trace;

/// Owns one pin on each dictionary and releases all of them when dropped.
pub struct DictionaryLease {
	dictionaries: Vec<Arc<dyn Dictionary>>,
}

impl DictionaryLease {
	pub fn new(dictionaries: Vec<Arc<dyn Dictionary>>) -> Self {
		Self {
			dictionaries,
		}
	}

	pub fn len(&self) -> usize {
		self.dictionaries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dictionaries.is_empty()
	}
}

impl Drop for DictionaryLease {
	fn drop(&mut self) {
		for dictionary in self.dictionaries.drain(..) {
			dictionary.release();
		}
	}
}

/// Hands the lease to the task; it is released once the task completes,
/// successfully or not.
pub fn register_release(task: &dyn TaskContext, lease: DictionaryLease) {
	if lease.is_empty() {
		return;
	}
	let partition = task.partition();
	task.add_completion_listener(Box::new(move |outcome| {
		trace!(partition, ?outcome, dictionaries = lease.len(), "releasing task dictionaries");
		drop(lease);
	}));
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use reifydb_core::{DictionaryError, TaskScope};

	use super::*;

	#[derive(Default)]
	struct Counting {
		releases: AtomicUsize,
	}

	impl Dictionary for Counting {
		fn lookup(&self, _key: i32) -> Result<Option<Vec<u8>>, DictionaryError> {
			Ok(None)
		}

		fn release(&self) {
			self.releases.fetch_add(1, Ordering::SeqCst);
		}
	}

	#[test]
	fn test_released_once_on_completion() {
		let dictionary = Arc::new(Counting::default());
		let task = TaskScope::new(0);
		register_release(&task, DictionaryLease::new(vec![dictionary.clone() as Arc<dyn Dictionary>]));
		assert_eq!(dictionary.releases.load(Ordering::SeqCst), 0);

		task.complete();
		assert_eq!(dictionary.releases.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_released_when_task_is_abandoned() {
		let dictionary = Arc::new(Counting::default());
		{
			let task = TaskScope::new(0);
			register_release(&task, DictionaryLease::new(vec![
				dictionary.clone() as Arc<dyn Dictionary>,
				dictionary.clone() as Arc<dyn Dictionary>,
			]));
		}
		assert_eq!(dictionary.releases.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_empty_lease_registers_nothing() {
		let task = TaskScope::new(0);
		register_release(&task, DictionaryLease::new(vec![]));
		assert_eq!(task.pending_listeners(), 0);
	}
}
