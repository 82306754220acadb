// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use parking_lot::Mutex;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
	Succeeded,
	/// Failed, cancelled, or dropped without being completed.
	Failed,
}

pub type CompletionListener = Box<dyn FnOnce(TaskOutcome) + Send>;

/// Runtime view of the task executing one partition.
pub trait TaskContext {
	fn partition(&self) -> usize;

	/// Runs `listener` exactly once when the task finishes, whatever the outcome.
	fn add_completion_listener(&self, listener: CompletionListener);
}

/// Scope guard owning a task's completion listeners.
///
/// Listeners run on [`TaskScope::complete`] or [`TaskScope::fail`]; if the
/// scope is dropped first (early return, `?`, panic unwind) they run with
/// [`TaskOutcome::Failed`].
pub struct TaskScope {
	partition: usize,
	listeners: Mutex<Vec<CompletionListener>>,
}

impl TaskScope {
	pub fn new(partition: usize) -> Self {
		Self {
			partition,
			listeners: Mutex::new(Vec::new()),
		}
	}

	pub fn complete(self) {
		self.finish(TaskOutcome::Succeeded);
	}

	pub fn fail(self) {
		self.finish(TaskOutcome::Failed);
	}

	pub fn pending_listeners(&self) -> usize {
		self.listeners.lock().len()
	}

	fn finish(&self, outcome: TaskOutcome) {
		let listeners = mem::take(&mut *self.listeners.lock());
		if listeners.is_empty() {
			return;
		}
		trace!(partition = self.partition, ?outcome, listeners = listeners.len(), "task finished");
		for listener in listeners {
			listener(outcome);
		}
	}
}

impl TaskContext for TaskScope {
	fn partition(&self) -> usize {
		self.partition
	}

	fn add_completion_listener(&self, listener: CompletionListener) {
		self.listeners.lock().push(listener);
	}
}

impl Drop for TaskScope {
	fn drop(&mut self) {
		self.finish(TaskOutcome::Failed);
	}
}
