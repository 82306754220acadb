// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory dictionary cache with pin bookkeeping.
//!
//! Members and counters are keyed by column identifier, which is unique
//! within the fixtures.

use std::{
	collections::{HashMap, HashSet},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use parking_lot::RwLock;
use reifydb_core::{
	CacheProvider, Dictionary, DictionaryCache, DictionaryColumnIdentifier, DictionaryError, StoreLocation,
	TableIdentity,
};
use tracing::trace;

#[derive(Debug, Default)]
struct ColumnCounters {
	gets: AtomicUsize,
	releases: AtomicUsize,
	lookups: AtomicUsize,
}

pub struct MemoryDictionary {
	members: Arc<HashMap<i32, Vec<u8>>>,
	counters: Arc<ColumnCounters>,
}

impl Dictionary for MemoryDictionary {
	fn lookup(&self, key: i32) -> Result<Option<Vec<u8>>, DictionaryError> {
		self.counters.lookups.fetch_add(1, Ordering::SeqCst);
		Ok(self.members.get(&key).cloned())
	}

	fn release(&self) {
		self.counters.releases.fetch_add(1, Ordering::SeqCst);
	}
}

#[derive(Default)]
struct CacheState {
	members: RwLock<HashMap<String, Arc<HashMap<i32, Vec<u8>>>>>,
	failing: RwLock<HashSet<String>>,
	counters: RwLock<HashMap<String, Arc<ColumnCounters>>>,
	requested: RwLock<HashMap<String, Vec<TableIdentity>>>,
}

/// Shared handle to an in-memory cache; clones see the same state.
#[derive(Clone, Default)]
pub struct MemoryDictionaryCache {
	state: Arc<CacheState>,
}

impl MemoryDictionaryCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert<I, B>(&self, column_id: &str, members: I)
	where
		I: IntoIterator<Item = (i32, B)>,
		B: Into<Vec<u8>>,
	{
		let members = members.into_iter().map(|(key, bytes)| (key, bytes.into())).collect();
		self.state.members.write().insert(column_id.to_string(), Arc::new(members));
	}

	pub fn with<I, B>(self, column_id: &str, members: I) -> Self
	where
		I: IntoIterator<Item = (i32, B)>,
		B: Into<Vec<u8>>,
	{
		self.insert(column_id, members);
		self
	}

	/// Every later `get` for the column fails with a load error.
	pub fn fail(&self, column_id: &str) {
		self.state.failing.write().insert(column_id.to_string());
	}

	pub fn register(&self, location: StoreLocation) {
		CacheProvider::register(location, Arc::new(self.clone()));
	}

	pub fn gets(&self, column_id: &str) -> usize {
		self.read(column_id, |c| &c.gets)
	}

	pub fn releases(&self, column_id: &str) -> usize {
		self.read(column_id, |c| &c.releases)
	}

	pub fn lookups(&self, column_id: &str) -> usize {
		self.read(column_id, |c| &c.lookups)
	}

	/// Owning tables named by the successful gets of `column_id`, in order.
	pub fn requested_tables(&self, column_id: &str) -> Vec<TableIdentity> {
		self.state.requested.read().get(column_id).cloned().unwrap_or_default()
	}

	/// Gets not yet matched by a release.
	pub fn pinned(&self, column_id: &str) -> isize {
		self.gets(column_id) as isize - self.releases(column_id) as isize
	}

	pub fn total_gets(&self) -> usize {
		self.state.counters.read().values().map(|c| c.gets.load(Ordering::SeqCst)).sum()
	}

	pub fn total_releases(&self) -> usize {
		self.state.counters.read().values().map(|c| c.releases.load(Ordering::SeqCst)).sum()
	}

	fn read(&self, column_id: &str, counter: impl Fn(&ColumnCounters) -> &AtomicUsize) -> usize {
		self.state.counters.read().get(column_id).map(|c| counter(c).load(Ordering::SeqCst)).unwrap_or(0)
	}

	fn counters(&self, column_id: &str) -> Arc<ColumnCounters> {
		Arc::clone(self.state.counters.write().entry(column_id.to_string()).or_default())
	}
}

impl DictionaryCache for MemoryDictionaryCache {
	fn get(&self, identifier: &DictionaryColumnIdentifier) -> Result<Arc<dyn Dictionary>, DictionaryError> {
		let column_id = identifier.column.column_id.as_str();
		if self.state.failing.read().contains(column_id) {
			return Err(DictionaryError::load(identifier, "injected failure"));
		}
		let members =
			self.state.members.read().get(column_id).cloned().ok_or_else(|| DictionaryError::not_found(identifier))?;

		let counters = self.counters(column_id);
		counters.gets.fetch_add(1, Ordering::SeqCst);
		self.state.requested.write().entry(column_id.to_string()).or_default().push(identifier.table.clone());
		trace!(dictionary = %identifier, "memory cache get");

		Ok(Arc::new(MemoryDictionary {
			members,
			counters,
		}))
	}
}
