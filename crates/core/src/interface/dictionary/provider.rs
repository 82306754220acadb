// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::{DictionaryCache, DictionaryError};
use crate::interface::catalog::StoreLocation;

static CACHES: Lazy<DashMap<StoreLocation, Arc<dyn DictionaryCache>>> = Lazy::new(DashMap::new);

/// Process wide registry of dictionary caches by store location.
///
/// Handles that crossed an execution boundary without their live reference
/// use it to find the cache again.
pub struct CacheProvider;

impl CacheProvider {
	pub fn register(location: StoreLocation, cache: Arc<dyn DictionaryCache>) -> Option<Arc<dyn DictionaryCache>> {
		debug!(%location, "registering dictionary cache");
		CACHES.insert(location, cache)
	}

	pub fn unregister(location: &StoreLocation) -> Option<Arc<dyn DictionaryCache>> {
		CACHES.remove(location).map(|(_, cache)| cache)
	}

	pub fn get(location: &StoreLocation) -> Result<Arc<dyn DictionaryCache>, DictionaryError> {
		CACHES.get(location).map(|entry| Arc::clone(entry.value())).ok_or_else(|| DictionaryError::NoCache {
			location: location.to_string(),
		})
	}
}
