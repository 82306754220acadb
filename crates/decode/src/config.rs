// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_core::StoreLocation;
use serde::{Deserialize, Serialize};

/// How decoding is wired into the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStrategy {
	/// Wrap the child row iterator.
	Interpreted,
	/// Offer decode closures to the host's generated routine.
	#[default]
	Compiled,
}

/// Configuration for the decode operator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
	/// Selects the registered dictionary cache.
	pub store_location: StoreLocation,
	pub strategy: DecodeStrategy,
}

impl DecodeConfig {
	pub fn new(store_location: StoreLocation) -> Self {
		Self {
			store_location,
			strategy: DecodeStrategy::default(),
		}
	}

	pub fn with_strategy(mut self, strategy: DecodeStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}
