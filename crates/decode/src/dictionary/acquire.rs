// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_core::{Dictionary, DictionaryCache, DictionaryColumnIdentifier, TableIdentity};
use tracing::{instrument, warn};

use crate::plan::DecodePlan;

pub struct AcquiredDictionary {
	pub identifier: DictionaryColumnIdentifier,
	pub dictionary: Arc<dyn Dictionary>,
}

/// Dictionaries acquired for one task, index aligned with the output schema.
/// A slot is empty when the column is skipped or its dictionary could not be
/// fetched.
pub struct AcquiredDictionaries {
	slots: Vec<Option<AcquiredDictionary>>,
}

impl AcquiredDictionaries {
	pub fn empty(len: usize) -> Self {
		Self {
			slots: (0..len).map(|_| None).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Arc<dyn Dictionary>> {
		self.slots.get(index)?.as_ref().map(|slot| &slot.dictionary)
	}

	pub fn take(&mut self, index: usize) -> Option<AcquiredDictionary> {
		self.slots.get_mut(index)?.take()
	}

	/// Slots holding a live dictionary.
	pub fn live(&self) -> impl Iterator<Item = (usize, &Arc<dyn Dictionary>)> {
		self.slots.iter().enumerate().filter_map(|(index, slot)| slot.as_ref().map(|s| (index, &s.dictionary)))
	}

	pub fn live_count(&self) -> usize {
		self.slots.iter().filter(|slot| slot.is_some()).count()
	}

	pub fn dictionaries(&self) -> Vec<Arc<dyn Dictionary>> {
		self.live().map(|(_, dictionary)| Arc::clone(dictionary)).collect()
	}
}

/// Fetches one dictionary per decoded column.
///
/// A failing fetch only empties that column's slot: its surrogate keys will
/// pass through undecoded for the rest of the task.
#[instrument(name = "decode::dictionary::acquire", level = "trace", skip_all, fields(columns = plan.len()))]
pub fn acquire_dictionaries(
	plan: &DecodePlan,
	tables: &[TableIdentity],
	cache: &dyn DictionaryCache,
) -> AcquiredDictionaries {
	let mut acquired = AcquiredDictionaries::empty(plan.len());

	for (index, column) in plan.decode_columns() {
		let Some(table) = tables.iter().find(|t| t.table.eq_ignore_ascii_case(&column.table_name)) else {
			warn!(table = %column.table_name, column = %column.dimension.name, "no table identity for decoded column, leaving it encoded");
			continue;
		};

		let identifier =
			DictionaryColumnIdentifier::new(table.clone(), column.column_identifier.clone(), column.dimension.kind);

		match cache.get(&identifier) {
			Ok(dictionary) => {
				acquired.slots[index] = Some(AcquiredDictionary {
					identifier,
					dictionary,
				});
			}
			Err(err) => {
				warn!(
					dictionary = %identifier,
					column = %column.dimension.name,
					error = %err,
					"dictionary unavailable, column keeps its surrogate keys"
				);
			}
		}
	}

	acquired
}
