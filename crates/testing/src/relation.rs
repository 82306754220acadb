// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_core::{ColumnRef, DecoderRelation, DimensionDescriptor};

/// Relation over a fixed column list, with dimension metadata for its table.
#[derive(Debug, Clone)]
pub struct MemoryRelation {
	table: String,
	columns: Vec<ColumnRef>,
	dimensions: Vec<DimensionDescriptor>,
}

impl MemoryRelation {
	pub fn new(table: impl Into<String>) -> Self {
		Self {
			table: table.into(),
			columns: vec![],
			dimensions: vec![],
		}
	}

	/// A column described by `dimension`.
	pub fn column(mut self, column: ColumnRef, dimension: DimensionDescriptor) -> Self {
		self.columns.push(column);
		self.dimensions.push(dimension);
		self
	}

	/// A column the table metadata knows nothing about.
	pub fn plain(mut self, column: ColumnRef) -> Self {
		self.columns.push(column);
		self
	}

	pub fn into_arc(self) -> Arc<dyn DecoderRelation> {
		Arc::new(self)
	}
}

impl DecoderRelation for MemoryRelation {
	fn table_name(&self) -> &str {
		&self.table
	}

	fn contains(&self, column: &ColumnRef) -> bool {
		self.columns.iter().any(|c| c.matches(column))
	}

	fn lookup_dimension(&self, table: &str, column: &str) -> Option<DimensionDescriptor> {
		if !self.table.eq_ignore_ascii_case(table) {
			return None;
		}
		self.dimensions.iter().find(|d| d.name.eq_ignore_ascii_case(column)).cloned()
	}
}
