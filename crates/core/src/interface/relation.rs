// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use crate::{
	interface::catalog::DimensionDescriptor,
	schema::{ColumnId, ColumnRef},
};

/// A scanned relation feeding the decode operator. Joins attach several; a
/// column belongs to at most one of them.
pub trait DecoderRelation: Send + Sync {
	/// Name of the table whose metadata describes this relation.
	fn table_name(&self) -> &str;

	fn contains(&self, column: &ColumnRef) -> bool;

	/// Dimension lookup by table and column name, case-insensitive.
	fn lookup_dimension(&self, table: &str, column: &str) -> Option<DimensionDescriptor>;
}

/// Maps projected aliases back to the column they were derived from.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
	entries: HashMap<ColumnId, ColumnRef>,
}

impl AliasMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, alias: &ColumnRef, canonical: ColumnRef) {
		self.entries.insert(alias.id, canonical);
	}

	pub fn with(mut self, alias: &ColumnRef, canonical: ColumnRef) -> Self {
		self.insert(alias, canonical);
		self
	}

	/// The canonical column, or `column` itself when no alias is recorded.
	pub fn resolve<'a>(&'a self, column: &'a ColumnRef) -> &'a ColumnRef {
		self.entries.get(&column.id).unwrap_or(column)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
