// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use reifydb_type::Type;
use serde::{Deserialize, Serialize};

/// Identity assigned to a column by the planner. Two references with equal
/// names but different ids are different columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnId(pub u64);

impl Display for ColumnId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A column reference as seen in plans and profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRef {
	pub name: String,
	pub id: ColumnId,
}

impl ColumnRef {
	pub fn new(name: impl Into<String>, id: u64) -> Self {
		Self {
			name: name.into(),
			id: ColumnId(id),
		}
	}

	/// Case-insensitive on the name, exact on the id.
	pub fn matches(&self, other: &ColumnRef) -> bool {
		self.id == other.id && self.name.eq_ignore_ascii_case(&other.name)
	}
}

impl PartialEq for ColumnRef {
	fn eq(&self, other: &Self) -> bool {
		self.matches(other)
	}
}

impl Eq for ColumnRef {}

impl Display for ColumnRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.name, self.id)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
	pub column: ColumnRef,
	pub ty: Type,
}

impl ColumnDef {
	pub fn new(column: ColumnRef, ty: Type) -> Self {
		Self {
			column,
			ty,
		}
	}

	pub fn name(&self) -> &str {
		&self.column.name
	}
}

/// Ordered list of columns produced by an operator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
	pub columns: Vec<ColumnDef>,
}

impl Schema {
	pub fn new(columns: Vec<ColumnDef>) -> Self {
		Self {
			columns,
		}
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ColumnDef> {
		self.columns.iter()
	}

	pub fn column(&self, index: usize) -> Option<&ColumnDef> {
		self.columns.get(index)
	}

	pub fn types(&self) -> Vec<Type> {
		self.columns.iter().map(|c| c.ty.clone()).collect()
	}
}
