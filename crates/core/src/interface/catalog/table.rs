// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use reifydb_type::DataKind;
use serde::{Deserialize, Serialize};

use super::ColumnIdentifier;

/// Where a table's dictionaries live; selects the registered cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreLocation(pub String);

impl StoreLocation {
	pub fn new(location: impl Into<String>) -> Self {
		Self(location.into())
	}
}

impl Default for StoreLocation {
	fn default() -> Self {
		Self("memory://default".to_string())
	}
}

impl Display for StoreLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableIdentity {
	pub database: String,
	pub table: String,
	pub table_id: String,
}

impl TableIdentity {
	pub fn new(database: impl Into<String>, table: impl Into<String>, table_id: impl Into<String>) -> Self {
		Self {
			database: database.into(),
			table: table.into(),
			table_id: table_id.into(),
		}
	}
}

impl Display for TableIdentity {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.database, self.table)
	}
}

/// Cache key of a column dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictionaryColumnIdentifier {
	pub table: TableIdentity,
	pub column: ColumnIdentifier,
	pub data_kind: DataKind,
}

impl DictionaryColumnIdentifier {
	pub fn new(table: TableIdentity, column: ColumnIdentifier, data_kind: DataKind) -> Self {
		Self {
			table,
			column,
			data_kind,
		}
	}
}

impl Display for DictionaryColumnIdentifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.table, self.column)
	}
}
