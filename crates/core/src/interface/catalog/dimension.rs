// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use reifydb_type::DataKind;
use serde::{Deserialize, Serialize};

/// Stable identifier of a dimension column, used as part of the dictionary cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIdentifier {
	pub column_id: String,
}

impl ColumnIdentifier {
	pub fn new(column_id: impl Into<String>) -> Self {
		Self {
			column_id: column_id.into(),
		}
	}
}

impl Display for ColumnIdentifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.column_id)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Encodings {
	pub dictionary: bool,
	/// Values are derived from the surrogate by a formula (e.g. timestamps), there is no stored dictionary.
	pub direct_dictionary: bool,
}

/// Table metadata describing one dimension column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionDescriptor {
	pub name: String,
	pub column_identifier: ColumnIdentifier,
	pub kind: DataKind,
	pub encodings: Encodings,
	#[serde(default)]
	pub precision: u8,
	#[serde(default)]
	pub scale: u8,
	#[serde(default)]
	pub children: Vec<DimensionDescriptor>,
}

impl DimensionDescriptor {
	pub fn new(name: impl Into<String>, column_id: impl Into<String>, kind: DataKind) -> Self {
		Self {
			name: name.into(),
			column_identifier: ColumnIdentifier::new(column_id),
			kind,
			encodings: Encodings::default(),
			precision: 0,
			scale: 0,
			children: vec![],
		}
	}

	pub fn dictionary(mut self) -> Self {
		self.encodings.dictionary = true;
		self
	}

	pub fn direct_dictionary(mut self) -> Self {
		self.encodings.dictionary = true;
		self.encodings.direct_dictionary = true;
		self
	}

	pub fn with_decimal(mut self, precision: u8, scale: u8) -> Self {
		self.precision = precision;
		self.scale = scale;
		self
	}

	pub fn with_children(mut self, children: Vec<DimensionDescriptor>) -> Self {
		self.children = children;
		self
	}

	pub fn is_dictionary_encoded(&self) -> bool {
		self.encodings.dictionary
	}

	pub fn is_direct_dictionary(&self) -> bool {
		self.encodings.direct_dictionary
	}

	pub fn is_complex(&self) -> bool {
		self.kind.is_complex()
	}
}
