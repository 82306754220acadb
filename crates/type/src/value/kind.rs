// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Storage level data kind of a dimension, as recorded in table metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
	String,
	Short,
	Int,
	Long,
	Double,
	Boolean,
	Decimal,
	Timestamp,
	Date,
	Struct,
	Array,
	Float,
	Byte,
	Binary,
	Null,
}

impl DataKind {
	pub fn is_complex(&self) -> bool {
		matches!(self, DataKind::Struct | DataKind::Array)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			DataKind::String => "string",
			DataKind::Short => "short",
			DataKind::Int => "int",
			DataKind::Long => "long",
			DataKind::Double => "double",
			DataKind::Boolean => "boolean",
			DataKind::Decimal => "decimal",
			DataKind::Timestamp => "timestamp",
			DataKind::Date => "date",
			DataKind::Struct => "struct",
			DataKind::Array => "array",
			DataKind::Float => "float",
			DataKind::Byte => "byte",
			DataKind::Binary => "binary",
			DataKind::Null => "null",
		}
	}
}

impl Display for DataKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(DataKind::Timestamp.to_string(), "timestamp");
		assert_eq!(DataKind::Long.to_string(), "long");
	}

	#[test]
	fn test_complex() {
		assert!(DataKind::Struct.is_complex());
		assert!(DataKind::Array.is_complex());
		assert!(!DataKind::String.is_complex());
	}
}
