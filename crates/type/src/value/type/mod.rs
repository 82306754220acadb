// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Column type as reported in an operator's output schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
	Boolean,
	Int2,
	Int4,
	Int8,
	Float8,
	Utf8,
	Decimal {
		precision: u8,
		scale: u8,
	},
	Date,
	DateTime,
	Struct(Vec<StructField>),
	Array(Box<Type>),
	Undefined,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructField {
	pub name: String,
	pub ty: Type,
}

impl StructField {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

impl Type {
	pub const DEFAULT_DECIMAL_PRECISION: u8 = 18;
	pub const DEFAULT_DECIMAL_SCALE: u8 = 2;
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Decimal {
				precision,
				scale,
			} => write!(f, "Decimal({}, {})", precision, scale),
			Type::Date => f.write_str("Date"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Struct(fields) => {
				f.write_str("Struct<")?;
				for (idx, field) in fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", field.name, field.ty)?;
				}
				f.write_str(">")
			}
			Type::Array(element) => write!(f, "Array<{}>", element),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_nested() {
		let ty = Type::Struct(vec![
			StructField::new("id", Type::Int4),
			StructField::new("tags", Type::Array(Box::new(Type::Utf8))),
			StructField::new(
				"price",
				Type::Decimal {
					precision: 10,
					scale: 3,
				},
			),
		]);
		assert_eq!(ty.to_string(), "Struct<id: Int4, tags: Array<Utf8>, price: Decimal(10, 3)>");
	}
}
