// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

pub mod decimal;
pub mod kind;
pub mod number;
pub mod temporal;
pub mod r#type;

use decimal::Decimal;
use temporal::{Date, DateTime};

/// A single field of a row. `Undefined` is SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Undefined,
	Boolean(bool),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Float8(f64),
	Utf8(String),
	Decimal(Decimal),
	Date(Date),
	DateTime(DateTime),
	Struct(Vec<Value>),
	Array(Vec<Value>),
}

impl Value {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn utf8(text: impl Into<String>) -> Self {
		Value::Utf8(text.into())
	}

	/// Short name of the variant, used in error messages.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Value::Undefined => "undefined",
			Value::Boolean(_) => "boolean",
			Value::Int2(_) => "int2",
			Value::Int4(_) => "int4",
			Value::Int8(_) => "int8",
			Value::Float8(_) => "float8",
			Value::Utf8(_) => "utf8",
			Value::Decimal(_) => "decimal",
			Value::Date(_) => "date",
			Value::DateTime(_) => "datetime",
			Value::Struct(_) => "struct",
			Value::Array(_) => "array",
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => write!(f, "{}", v),
			Value::Int2(v) => write!(f, "{}", v),
			Value::Int4(v) => write!(f, "{}", v),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Float8(v) => write!(f, "{}", v),
			Value::Utf8(v) => f.write_str(v),
			Value::Decimal(v) => write!(f, "{}", v),
			Value::Date(v) => write!(f, "{}", v),
			Value::DateTime(v) => write!(f, "{}", v),
			Value::Struct(fields) => {
				f.write_str("{")?;
				for (idx, field) in fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", field)?;
				}
				f.write_str("}")
			}
			Value::Array(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", item)?;
				}
				f.write_str("]")
			}
		}
	}
}
