// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Conversion of dictionary members into values.
//!
//! Members are stored as text in the default charset, the same layout the
//! dictionary writer used. Both decode strategies go through these rules.

use reifydb_core::DimensionDescriptor;
use reifydb_type::{
	DataKind, Value,
	encoding::{decode_text, is_member_default},
	value::{
		decimal::parse_decimal,
		number::{parse_bool, parse_float8, parse_int2, parse_int4, parse_int8},
		temporal::{parse_date, parse_datetime},
	},
};

use crate::{
	error::{DecodeError, Result},
	plan::translate::effective_decimal,
};

/// Target representation of a decodable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberConversion {
	Text,
	Int2,
	Int4,
	Int8,
	Float8,
	Boolean,
	Decimal {
		precision: u8,
		scale: u8,
	},
	Date,
	DateTime,
}

impl MemberConversion {
	pub fn for_dimension(dimension: &DimensionDescriptor) -> Result<Self> {
		let conversion = match dimension.kind {
			DataKind::String => MemberConversion::Text,
			DataKind::Short => MemberConversion::Int2,
			DataKind::Int => MemberConversion::Int4,
			DataKind::Long => MemberConversion::Int8,
			DataKind::Double => MemberConversion::Float8,
			DataKind::Boolean => MemberConversion::Boolean,
			DataKind::Date => MemberConversion::Date,
			DataKind::Timestamp => MemberConversion::DateTime,
			DataKind::Decimal => {
				let (precision, scale) = effective_decimal(dimension);
				MemberConversion::Decimal {
					precision,
					scale,
				}
			}
			kind => {
				return Err(DecodeError::UnsupportedDataKind {
					column: dimension.name.clone(),
					kind,
				});
			}
		};
		Ok(conversion)
	}

	/// Empty members are NULL for everything except text.
	fn empty_is_null(&self) -> bool {
		!matches!(self, MemberConversion::Text)
	}

	/// Parses the textual member. The caller has already ruled out NULL members.
	fn parse(&self, text: &str) -> reifydb_type::Result<Value> {
		let value = match *self {
			MemberConversion::Text => Value::Utf8(text.to_string()),
			MemberConversion::Int2 => Value::Int2(parse_int2(text)?),
			MemberConversion::Int4 => Value::Int4(parse_int4(text)?),
			MemberConversion::Int8 => Value::Int8(parse_int8(text)?),
			MemberConversion::Float8 => Value::Float8(parse_float8(text)?),
			MemberConversion::Boolean => Value::Boolean(parse_bool(text)?),
			MemberConversion::Decimal {
				precision,
				scale,
			} => Value::Decimal(parse_decimal(text)?.rescale(precision, scale)?),
			MemberConversion::Date => Value::Date(parse_date(text)?),
			MemberConversion::DateTime => Value::DateTime(parse_datetime(text)?),
		};
		Ok(value)
	}

	/// Full member conversion: NULL sentinel, empty payloads, charset, then parse.
	pub fn convert(&self, bytes: &[u8]) -> reifydb_type::Result<Value> {
		if is_member_default(bytes) || (bytes.is_empty() && self.empty_is_null()) {
			return Ok(Value::Undefined);
		}
		self.parse(decode_text(bytes)?)
	}
}

/// Reads the surrogate key out of a raw field. NULL fields never get here.
pub(crate) fn surrogate_key(value: &Value, column: &str) -> Result<i32> {
	match value {
		Value::Int4(key) => Ok(*key),
		other => Err(DecodeError::InvalidSurrogateKey {
			column: column.to_string(),
			found: other.kind_name(),
		}),
	}
}
