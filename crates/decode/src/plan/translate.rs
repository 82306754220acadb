// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Decoded output type of a dimension.

use reifydb_core::DimensionDescriptor;
use reifydb_type::{DataKind, StructField, Type};

use crate::error::{DecodeError, Result};

/// Declared precision and scale, or the default (18, 2) when both are zero.
pub fn effective_decimal(dimension: &DimensionDescriptor) -> (u8, u8) {
	if dimension.precision == 0 && dimension.scale == 0 {
		(Type::DEFAULT_DECIMAL_PRECISION, Type::DEFAULT_DECIMAL_SCALE)
	} else {
		(dimension.precision, dimension.scale)
	}
}

/// Maps a dimension's data kind to the type reported in the output schema.
///
/// Nested kinds are rendered recursively from the child dimensions. This only
/// describes the schema; nested values are never decoded by this operator.
pub fn translate_dimension(dimension: &DimensionDescriptor) -> Result<Type> {
	let ty = match dimension.kind {
		DataKind::String => Type::Utf8,
		DataKind::Short => Type::Int2,
		DataKind::Int => Type::Int4,
		DataKind::Long => Type::Int8,
		DataKind::Double => Type::Float8,
		DataKind::Boolean => Type::Boolean,
		DataKind::Timestamp => Type::DateTime,
		DataKind::Date => Type::Date,
		DataKind::Decimal => {
			let (precision, scale) = effective_decimal(dimension);
			Type::Decimal {
				precision,
				scale,
			}
		}
		DataKind::Struct => {
			let fields = dimension
				.children
				.iter()
				.map(|child| Ok(StructField::new(child_name(&dimension.name, &child.name), translate_dimension(child)?)))
				.collect::<Result<Vec<_>>>()?;
			Type::Struct(fields)
		}
		DataKind::Array => {
			let element = dimension.children.first().ok_or_else(|| DecodeError::MissingElementDimension {
				column: dimension.name.clone(),
			})?;
			Type::Array(Box::new(translate_dimension(element)?))
		}
		kind @ (DataKind::Float | DataKind::Byte | DataKind::Binary | DataKind::Null) => {
			return Err(DecodeError::UnsupportedDataKind {
				column: dimension.name.clone(),
				kind,
			});
		}
	};
	Ok(ty)
}

// Child dimensions are stored with their parent prefix, `address.city`.
fn child_name<'a>(parent: &str, child: &'a str) -> &'a str {
	child.strip_prefix(parent).and_then(|rest| rest.strip_prefix('.')).unwrap_or(child)
}
