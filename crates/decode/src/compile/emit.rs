// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Inline decode closures.

use std::sync::Arc;

use reifydb_core::Dictionary;
use reifydb_type::Value;

use super::CompiledExpr;
use crate::{
	convert::{MemberConversion, surrogate_key},
	error::DecodeError,
	plan::DecodeColumn,
};

/// Wraps `upstream`, which yields the surrogate key, with the decode of
/// `column` through the handle registered at `slot`.
pub(crate) fn decode_column(column: &DecodeColumn, upstream: CompiledExpr, slot: usize) -> CompiledExpr {
	let description = format!("decode({}.{}) -> {}", column.table_name, column.column_identifier, column.output_type);
	let name: Arc<str> = Arc::from(column.dimension.name.as_str());
	member(description, name, upstream, slot, column.conversion)
}

fn member(
	description: String,
	column: Arc<str>,
	upstream: CompiledExpr,
	slot: usize,
	conversion: MemberConversion,
) -> CompiledExpr {
	CompiledExpr::new(description, move |row, env| {
		let raw = upstream.eval(row, env)?;
		if raw.is_undefined() {
			return Ok(Value::Undefined);
		}

		let key = surrogate_key(&raw, &column)?;
		let bytes = env.reference(slot)?.lookup(key).map_err(|source| DecodeError::Dictionary {
			column: column.to_string(),
			source,
		})?;

		let Some(bytes) = bytes else {
			return Ok(Value::Undefined);
		};
		conversion.convert(&bytes).map_err(|source| DecodeError::Conversion {
			column: column.to_string(),
			source,
		})
	})
}
