// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Interpreted decoding: wraps the child row iterator.

use reifydb_core::{Dictionary, Row};
use reifydb_type::Value;
use tracing::debug;

use crate::{
	convert::surrogate_key,
	dictionary::AcquiredDictionaries,
	error::{DecodeError, Result},
	operator::RowProcessor,
	plan::{DecodeColumn, DecodePlan},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
	pub rows: u64,
	pub lookups: u64,
	/// Surrogate key fields that were already NULL.
	pub null_inputs: u64,
	/// Keys that decoded to NULL, through the sentinel or a missing entry.
	pub null_outputs: u64,
}

/// Decodes the rows of one task with the dictionaries acquired for it.
pub struct TaskDecoder<'a> {
	plan: &'a DecodePlan,
	dictionaries: AcquiredDictionaries,
	stats: DecodeStats,
}

impl<'a> TaskDecoder<'a> {
	pub fn new(plan: &'a DecodePlan, dictionaries: AcquiredDictionaries) -> Self {
		Self {
			plan,
			dictionaries,
			stats: DecodeStats::default(),
		}
	}

	pub fn stats(&self) -> DecodeStats {
		self.stats
	}

	pub fn decode(&mut self, row: Row) -> Result<Row> {
		if row.len() != self.plan.len() {
			return Err(DecodeError::RowArity {
				expected: self.plan.len(),
				actual: row.len(),
			});
		}
		self.stats.rows += 1;

		let mut values = row.into_values();
		for (index, dictionary) in self.dictionaries.live() {
			let Some(column) = self.plan.entry(index).and_then(|entry| entry.as_decode()) else {
				continue;
			};
			let raw = &values[index];
			if raw.is_undefined() {
				self.stats.null_inputs += 1;
				continue;
			}

			let decoded = decode_member(column, dictionary.as_ref(), raw)?;
			self.stats.lookups += 1;
			if decoded.is_undefined() {
				self.stats.null_outputs += 1;
			}
			values[index] = decoded;
		}

		Ok(Row::new(values))
	}
}

impl RowProcessor for TaskDecoder<'_> {
	fn process(&mut self, row: Row) -> Result<Row> {
		self.decode(row)
	}
}

fn decode_member(column: &DecodeColumn, dictionary: &dyn Dictionary, raw: &Value) -> Result<Value> {
	let key = surrogate_key(raw, &column.dimension.name)?;
	let member = dictionary.lookup(key).map_err(|source| DecodeError::Dictionary {
		column: column.dimension.name.clone(),
		source,
	})?;

	match member {
		None => Ok(Value::Undefined),
		Some(bytes) => column.conversion.convert(&bytes).map_err(|source| DecodeError::Conversion {
			column: column.dimension.name.clone(),
			source,
		}),
	}
}

/// Lazy decoding iterator over the child rows. Pulls one row at a time and
/// keeps the input order.
pub struct RowDecoder<'a, I> {
	input: I,
	decoder: TaskDecoder<'a>,
	exhausted: bool,
}

impl<'a, I> RowDecoder<'a, I>
where
	I: Iterator<Item = Result<Row>>,
{
	pub fn new(input: I, decoder: TaskDecoder<'a>) -> Self {
		Self {
			input,
			decoder,
			exhausted: false,
		}
	}

	pub fn stats(&self) -> DecodeStats {
		self.decoder.stats()
	}
}

impl<I> Iterator for RowDecoder<'_, I>
where
	I: Iterator<Item = Result<Row>>,
{
	type Item = Result<Row>;

	fn next(&mut self) -> Option<Self::Item> {
		match self.input.next() {
			Some(Ok(row)) => Some(self.decoder.decode(row)),
			Some(Err(err)) => Some(Err(err)),
			None => {
				if !self.exhausted {
					self.exhausted = true;
					let stats = self.decoder.stats;
					debug!(
						rows = stats.rows,
						lookups = stats.lookups,
						null_inputs = stats.null_inputs,
						null_outputs = stats.null_outputs,
						"dictionary decode finished"
					);
				}
				None
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.input.size_hint()
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::HashMap, sync::Arc};

	use reifydb_core::{
		AliasMap, ColumnDef, ColumnRef, DecoderRelation, DictionaryCache, DictionaryColumnIdentifier,
		DictionaryError, DimensionDescriptor, Schema, TableIdentity,
	};
	use reifydb_type::{DataKind, Type, encoding::MEMBER_DEFAULT_VALUE_BYTES};

	use super::*;
	use crate::{dictionary::acquire_dictionaries, profile::Profile};

	struct Cities;

	impl DecoderRelation for Cities {
		fn table_name(&self) -> &str {
			"sales"
		}

		fn contains(&self, column: &ColumnRef) -> bool {
			column.name == "city" || column.name == "qty"
		}

		fn lookup_dimension(&self, _table: &str, column: &str) -> Option<DimensionDescriptor> {
			match column {
				"city" => Some(DimensionDescriptor::new("city", "c_city", DataKind::String).dictionary()),
				"qty" => Some(DimensionDescriptor::new("qty", "c_qty", DataKind::Int).dictionary()),
				_ => None,
			}
		}
	}

	struct Members(HashMap<i32, Vec<u8>>);

	impl Dictionary for Members {
		fn lookup(&self, key: i32) -> std::result::Result<Option<Vec<u8>>, DictionaryError> {
			Ok(self.0.get(&key).cloned())
		}

		fn release(&self) {}
	}

	struct Cache;

	impl DictionaryCache for Cache {
		fn get(
			&self,
			identifier: &DictionaryColumnIdentifier,
		) -> std::result::Result<Arc<dyn Dictionary>, DictionaryError> {
			let members: HashMap<i32, Vec<u8>> = match identifier.column.to_string().as_str() {
				"c_city" => [(1, b"NYC".to_vec()), (2, b"LA".to_vec()), (3, MEMBER_DEFAULT_VALUE_BYTES.to_vec())]
					.into_iter()
					.collect(),
				_ => [(1, b"12".to_vec()), (2, b"twelve".to_vec())].into_iter().collect(),
			};
			Ok(Arc::new(Members(members)))
		}
	}

	fn plan() -> DecodePlan {
		let schema = Schema::new(vec![
			ColumnDef::new(ColumnRef::new("city", 1), Type::Int4),
			ColumnDef::new(ColumnRef::new("qty", 2), Type::Int4),
			ColumnDef::new(ColumnRef::new("note", 3), Type::Utf8),
		]);
		let relations: Vec<Arc<dyn DecoderRelation>> = vec![Arc::new(Cities)];
		DecodePlan::build(&schema, &Profile::AllowAll, &relations, &AliasMap::new()).unwrap()
	}

	fn decoder(plan: &DecodePlan) -> TaskDecoder<'_> {
		let tables = [TableIdentity::new("default", "sales", "t1")];
		TaskDecoder::new(plan, acquire_dictionaries(plan, &tables, &Cache))
	}

	#[test]
	fn test_decode_row() {
		let plan = plan();
		let mut decoder = decoder(&plan);
		let row = decoder.decode(Row::new(vec![Value::Int4(2), Value::Int4(1), Value::utf8("x")])).unwrap();
		assert_eq!(row.values(), &[Value::utf8("LA"), Value::Int4(12), Value::utf8("x")]);
	}

	#[test]
	fn test_nulls_are_not_looked_up() {
		let plan = plan();
		let mut decoder = decoder(&plan);
		let row = decoder.decode(Row::new(vec![Value::Undefined, Value::Undefined, Value::Undefined])).unwrap();
		assert!(row.values().iter().all(Value::is_undefined));
		assert_eq!(decoder.stats().lookups, 0);
		assert_eq!(decoder.stats().null_inputs, 2);
	}

	#[test]
	fn test_sentinel_and_missing_key_decode_to_null() {
		let plan = plan();
		let mut decoder = decoder(&plan);
		let row = decoder.decode(Row::new(vec![Value::Int4(3), Value::Int4(9), Value::Undefined])).unwrap();
		assert!(row[0].is_undefined());
		assert!(row[1].is_undefined());
		assert_eq!(decoder.stats().null_outputs, 2);
	}

	#[test]
	fn test_unparsable_member_is_an_error() {
		let plan = plan();
		let mut decoder = decoder(&plan);
		let err = decoder.decode(Row::new(vec![Value::Int4(1), Value::Int4(2), Value::Undefined])).unwrap_err();
		assert!(matches!(err, DecodeError::Conversion { ref column, .. } if column == "qty"));
	}

	#[test]
	fn test_non_int4_key_is_an_error() {
		let plan = plan();
		let mut decoder = decoder(&plan);
		let err = decoder.decode(Row::new(vec![Value::Int8(1), Value::Int4(1), Value::Undefined])).unwrap_err();
		assert!(matches!(err, DecodeError::InvalidSurrogateKey { found: "int8", .. }));
	}

	#[test]
	fn test_arity_mismatch() {
		let plan = plan();
		let mut decoder = decoder(&plan);
		assert!(matches!(
			decoder.decode(Row::new(vec![Value::Int4(1)])),
			Err(DecodeError::RowArity {
				expected: 3,
				actual: 1
			})
		));
	}

	#[test]
	fn test_iterator_preserves_order() {
		let plan = plan();
		let rows = vec![
			Row::new(vec![Value::Int4(1), Value::Undefined, Value::Undefined]),
			Row::new(vec![Value::Int4(2), Value::Undefined, Value::Undefined]),
		];
		let decoded: Vec<Row> =
			RowDecoder::new(rows.into_iter().map(Ok), decoder(&plan)).collect::<Result<_>>().unwrap();
		assert_eq!(decoded[0][0], Value::utf8("NYC"));
		assert_eq!(decoded[1][0], Value::utf8("LA"));
	}
}
