// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row decoding through the operator's interpreted strategy.

use reifydb_core::{ColumnDef, ColumnRef, DictionaryError, Row, Schema, StoreLocation, TaskScope};
use reifydb_decode::{
	DecodeConfig, DecodeError, DecodePlanEntry, DecodeStrategy, DictionaryDecodeOperator, Profile, Result,
	RowProcessor, RowTransform,
};
use reifydb_testing::{
	MemoryDictionaryCache,
	fixture::{
		AMOUNT, CITY, COUNTRY, NOTE, QUANTITY, REGION, TS, sales_cache, sales_relation, sales_schema, sales_table,
		unique_location,
	},
	init_tracing,
};
use reifydb_type::{Type, Value};

fn operator(location: &StoreLocation, profile: Profile) -> DictionaryDecodeOperator {
	DictionaryDecodeOperator::builder(sales_schema())
		.config(DecodeConfig::new(location.clone()).with_strategy(DecodeStrategy::Interpreted))
		.profile(profile)
		.relation(sales_relation())
		.table(sales_table())
		.build()
		.unwrap()
}

fn registered_cache() -> (StoreLocation, MemoryDictionaryCache) {
	init_tracing();
	let location = unique_location();
	let cache = sales_cache();
	cache.register(location.clone());
	(location, cache)
}

fn sales_row(city: i32, country: i32, region: i32, amount: i32, quantity: i32) -> Row {
	Row::new(vec![
		Value::Int4(city),
		Value::Int4(country),
		Value::Int4(region),
		Value::Int4(amount),
		Value::Int4(quantity),
		Value::Int4(1_700_000),
		Value::utf8("n"),
	])
}

fn decode(operator: &DictionaryDecodeOperator, rows: Vec<Row>) -> Result<Vec<Row>> {
	let task = TaskScope::new(0);
	let decoded = operator.execute(&task, rows.into_iter().map(Ok))?.collect::<Result<Vec<_>>>();
	task.complete();
	decoded
}

#[test]
fn test_decodes_city_member() -> Result<()> {
	let (location, _cache) = registered_cache();
	let operator = operator(&location, Profile::AllowAll);

	let rows = decode(&operator, vec![sales_row(2, 1, 1, 1, 1)])?;
	assert_eq!(rows[0][CITY], Value::utf8("LA"));
	assert_eq!(rows[0][COUNTRY], Value::utf8("US"));
	assert_eq!(rows[0][REGION], Value::utf8("East"));
	assert_eq!(rows[0][AMOUNT].to_string(), "12.35");
	assert_eq!(rows[0][QUANTITY], Value::Int4(3));
	assert_eq!(rows[0][TS], Value::Int4(1_700_000));
	assert_eq!(rows[0][NOTE], Value::utf8("n"));
	Ok(())
}

#[test]
fn test_output_schema_reports_decoded_types() {
	let operator = operator(&unique_location(), Profile::AllowAll);
	assert_eq!(
		operator.output_schema().types(),
		vec![
			Type::Utf8,
			Type::Utf8,
			Type::Utf8,
			Type::Decimal {
				precision: 18,
				scale: 2
			},
			Type::Int4,
			Type::Int4,
			Type::Utf8,
		]
	);
}

#[test]
fn test_include_only_leaves_other_keys() -> Result<()> {
	let (location, cache) = registered_cache();
	let operator = operator(&location, Profile::IncludeOnly(vec![ColumnRef::new("city", 1)]));
	assert!(operator.plan().entry(CITY).unwrap().is_decode());
	assert_eq!(operator.plan().entry(COUNTRY), Some(&DecodePlanEntry::Skip));

	let rows = decode(&operator, vec![sales_row(1, 2, 1, 1, 1)])?;
	assert_eq!(rows[0][CITY], Value::utf8("NYC"));
	assert_eq!(rows[0][COUNTRY], Value::Int4(2));
	assert_eq!(cache.gets("c_country"), 0);
	Ok(())
}

#[test]
fn test_exclude_only_and_allow_all() {
	let location = unique_location();
	let excluded = operator(&location, Profile::ExcludeOnly(vec![ColumnRef::new("CITY", 1)]));
	assert!(!excluded.plan().entry(CITY).unwrap().is_decode());
	assert!(excluded.plan().entry(COUNTRY).unwrap().is_decode());

	let nothing_excluded = operator(&location, Profile::ExcludeOnly(vec![]));
	let all = operator(&location, Profile::AllowAll);
	assert_eq!(nothing_excluded.plan(), all.plan());
	assert_eq!(all.plan().decode_columns().count(), 5);
}

#[test]
fn test_profile_requires_matching_identity() {
	let operator = operator(&unique_location(), Profile::IncludeOnly(vec![ColumnRef::new("city", 99)]));
	assert!(!operator.is_required_to_decode());
}

#[test]
fn test_default_decimal_precision_and_scale() -> Result<()> {
	let (location, _cache) = registered_cache();
	let operator = operator(&location, Profile::IncludeOnly(vec![ColumnRef::new("amount", 4)]));

	let rows = decode(&operator, vec![sales_row(1, 1, 1, 2, 1), sales_row(1, 1, 1, 3, 1)])?;
	match &rows[0][AMOUNT] {
		Value::Decimal(decimal) => {
			assert_eq!(decimal.to_string(), "7.00");
			assert_eq!(decimal.scale(), 2);
		}
		other => panic!("expected decimal, got {other:?}"),
	}
	assert_eq!(rows[1][AMOUNT], Value::Undefined);
	Ok(())
}

#[test]
fn test_null_keys_stay_null_without_lookup() -> Result<()> {
	let (location, cache) = registered_cache();
	let operator = operator(&location, Profile::AllowAll);

	let mut row = sales_row(1, 1, 1, 1, 1).into_values();
	row[CITY] = Value::Undefined;
	let rows = decode(&operator, vec![Row::new(row)])?;

	assert_eq!(rows[0][CITY], Value::Undefined);
	assert_eq!(cache.lookups("c_city"), 0);
	assert_eq!(cache.lookups("c_country"), 1);
	Ok(())
}

#[test]
fn test_sentinel_and_unknown_keys_decode_to_null() -> Result<()> {
	let (location, _cache) = registered_cache();
	let operator = operator(&location, Profile::AllowAll);

	let rows = decode(&operator, vec![sales_row(3, 99, 1, 1, 3)])?;
	assert_eq!(rows[0][CITY], Value::Undefined);
	assert_eq!(rows[0][COUNTRY], Value::Undefined);
	assert_eq!(rows[0][QUANTITY], Value::Undefined);
	Ok(())
}

#[test]
fn test_failed_fetch_leaves_surrogate_keys() -> Result<()> {
	let (location, cache) = registered_cache();
	cache.fail("c_region");
	let operator = operator(&location, Profile::AllowAll);
	assert!(operator.plan().entry(REGION).unwrap().is_decode());

	let rows = decode(&operator, vec![sales_row(2, 1, 2, 1, 1)])?;
	assert_eq!(rows[0][REGION], Value::Int4(2));
	assert_eq!(rows[0][CITY], Value::utf8("LA"));
	assert_eq!(cache.gets("c_region"), 0);
	assert_eq!(cache.releases("c_region"), 0);
	Ok(())
}

#[test]
fn test_decode_is_idempotent() -> Result<()> {
	let (location, _cache) = registered_cache();
	let operator = operator(&location, Profile::AllowAll);

	let first = decode(&operator, vec![sales_row(2, 2, 2, 2, 2)])?;
	let second = decode(&operator, vec![sales_row(2, 2, 2, 2, 2), sales_row(2, 2, 2, 2, 2)])?;
	assert_eq!(first[0], second[0]);
	assert_eq!(second[0], second[1]);
	Ok(())
}

#[test]
fn test_order_is_preserved() -> Result<()> {
	let (location, _cache) = registered_cache();
	let operator = operator(&location, Profile::IncludeOnly(vec![ColumnRef::new("city", 1)]));

	let keys = [2, 1, 1, 2, 1];
	let rows = decode(&operator, keys.iter().map(|&key| sales_row(key, 1, 1, 1, 1)).collect())?;
	let cities: Vec<String> = rows.iter().map(|row| row[CITY].to_string()).collect();
	assert_eq!(cities, vec!["LA", "NYC", "NYC", "LA", "NYC"]);
	Ok(())
}

#[test]
fn test_unparsable_member_fails_the_task() {
	let (location, cache) = registered_cache();
	cache.insert("c_quantity", [(1, "three")]);
	let operator = operator(&location, Profile::AllowAll);

	let err = decode(&operator, vec![sales_row(1, 1, 1, 1, 1)]).unwrap_err();
	assert!(matches!(err, DecodeError::Conversion { ref column, .. } if column == "quantity"));
	assert_eq!(cache.pinned("c_quantity"), 0);
}

#[test]
fn test_passthrough_needs_no_cache() -> Result<()> {
	let location = StoreLocation::new("memory://test/never-registered");
	let operator = operator(&location, Profile::IncludeOnly(vec![]));
	let input = vec![sales_row(1, 2, 3, 4, 5)];

	let rows = decode(&operator, input.clone())?;
	assert_eq!(rows, input);
	Ok(())
}

#[test]
fn test_missing_cache_is_an_error() {
	let location = StoreLocation::new("memory://test/missing-cache");
	let operator = operator(&location, Profile::AllowAll);
	let task = TaskScope::new(0);
	let result = operator.execute(&task, std::iter::empty::<Result<Row>>());
	assert!(matches!(result, Err(DecodeError::Cache(DictionaryError::NoCache { .. }))));
}

#[test]
fn test_alias_decodes_canonical_column() -> Result<()> {
	let (location, _cache) = registered_cache();
	let town = ColumnRef::new("town", 42);
	let operator = DictionaryDecodeOperator::builder(Schema::new(vec![ColumnDef::new(town.clone(), Type::Int4)]))
		.config(DecodeConfig::new(location.clone()).with_strategy(DecodeStrategy::Interpreted))
		.relation(sales_relation())
		.alias(&town, ColumnRef::new("city", 1))
		.table(sales_table())
		.build()?;

	let rows = decode(&operator, vec![Row::new(vec![Value::Int4(1)])])?;
	assert_eq!(rows[0][0], Value::utf8("NYC"));
	Ok(())
}

#[test]
fn test_open_processes_rows() -> Result<()> {
	let (location, _cache) = registered_cache();
	let operator = operator(&location, Profile::AllowAll);

	let task = TaskScope::new(1);
	let mut processor = operator.open(&task)?;
	let row = processor.process(sales_row(1, 2, 1, 1, 1))?;
	assert_eq!(row[COUNTRY], Value::utf8("CA"));
	drop(processor);
	task.complete();
	Ok(())
}
