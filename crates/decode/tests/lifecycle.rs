// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Dictionaries acquired by a task are released exactly once when it ends.

use reifydb_core::{Row, StoreLocation, TaskScope};
use reifydb_decode::{DecodeConfig, DecodeStrategy, DictionaryDecodeOperator, Profile, Result};
use reifydb_testing::{
	MemoryDictionaryCache,
	fixture::{sales_cache, sales_relation, sales_schema, sales_table, unique_location},
	init_tracing,
};
use reifydb_type::Value;

const COLUMNS: [&str; 5] = ["c_city", "c_country", "c_region", "c_amount", "c_quantity"];

fn setup() -> (DictionaryDecodeOperator, MemoryDictionaryCache) {
	init_tracing();
	let location = unique_location();
	let cache = sales_cache();
	cache.register(location.clone());
	(operator(location), cache)
}

fn operator(location: StoreLocation) -> DictionaryDecodeOperator {
	DictionaryDecodeOperator::builder(sales_schema())
		.config(DecodeConfig::new(location).with_strategy(DecodeStrategy::Interpreted))
		.profile(Profile::AllowAll)
		.relation(sales_relation())
		.table(sales_table())
		.build()
		.unwrap()
}

fn row(key: i32) -> Row {
	Row::new(vec![Value::Int4(key); 7])
}

#[test]
fn test_released_once_on_success() -> Result<()> {
	let (operator, cache) = setup();
	let task = TaskScope::new(0);
	let rows = operator.execute(&task, vec![Ok(row(1)), Ok(row(2))].into_iter())?.collect::<Result<Vec<_>>>()?;
	assert_eq!(rows.len(), 2);

	for column in COLUMNS {
		assert_eq!(cache.pinned(column), 1, "{column} must stay pinned while the task runs");
	}

	task.complete();
	for column in COLUMNS {
		assert_eq!(cache.gets(column), 1);
		assert_eq!(cache.releases(column), 1);
	}
	Ok(())
}

#[test]
fn test_released_once_on_failure() -> Result<()> {
	let (operator, cache) = setup();
	let task = TaskScope::new(0);
	let mut rows = operator.execute(&task, vec![Ok(row(1)), Ok(Row::new(vec![]))].into_iter())?;
	assert!(rows.next().unwrap().is_ok());
	assert!(rows.next().unwrap().is_err());
	drop(rows);

	task.fail();
	for column in COLUMNS {
		assert_eq!(cache.releases(column), 1);
	}
	Ok(())
}

#[test]
fn test_released_when_task_is_abandoned() -> Result<()> {
	let (operator, cache) = setup();
	{
		let task = TaskScope::new(0);
		let mut rows = operator.execute(&task, std::iter::repeat_with(|| Ok(row(1))))?;
		rows.next();
	}
	assert_eq!(cache.total_gets(), 5);
	assert_eq!(cache.total_releases(), 5);
	Ok(())
}

#[test]
fn test_failed_fetch_is_never_released() -> Result<()> {
	let (operator, cache) = setup();
	cache.fail("c_country");
	let task = TaskScope::new(0);
	operator.execute(&task, std::iter::empty::<Result<Row>>())?.for_each(drop);
	task.complete();

	assert_eq!(cache.releases("c_country"), 0);
	assert_eq!(cache.total_gets(), 4);
	assert_eq!(cache.total_releases(), 4);
	Ok(())
}

#[test]
fn test_each_task_acquires_its_own_dictionaries() -> Result<()> {
	let (operator, cache) = setup();
	let first = TaskScope::new(0);
	let second = TaskScope::new(1);
	operator.execute(&first, std::iter::once(Ok(row(1))))?.for_each(drop);
	operator.execute(&second, std::iter::once(Ok(row(2))))?.for_each(drop);
	assert_eq!(cache.pinned("c_city"), 2);

	first.complete();
	assert_eq!(cache.pinned("c_city"), 1);
	second.fail();
	assert_eq!(cache.pinned("c_city"), 0);
	Ok(())
}
