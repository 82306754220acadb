// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A small `sales` table with one column per decode case.
//!
//! | column   | id | dimension                        | input type |
//! |----------|----|----------------------------------|------------|
//! | city     | 1  | c_city, string, dictionary       | Int4       |
//! | country  | 2  | c_country, string, dictionary    | Int4       |
//! | region   | 3  | c_region, string, dictionary     | Int4       |
//! | amount   | 4  | c_amount, decimal, dictionary    | Int4       |
//! | quantity | 5  | c_quantity, int, dictionary      | Int4       |
//! | ts       | 6  | c_ts, timestamp, direct          | Int4       |
//! | note     | 7  | none                             | Utf8       |

use std::sync::Arc;

use reifydb_core::{ColumnDef, ColumnRef, DecoderRelation, DimensionDescriptor, Schema, StoreLocation, TableIdentity};
use reifydb_type::{DataKind, Type, encoding::MEMBER_DEFAULT_VALUE};
use uuid::Uuid;

use crate::{dictionary::MemoryDictionaryCache, relation::MemoryRelation};

pub const CITY: usize = 0;
pub const COUNTRY: usize = 1;
pub const REGION: usize = 2;
pub const AMOUNT: usize = 3;
pub const QUANTITY: usize = 4;
pub const TS: usize = 5;
pub const NOTE: usize = 6;

pub fn sales_table() -> TableIdentity {
	TableIdentity::new("default", "sales", "t1")
}

pub fn sales_columns() -> Vec<ColumnRef> {
	vec![
		ColumnRef::new("city", 1),
		ColumnRef::new("country", 2),
		ColumnRef::new("region", 3),
		ColumnRef::new("amount", 4),
		ColumnRef::new("quantity", 5),
		ColumnRef::new("ts", 6),
		ColumnRef::new("note", 7),
	]
}

pub fn sales_schema() -> Schema {
	let columns = sales_columns()
		.into_iter()
		.enumerate()
		.map(|(index, column)| {
			let ty = if index == NOTE {
				Type::Utf8
			} else {
				Type::Int4
			};
			ColumnDef::new(column, ty)
		})
		.collect();
	Schema::new(columns)
}

pub fn sales_relation() -> Arc<dyn DecoderRelation> {
	let columns = sales_columns();
	MemoryRelation::new("sales")
		.column(columns[CITY].clone(), DimensionDescriptor::new("city", "c_city", DataKind::String).dictionary())
		.column(columns[COUNTRY].clone(), DimensionDescriptor::new("country", "c_country", DataKind::String).dictionary())
		.column(columns[REGION].clone(), DimensionDescriptor::new("region", "c_region", DataKind::String).dictionary())
		.column(columns[AMOUNT].clone(), DimensionDescriptor::new("amount", "c_amount", DataKind::Decimal).dictionary())
		.column(columns[QUANTITY].clone(), DimensionDescriptor::new("quantity", "c_quantity", DataKind::Int).dictionary())
		.column(columns[TS].clone(), DimensionDescriptor::new("ts", "c_ts", DataKind::Timestamp).direct_dictionary())
		.plain(columns[NOTE].clone())
		.into_arc()
}

/// Members for every stored dictionary of the `sales` table.
pub fn sales_cache() -> MemoryDictionaryCache {
	MemoryDictionaryCache::new()
		.with("c_city", [(1, "NYC"), (2, "LA"), (3, MEMBER_DEFAULT_VALUE)])
		.with("c_country", [(1, "US"), (2, "CA")])
		.with("c_region", [(1, "East"), (2, "West")])
		.with("c_amount", [(1, "12.345"), (2, "7"), (3, "")])
		.with("c_quantity", [(1, "3"), (2, "-40"), (3, "")])
}

/// A store location no other test uses, so caches registered under it do not
/// interfere across parallel tests.
pub fn unique_location() -> StoreLocation {
	StoreLocation::new(format!("memory://test/{}", Uuid::new_v4()))
}
