// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod interface;
pub mod row;
pub mod schema;

pub use interface::{
	catalog::{
		ColumnIdentifier, DictionaryColumnIdentifier, DimensionDescriptor, Encodings, StoreLocation,
		TableIdentity,
	},
	dictionary::{CacheProvider, Dictionary, DictionaryCache, DictionaryError},
	relation::{AliasMap, DecoderRelation},
	task::{CompletionListener, TaskContext, TaskOutcome, TaskScope},
};
pub use row::Row;
pub use schema::{ColumnDef, ColumnId, ColumnRef, Schema};
