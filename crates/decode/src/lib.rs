// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Dictionary decode operator.
//!
//! Dictionary encoded columns carry 32-bit surrogate keys in place of their
//! values. This crate decides once per plan which output columns have to be
//! decoded ([`DecodePlan`]), acquires the column dictionaries from the shared
//! cache per task, and rewrites the keys back into typed values either by
//! wrapping the child row iterator ([`RowDecoder`]) or by emitting decode
//! closures into the host's generated row routine ([`GeneratedRoutine`]).
//!
//! # Example
//!
//! ```ignore
//! let operator = DictionaryDecodeOperator::builder(input_schema)
//!     .config(DecodeConfig::default())
//!     .relation(relation)
//!     .table(TableIdentity::new("default", "sales", "t1"))
//!     .build()?;
//!
//! let task = TaskScope::new(0);
//! for row in operator.execute(&task, rows)? {
//!     println!("{:?}", row?);
//! }
//! task.complete();
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod compile;
pub mod config;
pub mod convert;
pub mod dictionary;
pub mod error;
pub mod operator;
pub mod plan;
pub mod profile;
pub mod row;

pub use compile::{CodegenContext, CompiledExpr, GeneratedRoutine, RoutineInstance};
pub use config::{DecodeConfig, DecodeStrategy};
pub use dictionary::{AcquiredDictionaries, DictionaryLease, ReacquirableDictionary, acquire_dictionaries};
pub use error::{DecodeError, Result};
pub use operator::{
	DecodeOperatorBuilder, DecodedRows, DictionaryDecodeOperator, InlineCodegen, RowProcessor, RowTransform,
};
pub use plan::{DecodeColumn, DecodePlan, DecodePlanEntry, translate::translate_dimension};
pub use profile::Profile;
pub use row::{DecodeStats, RowDecoder, TaskDecoder};
