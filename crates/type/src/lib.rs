// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod encoding;
pub mod error;
pub mod value;

pub use error::{Result, TypeError, diagnostic::{Diagnostic, IntoDiagnostic}};
pub use value::{
	Value,
	decimal::Decimal,
	kind::DataKind,
	temporal::{Date, DateTime},
	r#type::{StructField, Type},
};
