// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Parsers for the decimal text form the dictionary writer uses for numeric members.

use std::str::FromStr;

use crate::error::{Result, TypeError};

fn parse_number<T: FromStr>(text: &str, target: &'static str) -> Result<T> {
	text.parse::<T>().map_err(|_| TypeError::InvalidNumber {
		text: text.to_string(),
		target,
	})
}

pub fn parse_int2(text: &str) -> Result<i16> {
	parse_number(text, "int2")
}

pub fn parse_int4(text: &str) -> Result<i32> {
	parse_number(text, "int4")
}

pub fn parse_int8(text: &str) -> Result<i64> {
	parse_number(text, "int8")
}

pub fn parse_float8(text: &str) -> Result<f64> {
	parse_number(text, "float8")
}

pub fn parse_bool(text: &str) -> Result<bool> {
	if text.eq_ignore_ascii_case("true") {
		Ok(true)
	} else if text.eq_ignore_ascii_case("false") {
		Ok(false)
	} else {
		Err(TypeError::InvalidBoolean {
			text: text.to_string(),
		})
	}
}
