// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{
	error::{Result, TypeError},
	value::decimal::Decimal,
};

pub fn parse_decimal(text: &str) -> Result<Decimal> {
	let value = text.trim();

	if value.is_empty() {
		return Err(invalid(text));
	}

	let big_decimal = BigDecimal::from_str(value).map_err(|_| invalid(text))?;
	Ok(Decimal::new(big_decimal))
}

fn invalid(text: &str) -> TypeError {
	TypeError::InvalidNumber {
		text: text.to_string(),
		target: "decimal",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_decimal_integer() {
		let decimal = parse_decimal("123").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_decimal_with_fractional() {
		let decimal = parse_decimal("123.45").unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_decimal_negative_with_whitespace() {
		let decimal = parse_decimal("  -0.5 ").unwrap();
		assert_eq!(decimal.to_string(), "-0.5");
	}

	#[test]
	fn test_parse_decimal_empty() {
		assert!(parse_decimal("   ").is_err());
	}

	#[test]
	fn test_parse_decimal_garbage() {
		let err = parse_decimal("12a").unwrap_err();
		assert_eq!(
			err,
			TypeError::InvalidNumber {
				text: "12a".to_string(),
				target: "decimal"
			}
		);
	}
}
