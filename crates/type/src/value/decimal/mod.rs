// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use bigdecimal::{BigDecimal, RoundingMode};

use crate::error::{Result, TypeError};

mod parse;

pub use parse::parse_decimal;

/// Arbitrary precision decimal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Self(inner)
	}

	pub fn scale(&self) -> i64 {
		self.0.as_bigint_and_exponent().1
	}

	/// Number of significant digits of the unscaled value.
	pub fn precision(&self) -> u64 {
		self.0.digits()
	}

	/// Rounds half-up to `scale` and checks the result against `precision`.
	pub fn rescale(&self, precision: u8, scale: u8) -> Result<Decimal> {
		let scaled = Decimal(self.0.with_scale_round(scale as i64, RoundingMode::HalfUp));
		if scaled.precision() > precision as u64 {
			return Err(TypeError::DecimalOverflow {
				value: self.to_string(),
				precision,
				scale,
			});
		}
		Ok(scaled)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rescale_rounds_half_up() {
		let decimal = parse_decimal("12.345").unwrap();
		let scaled = decimal.rescale(18, 2).unwrap();
		assert_eq!(scaled.to_string(), "12.35");
		assert_eq!(scaled.scale(), 2);
	}

	#[test]
	fn test_rescale_pads_scale() {
		let decimal = parse_decimal("7").unwrap();
		assert_eq!(decimal.rescale(18, 2).unwrap().to_string(), "7.00");
	}

	#[test]
	fn test_rescale_overflow() {
		let decimal = parse_decimal("123456").unwrap();
		let err = decimal.rescale(5, 0).unwrap_err();
		assert_eq!(
			err,
			TypeError::DecimalOverflow {
				value: "123456".to_string(),
				precision: 5,
				scale: 0
			}
		);
	}
}
