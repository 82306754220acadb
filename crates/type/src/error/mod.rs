// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod diagnostic;

use diagnostic::{Diagnostic, IntoDiagnostic};

/// Failures while turning dictionary payloads into typed values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("'{text}' is not a valid {target}")]
	InvalidNumber {
		text: String,
		target: &'static str,
	},

	#[error("'{text}' is not a valid boolean")]
	InvalidBoolean {
		text: String,
	},

	#[error("'{text}' is not a valid {target}, expected {format}")]
	InvalidTemporal {
		text: String,
		target: &'static str,
		format: &'static str,
	},

	#[error("decimal {value} does not fit precision {precision} with scale {scale}")]
	DecimalOverflow {
		value: String,
		precision: u8,
		scale: u8,
	},

	#[error("invalid {charset} payload, valid up to byte {valid_up_to}")]
	InvalidEncoding {
		charset: &'static str,
		valid_up_to: usize,
	},
}

pub type Result<T> = std::result::Result<T, TypeError>;

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::InvalidNumber {
				target,
				..
			} => Diagnostic::new("TYPE_001", message)
				.with_label(format!("not a {target}"))
				.with_help("the dictionary member must be the decimal text form of the column type"),
			TypeError::InvalidBoolean {
				..
			} => Diagnostic::new("TYPE_002", message).with_help("expected 'true' or 'false'"),
			TypeError::InvalidTemporal {
				format,
				..
			} => Diagnostic::new("TYPE_003", message).with_help(format!("use the {format} layout")),
			TypeError::DecimalOverflow {
				precision,
				..
			} => Diagnostic::new("TYPE_004", message)
				.with_label(format!("more than {precision} digits"))
				.with_note("values are rounded half-up to the declared scale before the precision check"),
			TypeError::InvalidEncoding {
				..
			} => Diagnostic::new("TYPE_005", message),
		}
	}
}
