// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_core::DictionaryError;
use reifydb_type::{DataKind, Diagnostic, IntoDiagnostic, TypeError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
	#[error("column `{column}` has data kind {kind} which has no decoded type")]
	UnsupportedDataKind {
		column: String,
		kind: DataKind,
	},

	#[error("array column `{column}` has no element dimension")]
	MissingElementDimension {
		column: String,
	},

	#[error("column `{column}` expects an int4 surrogate key, found {found}")]
	InvalidSurrogateKey {
		column: String,
		found: &'static str,
	},

	#[error("cannot convert dictionary member of column `{column}`")]
	Conversion {
		column: String,
		#[source]
		source: TypeError,
	},

	#[error("dictionary lookup failed for column `{column}`")]
	Dictionary {
		column: String,
		#[source]
		source: DictionaryError,
	},

	#[error(transparent)]
	Cache(#[from] DictionaryError),

	#[error("row has {actual} values, schema expects {expected}")]
	RowArity {
		expected: usize,
		actual: usize,
	},

	#[error("no upstream expression bound for input column {index}")]
	UnboundInput {
		index: usize,
	},

	#[error("generated routine references dictionary slot {slot} which was never registered")]
	UnboundReference {
		slot: usize,
	},
}

pub type Result<T> = std::result::Result<T, DecodeError>;

impl IntoDiagnostic for DecodeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			DecodeError::UnsupportedDataKind {
				column,
				kind,
			} => Diagnostic::new("DECODE_001", message)
				.with_column(column)
				.with_label(format!("{kind} cannot be decoded"))
				.with_help("only string, numeric, boolean, decimal, date, timestamp and nested kinds are supported"),
			DecodeError::MissingElementDimension {
				column,
			} => Diagnostic::new("DECODE_002", message).with_column(column),
			DecodeError::InvalidSurrogateKey {
				column,
				..
			} => Diagnostic::new("DECODE_003", message)
				.with_column(column)
				.with_note("dictionary encoded columns must arrive as int4 surrogate keys or undefined"),
			DecodeError::Conversion {
				column,
				source,
			} => Diagnostic::new("DECODE_004", message).with_column(column).with_cause(source.into_diagnostic()),
			DecodeError::Dictionary {
				column,
				source,
			} => Diagnostic::new("DECODE_005", message).with_column(column).with_cause(source.into_diagnostic()),
			DecodeError::Cache(source) => source.into_diagnostic(),
			DecodeError::RowArity {
				..
			} => Diagnostic::new("DECODE_006", message),
			DecodeError::UnboundInput {
				..
			} => Diagnostic::new("DECODE_007", message),
			DecodeError::UnboundReference {
				..
			} => Diagnostic::new("DECODE_008", message),
		}
	}
}
