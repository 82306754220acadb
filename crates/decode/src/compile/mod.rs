// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Compiled decoding: decode logic emitted as closures into the host's
//! generated row routine.

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use reifydb_core::Row;
use reifydb_type::Value;

use crate::{
	dictionary::ReacquirableDictionary,
	error::{DecodeError, Result},
};

mod context;
pub(crate) mod emit;
mod routine;

pub use context::CodegenContext;
pub use routine::{CompiledRows, GeneratedRoutine, RoutineInstance};

type EvalFn = dyn Fn(&Row, &RoutineEnv<'_>) -> Result<Value> + Send + Sync;

/// Per row state visible to compiled expressions: the task's dictionary
/// handles, addressed by the slot they were registered under.
pub struct RoutineEnv<'a> {
	references: &'a [Arc<ReacquirableDictionary>],
}

impl<'a> RoutineEnv<'a> {
	pub fn new(references: &'a [Arc<ReacquirableDictionary>]) -> Self {
		Self {
			references,
		}
	}

	pub fn reference(&self, slot: usize) -> Result<&'a ReacquirableDictionary> {
		self.references.get(slot).map(|handle| handle.as_ref()).ok_or(DecodeError::UnboundReference {
			slot,
		})
	}
}

/// A compiled expression producing one output field from an input row.
#[derive(Clone)]
pub struct CompiledExpr {
	eval: Arc<EvalFn>,
	description: String,
}

impl CompiledExpr {
	pub fn new<F>(description: impl Into<String>, eval: F) -> Self
	where
		F: Fn(&Row, &RoutineEnv<'_>) -> Result<Value> + Send + Sync + 'static,
	{
		Self {
			eval: Arc::new(eval),
			description: description.into(),
		}
	}

	/// Reads input column `index` unchanged.
	pub fn input(index: usize) -> Self {
		Self::new(format!("#{index}"), move |row, _env| {
			row.get(index).cloned().ok_or(DecodeError::RowArity {
				expected: index + 1,
				actual: row.len(),
			})
		})
	}

	#[inline]
	pub fn eval(&self, row: &Row, env: &RoutineEnv<'_>) -> Result<Value> {
		(self.eval)(row, env)
	}

	pub fn description(&self) -> &str {
		&self.description
	}
}

impl Debug for CompiledExpr {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("CompiledExpr").field(&self.description).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_input_reads_column() {
		let expr = CompiledExpr::input(1);
		let row = Row::new(vec![Value::Int4(1), Value::utf8("b")]);
		assert_eq!(expr.eval(&row, &RoutineEnv::new(&[])).unwrap(), Value::utf8("b"));
		assert_eq!(expr.description(), "#1");
	}

	#[test]
	fn test_input_out_of_range() {
		let expr = CompiledExpr::input(4);
		let row = Row::new(vec![Value::Int4(1)]);
		assert!(matches!(expr.eval(&row, &RoutineEnv::new(&[])), Err(DecodeError::RowArity { .. })));
	}

	#[test]
	fn test_unknown_reference_slot() {
		let env = RoutineEnv::new(&[]);
		assert!(matches!(
			env.reference(0),
			Err(DecodeError::UnboundReference {
				slot: 0
			})
		));
	}
}
