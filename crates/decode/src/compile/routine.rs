// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_core::{Dictionary, Row, TaskContext};
use tracing::{instrument, trace};

use super::{CompiledExpr, RoutineEnv};
use crate::{
	dictionary::{DictionaryLease, ReacquirableDictionary, register_release},
	error::{DecodeError, Result},
	operator::RowProcessor,
};

/// Output of code generation, ready to ship to tasks.
///
/// Dictionary handles are kept as unbound templates: only their keys travel,
/// each task binds its own references.
#[derive(Debug)]
pub struct GeneratedRoutine {
	width: usize,
	outputs: Vec<CompiledExpr>,
	references: Vec<ReacquirableDictionary>,
}

impl GeneratedRoutine {
	pub(crate) fn new(width: usize, outputs: Vec<CompiledExpr>, references: Vec<ReacquirableDictionary>) -> Self {
		Self {
			width,
			outputs,
			references,
		}
	}

	pub fn outputs(&self) -> &[CompiledExpr] {
		&self.outputs
	}

	pub fn references(&self) -> &[ReacquirableDictionary] {
		&self.references
	}

	/// One line per output column.
	pub fn describe(&self) -> String {
		self.outputs
			.iter()
			.enumerate()
			.map(|(index, output)| format!("  #{index}: {}\n", output.description()))
			.collect()
	}

	/// Binds the routine to a task. The task's dictionary handles are
	/// released when it completes.
	#[instrument(name = "decode::compile::instantiate", level = "trace", skip_all, fields(partition = task.partition()))]
	pub fn instantiate(&self, task: &dyn TaskContext) -> RoutineInstance {
		let references: Vec<Arc<ReacquirableDictionary>> =
			self.references.iter().map(|template| Arc::new(template.detach())).collect();

		let lease = DictionaryLease::new(
			references.iter().map(|handle| Arc::clone(handle) as Arc<dyn Dictionary>).collect(),
		);
		register_release(task, lease);
		trace!(references = references.len(), "routine bound to task");

		RoutineInstance {
			width: self.width,
			outputs: self.outputs.clone(),
			references,
		}
	}
}

/// A generated routine bound to one task.
pub struct RoutineInstance {
	width: usize,
	outputs: Vec<CompiledExpr>,
	references: Vec<Arc<ReacquirableDictionary>>,
}

impl RoutineInstance {
	pub fn eval(&self, row: &Row) -> Result<Row> {
		if row.len() != self.width {
			return Err(DecodeError::RowArity {
				expected: self.width,
				actual: row.len(),
			});
		}
		let env = RoutineEnv::new(&self.references);
		let values = self.outputs.iter().map(|output| output.eval(row, &env)).collect::<Result<Vec<_>>>()?;
		Ok(Row::new(values))
	}

	pub fn run<I>(&self, input: I) -> CompiledRows<'_, I>
	where
		I: Iterator<Item = Result<Row>>,
	{
		CompiledRows {
			routine: self,
			input,
		}
	}
}

impl RowProcessor for RoutineInstance {
	fn process(&mut self, row: Row) -> Result<Row> {
		self.eval(&row)
	}
}

/// Lazy iterator applying a routine to the child rows.
pub struct CompiledRows<'a, I> {
	routine: &'a RoutineInstance,
	input: I,
}

impl<I> Iterator for CompiledRows<'_, I>
where
	I: Iterator<Item = Result<Row>>,
{
	type Item = Result<Row>;

	fn next(&mut self) -> Option<Self::Item> {
		let row = self.input.next()?;
		Some(row.and_then(|row| self.routine.eval(&row)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.input.size_hint()
	}
}
