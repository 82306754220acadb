// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{mem, sync::Arc};

use reifydb_core::{Dictionary, Schema};
use tracing::trace;

use super::{CompiledExpr, GeneratedRoutine};
use crate::{
	dictionary::ReacquirableDictionary,
	error::{DecodeError, Result},
};

/// Emission state of the host's code generator.
///
/// Holds the expression bound to each input column and the table of
/// dictionary handles referenced by emitted code. Handles added here are
/// live planning-side references; they are released when the context is
/// finished or dropped.
pub struct CodegenContext {
	inputs: Vec<CompiledExpr>,
	references: Vec<Arc<ReacquirableDictionary>>,
}

impl CodegenContext {
	pub fn new(inputs: Vec<CompiledExpr>) -> Self {
		Self {
			inputs,
			references: Vec::new(),
		}
	}

	/// Binds every input column to a plain column read.
	pub fn for_schema(schema: &Schema) -> Self {
		Self::new((0..schema.len()).map(CompiledExpr::input).collect())
	}

	pub fn input(&self, index: usize) -> Result<CompiledExpr> {
		self.inputs.get(index).cloned().ok_or(DecodeError::UnboundInput {
			index,
		})
	}

	pub fn input_count(&self) -> usize {
		self.inputs.len()
	}

	/// Registers a handle and returns the slot emitted code uses to reach it.
	pub fn add_reference(&mut self, handle: ReacquirableDictionary) -> usize {
		self.references.push(Arc::new(handle));
		self.references.len() - 1
	}

	pub fn reference_count(&self) -> usize {
		self.references.len()
	}

	/// Closes emission. The routine keeps detached copies of the handles,
	/// the planning-side references are released.
	pub fn finish(mut self, outputs: Vec<CompiledExpr>) -> GeneratedRoutine {
		let templates = self.references.iter().map(|handle| handle.detach()).collect();
		self.release_references();
		GeneratedRoutine::new(self.inputs.len(), outputs, templates)
	}

	fn release_references(&mut self) {
		let references = mem::take(&mut self.references);
		if !references.is_empty() {
			trace!(references = references.len(), "releasing planning dictionary handles");
		}
		for handle in references {
			handle.release();
		}
	}
}

impl Drop for CodegenContext {
	fn drop(&mut self) {
		self.release_references();
	}
}
