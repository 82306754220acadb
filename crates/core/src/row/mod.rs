// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Index;

use reifydb_type::Value;

/// A single row flowing between operators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
	values: Vec<Value>,
}

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn into_values(self) -> Vec<Value> {
		self.values
	}
}

impl Index<usize> for Row {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.values[index]
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Self::new(values)
	}
}
