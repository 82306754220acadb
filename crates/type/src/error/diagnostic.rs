// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// User facing rendering of an error: a stable code plus optional context.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub column: Option<String>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			message: message.into(),
			column: None,
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}

	pub fn with_column(mut self, column: impl Into<String>) -> Self {
		self.column = Some(column.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	pub fn with_note(mut self, note: impl Into<String>) -> Self {
		self.notes.push(note.into());
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(column) = &self.column {
			write!(f, " (column `{}`)", column)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, ": {}", cause)?;
		}
		Ok(())
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}
