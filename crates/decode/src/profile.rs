// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_core::ColumnRef;

/// Which columns the operator is allowed to decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Profile {
	IncludeOnly(Vec<ColumnRef>),
	ExcludeOnly(Vec<ColumnRef>),
	#[default]
	AllowAll,
}

impl Profile {
	pub fn can_decode(&self, column: &ColumnRef) -> bool {
		match self {
			Profile::IncludeOnly(columns) => columns.iter().any(|c| c.matches(column)),
			Profile::ExcludeOnly(columns) => !columns.iter().any(|c| c.matches(column)),
			Profile::AllowAll => true,
		}
	}
}
