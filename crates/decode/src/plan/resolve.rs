// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_core::{AliasMap, ColumnRef, DecoderRelation, DimensionDescriptor};

/// Finds the relation and dimension defining an output column.
pub(crate) struct ColumnResolver<'a> {
	relations: &'a [Arc<dyn DecoderRelation>],
	aliases: &'a AliasMap,
}

pub(crate) struct ResolvedColumn<'a> {
	pub canonical: &'a ColumnRef,
	pub relation: &'a dyn DecoderRelation,
}

impl<'a> ColumnResolver<'a> {
	pub fn new(relations: &'a [Arc<dyn DecoderRelation>], aliases: &'a AliasMap) -> Self {
		Self {
			relations,
			aliases,
		}
	}

	/// Applies the alias map, then picks the first relation containing the column.
	pub fn resolve(&self, column: &'a ColumnRef) -> Option<ResolvedColumn<'a>> {
		let canonical = self.aliases.resolve(column);
		self.relations.iter().find(|relation| relation.contains(canonical)).map(|relation| ResolvedColumn {
			canonical,
			relation: relation.as_ref(),
		})
	}
}

impl ResolvedColumn<'_> {
	pub fn dimension(&self) -> Option<DimensionDescriptor> {
		self.relation.lookup_dimension(self.relation.table_name(), &self.canonical.name)
	}
}
