// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Per column decode decisions, computed once per operator.

use std::{
	fmt::{self, Display, Formatter},
	sync::Arc,
};

use reifydb_core::{AliasMap, ColumnDef, ColumnIdentifier, DecoderRelation, DimensionDescriptor, Schema};
use reifydb_type::Type;
use tracing::{instrument, trace};

use crate::{convert::MemberConversion, error::Result, profile::Profile};

mod resolve;
pub mod translate;

use resolve::ColumnResolver;
use translate::translate_dimension;

/// Everything needed to decode one output column.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeColumn {
	pub table_name: String,
	pub column_identifier: ColumnIdentifier,
	pub dimension: DimensionDescriptor,
	pub output_type: Type,
	pub conversion: MemberConversion,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodePlanEntry {
	Decode(DecodeColumn),
	Skip,
}

impl DecodePlanEntry {
	pub fn as_decode(&self) -> Option<&DecodeColumn> {
		match self {
			DecodePlanEntry::Decode(column) => Some(column),
			DecodePlanEntry::Skip => None,
		}
	}

	pub fn is_decode(&self) -> bool {
		matches!(self, DecodePlanEntry::Decode(_))
	}
}

/// One entry per output column, in output order. Skipped columns keep their
/// slot so indexes line up with the row.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodePlan {
	names: Vec<String>,
	entries: Vec<DecodePlanEntry>,
}

impl DecodePlan {
	#[instrument(name = "decode::plan::build", level = "trace", skip_all, fields(columns = output.len()))]
	pub fn build(
		output: &Schema,
		profile: &Profile,
		relations: &[Arc<dyn DecoderRelation>],
		aliases: &AliasMap,
	) -> Result<Self> {
		let resolver = ColumnResolver::new(relations, aliases);
		let mut entries = Vec::with_capacity(output.len());

		for column in output.iter() {
			let entry = match resolver.resolve(&column.column) {
				Some(resolved) if profile.can_decode(resolved.canonical) => match resolved.dimension() {
					Some(dimension) if is_decodable(&dimension) => DecodePlanEntry::Decode(DecodeColumn {
						table_name: resolved.relation.table_name().to_string(),
						column_identifier: dimension.column_identifier.clone(),
						output_type: translate_dimension(&dimension)?,
						conversion: MemberConversion::for_dimension(&dimension)?,
						dimension,
					}),
					_ => DecodePlanEntry::Skip,
				},
				_ => DecodePlanEntry::Skip,
			};
			trace!(column = %column.column, decode = entry.is_decode(), "planned column");
			entries.push(entry);
		}

		Ok(Self {
			names: output.iter().map(|c| c.name().to_string()).collect(),
			entries,
		})
	}

	pub fn entries(&self) -> &[DecodePlanEntry] {
		&self.entries
	}

	pub fn entry(&self, index: usize) -> Option<&DecodePlanEntry> {
		self.entries.get(index)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Indexes and details of every column marked for decoding.
	pub fn decode_columns(&self) -> impl Iterator<Item = (usize, &DecodeColumn)> {
		self.entries.iter().enumerate().filter_map(|(index, entry)| entry.as_decode().map(|c| (index, c)))
	}

	pub fn is_required_to_decode(&self) -> bool {
		self.entries.iter().any(DecodePlanEntry::is_decode)
	}

	/// Same columns as `input`; decoded columns report their translated type.
	pub fn output_schema(&self, input: &Schema) -> Schema {
		debug_assert_eq!(input.len(), self.entries.len());
		let columns = input
			.iter()
			.zip(&self.entries)
			.map(|(column, entry)| match entry {
				DecodePlanEntry::Decode(decode) => ColumnDef::new(column.column.clone(), decode.output_type.clone()),
				DecodePlanEntry::Skip => column.clone(),
			})
			.collect();
		Schema::new(columns)
	}
}

/// Dictionary encoded through a stored dictionary, and not nested.
fn is_decodable(dimension: &DimensionDescriptor) -> bool {
	dimension.is_dictionary_encoded() && !dimension.is_direct_dictionary() && !dimension.is_complex()
}

impl Display for DecodePlan {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(f, "DictionaryDecode")?;
		for (name, entry) in self.names.iter().zip(&self.entries) {
			match entry {
				DecodePlanEntry::Decode(column) => writeln!(
					f,
					"  {}: decode({}.{}) -> {}",
					name, column.table_name, column.column_identifier, column.output_type
				)?,
				DecodePlanEntry::Skip => writeln!(f, "  {}: skip", name)?,
			}
		}
		Ok(())
	}
}
