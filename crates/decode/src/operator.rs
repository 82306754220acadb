// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_core::{
	AliasMap, CacheProvider, ColumnRef, DecoderRelation, DictionaryCache, Row, Schema, TableIdentity, TaskContext,
};
use tracing::{debug, instrument};

use crate::{
	compile::{CodegenContext, CompiledExpr, GeneratedRoutine, emit},
	config::{DecodeConfig, DecodeStrategy},
	dictionary::{
		AcquiredDictionaries, DictionaryLease, ReacquirableDictionary, acquire_dictionaries, register_release,
	},
	error::Result,
	plan::DecodePlan,
	profile::Profile,
	row::{RowDecoder, TaskDecoder},
};

/// Per task row transformation.
pub trait RowProcessor {
	fn process(&mut self, row: Row) -> Result<Row>;
}

/// Code generation hook: emits one expression per output column.
pub trait InlineCodegen {
	fn emit_inline(&self, context: &mut CodegenContext) -> Result<Vec<CompiledExpr>>;
}

/// Single input, single output pipeline stage. Output has the same number of
/// rows and columns as the input.
pub trait RowTransform {
	fn output_schema(&self) -> &Schema;

	fn open<'a>(&'a self, task: &dyn TaskContext) -> Result<Box<dyn RowProcessor + 'a>>;

	/// `Some` when the stage prefers to be merged into the generated routine.
	fn inline_codegen(&self) -> Option<&dyn InlineCodegen> {
		None
	}
}

struct Forward;

impl RowProcessor for Forward {
	fn process(&mut self, row: Row) -> Result<Row> {
		Ok(row)
	}
}

/// Decodes dictionary encoded columns of its input back into values.
pub struct DictionaryDecodeOperator {
	config: DecodeConfig,
	input_schema: Schema,
	output_schema: Schema,
	plan: DecodePlan,
	tables: Vec<TableIdentity>,
}

impl DictionaryDecodeOperator {
	pub fn builder(input: Schema) -> DecodeOperatorBuilder {
		DecodeOperatorBuilder::new(input)
	}

	pub fn config(&self) -> &DecodeConfig {
		&self.config
	}

	pub fn input_schema(&self) -> &Schema {
		&self.input_schema
	}

	pub fn plan(&self) -> &DecodePlan {
		&self.plan
	}

	pub fn is_required_to_decode(&self) -> bool {
		self.plan.is_required_to_decode()
	}

	/// Dictionaries for one task from `cache`. Columns whose fetch fails stay
	/// empty and pass through undecoded.
	pub fn acquire(&self, cache: &dyn DictionaryCache) -> AcquiredDictionaries {
		acquire_dictionaries(&self.plan, &self.tables, cache)
	}

	/// Interpreted strategy: decodes `input` lazily. The task's dictionaries
	/// are released when the task completes.
	#[instrument(name = "decode::operator::execute", level = "trace", skip_all, fields(partition = task.partition()))]
	pub fn execute<I>(&self, task: &dyn TaskContext, input: I) -> Result<DecodedRows<'_, I>>
	where
		I: Iterator<Item = Result<Row>>,
	{
		if !self.plan.is_required_to_decode() {
			return Ok(DecodedRows::Passthrough(input));
		}
		let decoder = self.open_decoder(task)?;
		Ok(DecodedRows::Decoding(RowDecoder::new(input, decoder)))
	}

	/// Compiled strategy: emits against plain column reads and finishes the
	/// routine.
	#[instrument(name = "decode::operator::compile", level = "trace", skip_all)]
	pub fn compile(&self) -> Result<GeneratedRoutine> {
		let mut context = CodegenContext::for_schema(&self.input_schema);
		let outputs = self.emit_inline(&mut context)?;
		Ok(context.finish(outputs))
	}

	fn open_decoder(&self, task: &dyn TaskContext) -> Result<TaskDecoder<'_>> {
		let cache = CacheProvider::get(&self.config.store_location)?;
		let acquired = self.acquire(cache.as_ref());
		debug!(
			partition = task.partition(),
			planned = self.plan.decode_columns().count(),
			acquired = acquired.live_count(),
			"acquired task dictionaries"
		);
		register_release(task, DictionaryLease::new(acquired.dictionaries()));
		Ok(TaskDecoder::new(&self.plan, acquired))
	}
}

impl RowTransform for DictionaryDecodeOperator {
	fn output_schema(&self) -> &Schema {
		&self.output_schema
	}

	fn open<'a>(&'a self, task: &dyn TaskContext) -> Result<Box<dyn RowProcessor + 'a>> {
		if !self.plan.is_required_to_decode() {
			return Ok(Box::new(Forward));
		}
		Ok(Box::new(self.open_decoder(task)?))
	}

	fn inline_codegen(&self) -> Option<&dyn InlineCodegen> {
		match self.config.strategy {
			DecodeStrategy::Compiled if self.plan.is_required_to_decode() => Some(self as &dyn InlineCodegen),
			_ => None,
		}
	}
}

impl InlineCodegen for DictionaryDecodeOperator {
	#[instrument(name = "decode::operator::emit_inline", level = "trace", skip_all)]
	fn emit_inline(&self, context: &mut CodegenContext) -> Result<Vec<CompiledExpr>> {
		let inputs = (0..self.plan.len()).map(|index| context.input(index)).collect::<Result<Vec<_>>>()?;
		if !self.plan.is_required_to_decode() {
			return Ok(inputs);
		}

		let cache = CacheProvider::get(&self.config.store_location)?;
		let mut acquired = self.acquire(cache.as_ref());

		let outputs = inputs
			.into_iter()
			.enumerate()
			.map(|(index, upstream)| {
				let column = self.plan.entry(index).and_then(|entry| entry.as_decode());
				match (column, acquired.take(index)) {
					(Some(column), Some(live)) => {
						let handle = ReacquirableDictionary::bound(
							self.config.store_location.clone(),
							live.identifier,
							live.dictionary,
						);
						let slot = context.add_reference(handle);
						emit::decode_column(column, upstream, slot)
					}
					_ => upstream,
				}
			})
			.collect();

		Ok(outputs)
	}
}

/// Rows leaving the operator.
pub enum DecodedRows<'a, I> {
	/// Nothing to decode, the input is forwarded as is.
	Passthrough(I),
	Decoding(RowDecoder<'a, I>),
}

impl<I> Iterator for DecodedRows<'_, I>
where
	I: Iterator<Item = Result<Row>>,
{
	type Item = Result<Row>;

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			DecodedRows::Passthrough(input) => input.next(),
			DecodedRows::Decoding(decoder) => decoder.next(),
		}
	}
}

pub struct DecodeOperatorBuilder {
	input: Schema,
	config: DecodeConfig,
	profile: Profile,
	relations: Vec<Arc<dyn DecoderRelation>>,
	aliases: AliasMap,
	tables: Vec<TableIdentity>,
}

impl DecodeOperatorBuilder {
	pub fn new(input: Schema) -> Self {
		Self {
			input,
			config: DecodeConfig::default(),
			profile: Profile::default(),
			relations: Vec::new(),
			aliases: AliasMap::new(),
			tables: Vec::new(),
		}
	}

	pub fn config(mut self, config: DecodeConfig) -> Self {
		self.config = config;
		self
	}

	pub fn profile(mut self, profile: Profile) -> Self {
		self.profile = profile;
		self
	}

	pub fn relation(mut self, relation: Arc<dyn DecoderRelation>) -> Self {
		self.relations.push(relation);
		self
	}

	pub fn alias(mut self, alias: &ColumnRef, canonical: ColumnRef) -> Self {
		self.aliases.insert(alias, canonical);
		self
	}

	pub fn aliases(mut self, aliases: AliasMap) -> Self {
		self.aliases = aliases;
		self
	}

	/// Owning table of the scanned relations.
	pub fn table(mut self, table: TableIdentity) -> Self {
		self.tables.push(table);
		self
	}

	/// Builds the decode plan. Fails when a decoded column has no output type.
	#[instrument(name = "decode::operator::build", level = "trace", skip_all)]
	pub fn build(self) -> Result<DictionaryDecodeOperator> {
		let plan = DecodePlan::build(&self.input, &self.profile, &self.relations, &self.aliases)?;
		let output_schema = plan.output_schema(&self.input);
		debug!(
			columns = plan.len(),
			decoded = plan.decode_columns().count(),
			strategy = ?self.config.strategy,
			"dictionary decode planned"
		);

		Ok(DictionaryDecodeOperator {
			config: self.config,
			input_schema: self.input,
			output_schema,
			plan,
			tables: self.tables,
		})
	}
}
