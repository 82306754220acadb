// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod dimension;
mod table;

pub use dimension::{ColumnIdentifier, DimensionDescriptor, Encodings};
pub use table::{DictionaryColumnIdentifier, StoreLocation, TableIdentity};
