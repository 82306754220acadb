// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test support for the dictionary decode operator.

pub mod dictionary;
pub mod fixture;
pub mod logging;
pub mod relation;

pub use dictionary::{MemoryDictionary, MemoryDictionaryCache};
pub use logging::init_tracing;
pub use relation::MemoryRelation;
