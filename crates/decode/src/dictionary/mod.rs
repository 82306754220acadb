// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Task scoped dictionary handles: acquisition, reacquisition and release.

mod acquire;
mod handle;
mod lifecycle;

pub use acquire::{AcquiredDictionaries, AcquiredDictionary, acquire_dictionaries};
pub use handle::ReacquirableDictionary;
pub use lifecycle::{DictionaryLease, register_release};
