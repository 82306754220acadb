// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Contracts the decode operator consumes from the surrounding engine: table
//! metadata, relations, the dictionary cache and the task runtime.

pub mod catalog;
pub mod dictionary;
pub mod relation;
pub mod task;
