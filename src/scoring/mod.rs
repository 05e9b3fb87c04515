// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Title beats section beats body text. The per-rule weights live in `core`,
//! the ordering contract in `ranking`.

mod core;
pub mod ranking;

pub use self::core::*;
