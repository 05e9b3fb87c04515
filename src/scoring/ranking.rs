// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! Higher score first. Equal scores keep their index order, because index
//! order is authoring order and readers expect "Getting Started" before
//! "Advanced Topics" when both match equally well. The comparator spells
//! the tiebreak out rather than leaning on sort stability.

use crate::types::ScoredDocument;
use std::cmp::Ordering;

/// Compare two scored documents for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - ascending index position, so ties keep authoring order
pub fn compare_scored(a: &ScoredDocument<'_>, b: &ScoredDocument<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Drop non-matches, sort, and keep the top `limit`.
pub fn rank(mut scored: Vec<ScoredDocument<'_>>, limit: usize) -> Vec<ScoredDocument<'_>> {
    scored.retain(|s| s.score > 0);
    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored
}
