// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index parsing.
//!
//! The index comes off the network. Whatever the body is, parsing returns an
//! error or documents, and installing either leaves a usable index.

#![no_main]

use docsift::{parse_index, perform_search, SearchIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &[u8]| {
    let mut index = SearchIndex::new();
    let installed = index.install(parse_index(body));

    assert_eq!(installed.is_ok(), index.is_loaded());
    if let Ok(count) = installed {
        assert_eq!(count, index.len());
    }

    let _ = perform_search("setup guide", &index);
});
