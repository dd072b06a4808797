// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. Parse the query, rank the corpus, cut
//! highlighted snippets, and tell the UI whether to show results or a hint.

pub mod pipeline;
pub mod snippet;
pub mod utils;

pub use pipeline::search_documents;
pub use snippet::{highlight, make_snippet, snippet};
pub use utils::parse_query;
