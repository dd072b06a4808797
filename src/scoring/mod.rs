// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The key insight is that the title boost dominates everything else. A post
//! whose title starts with the query beats a post that mentions it a hundred
//! times in the body. Frequency and recency only sort out the rest.

mod core;
pub mod ranking;

pub use core::*;
