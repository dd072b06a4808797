// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization for accent-insensitive Turkish search, and the clock
//! the recency boost reads.

pub mod normalize;
pub mod time;
