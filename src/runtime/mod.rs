// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings for the browser.
//!
//! The search page loads the WASM module, hands it the corpus JSON once, and
//! calls `search` on every debounced keystroke.

pub mod wasm;
