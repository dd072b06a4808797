//! Client-side full-text search for a Turkish blog.
//!
//! The whole corpus is loaded up front and every keystroke ranks all of it.
//! There is no inverted index to build and no server to ask. A few hundred
//! posts score in well under a millisecond, so brute force wins on simplicity.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ util/        │────▶│ analysis/    │────▶│ index/       │
//! │ (normalize,  │     │ (tokenize,   │     │ (SearchIndex,│
//! │  time)       │     │  stem)       │     │  TermFreqs)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ search/      │◀────│ scoring/     │◀────│ types.rs     │
//! │ (pipeline,   │     │ (score,      │     │ (Document,   │
//! │  snippet)    │     │  rank)       │     │  Query)      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲
//!        │ documents
//! ┌──────────────┐
//! │ build/       │  corpus JSON in, post HTML → corpus JSON out
//! └──────────────┘
//! ```
//!
//! # Scoring
//!
//! | Signal         | Contribution                                  |
//! |----------------|-----------------------------------------------|
//! | Title stems    | 5 per occurrence of each query stem           |
//! | Body stems     | 1 per occurrence of each query stem           |
//! | Title prefix   | 1000 when the title starts with the query     |
//! | Title contains | 500 when the title contains it elsewhere      |
//! | Recency        | `max(0, 10 - ln(1 + age_days))`               |
//!
//! A document scoring zero is not a match.
//!
//! # Usage
//!
//! ```
//! use arama::{Document, SearchIndex};
//!
//! let mut index = SearchIndex::new(vec![
//!     Document::new("kahve", "Kahve Tarifleri", "Türk kahvesi nasıl yapılır"),
//!     Document::new("cay", "Çay", "Demleme üzerine"),
//! ]);
//!
//! let outcome = index.search("kahve");
//! assert_eq!(outcome.hits()[0].document.slug, "kahve");
//! assert!(index.search("k").is_too_short());
//! ```

pub mod analysis;
pub mod build;
pub mod config;
pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod runtime;

pub use analysis::{analyze, stem, tokenize};
pub use build::{load_corpus, load_corpus_file, load_corpus_inline, load_corpus_json, run_build, BuildReport};
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use index::{SearchIndex, TermFrequencies};
pub use scoring::ranking::rank;
pub use scoring::score;
pub use search::{highlight, make_snippet, parse_query, search_documents, snippet};
pub use types::{hints, Document, Query, ScoredMatch, SearchHit, SearchOutcome};
pub use util::normalize::{normalize, NormalizedText};
