#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Corpus loading and training harness for layered-sentiment.
//!
//! A corpus is a pair of directories, one of positive and one of negative
//! examples, with one document per file. Only the first line of each file is
//! used.
//!
//! ## Modules
//!
//! - [`loader`] - Recursive, ordered document discovery
//! - [`config`] - TOML training configuration
//! - [`train`](mod@train) - Directory training and optional persistence
//! - [`errors`] - Error types for the harness

pub mod config;
pub mod errors;
pub mod loader;
pub mod train;

pub use config::{CorpusConfig, ModelConfig, SentimentConfig};
pub use errors::{CorpusError, CorpusResult};
pub use loader::{load_documents, Document};
pub use train::{ingest_dir, train, train_registry, train_with_config};
