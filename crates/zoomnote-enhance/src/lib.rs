//! zoomnote-enhance: Optional remote language-model enhancement
//!
//! Title, logline-and-beats, tag and keyword suggestions can be produced by a
//! remote chat-completions model. The remote path is strictly optional: with
//! no credential, on any failure, or past the time bound, the caller gets the
//! local heuristic result from `zoomnote-engine` instead. A failure is never
//! surfaced as an error; it is attached to the result as a diagnostic.
//!
//! ## Example Usage
//!
//! ```rust
//! use zoomnote_enhance::{Enhancer, Source};
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! let enhancer = Enhancer::offline();
//! let title = runtime.block_on(enhancer.suggest_title("She finally decides to leave the city."));
//! assert_eq!(title.source, Source::Local);
//! assert_eq!(title.value.title, "She finally decides to leave the city.");
//! ```

pub mod client;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod feature;

pub use client::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use config::{ConfigError, Credential, EnhanceConfig, REQUEST_TIMEOUT};
pub use enhancer::{Enhanced, Enhancer, Source};
pub use error::EnhanceError;
pub use feature::{Feature, KeywordsFeature, SummaryFeature, TagsFeature, TitleFeature};
pub use tokio_util::sync::CancellationToken;
