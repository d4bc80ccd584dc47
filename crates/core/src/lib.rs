pub mod article;
pub mod classify;
pub mod entry;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod normalize;
pub mod parse;
pub mod preprocess;
pub mod resolve;
pub mod truncate;

pub use article::{ResolvedArticle, group_by_category};
pub use classify::{count_sentences, is_summary_only};
pub use entry::{Category, EntriesResponse, Feed, RawEntry};
pub use error::{FeedbriefError, Result};
pub use extract::{ExtractConfig, extract_main_text};
pub use fetch::{ContentFetcher, FetchConfig, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{HttpFetcher, fetch_full_content, fetch_url};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, convert_to_json, convert_to_text};
pub use normalize::normalize;
pub use parse::Document;
#[doc(hidden)]
pub use preprocess::PreprocessConfig;
pub use preprocess::preprocess_html;
pub use resolve::{Resolver, ResolverConfig, ResolverConfigBuilder};
pub use truncate::{ELLIPSIS, truncate};
