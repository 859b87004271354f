pub mod allocator;
pub mod catalog;
pub mod compose;
pub mod currency;
pub mod error;
pub mod http;
pub mod llm;
pub mod prompt;
pub mod types;

pub use catalog::{load_catalog, parse_catalog, unique_categories, DEFAULT_CATALOG_URL};
pub use currency::{format_rupiah, USD_TO_IDR};
pub use error::FetchError;
pub use http::{FetchClient, FetchClientBuilder, HttpClient, MockClient, MockResponse};
pub use types::{ChatMessage, DesiredCategory, FurnitureItem, Role, SelectionResult};
