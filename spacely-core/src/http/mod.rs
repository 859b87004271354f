//! Outgoing HTTP plumbing.
//!
//! All outbound requests go through the [`HttpClient`] trait so request
//! handling stays mockable in tests. There is deliberately no response
//! caching here: the catalog is reloaded on every chat request so that the
//! selection always reflects the published data.

mod client;

pub use client::{FetchClient, FetchClientBuilder, HttpClient, MockClient, MockResponse};
