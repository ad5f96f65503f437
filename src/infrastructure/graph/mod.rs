//! Remote trust framework platform integration.

pub mod auth;
pub mod client;
pub mod models;
pub mod provider;

pub use client::{GraphApiClient, KeyGeneration, SecretUpload, TrustFrameworkApi, DEFAULT_GRAPH_BASE};
pub use provider::{ClientProvider, LazyClientProvider};
