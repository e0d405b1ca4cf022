pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::{GitHubClient, DEFAULT_BASE_URL};
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export explorer-core types for convenience
pub use explorer_core::{ExplorerError, GitHubApi};
