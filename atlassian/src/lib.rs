mod atlassian_url;
mod client;
mod credentials;
pub mod fixtures;
pub mod models;
pub mod query;

pub use atlassian_url::AtlassianUrl;
pub use client::*;
pub use credentials::*;
