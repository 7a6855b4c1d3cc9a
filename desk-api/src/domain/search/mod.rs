//! Search aggregation over the two upstream knowledge sources.

pub mod normalize;
pub mod service;
pub mod source;
pub mod traits;

pub use service::SearchService;
pub use traits::{KnowledgeSource, SearchError, SharedSource};
