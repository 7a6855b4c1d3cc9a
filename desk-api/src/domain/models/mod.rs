mod conversation;
mod document;
mod issue;
mod search_results;

pub use conversation::*;
pub use document::*;
pub use issue::*;
pub use search_results::*;
