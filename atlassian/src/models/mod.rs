mod issue;
mod page;
mod project;
mod space;

pub use issue::*;
pub use page::*;
pub use project::*;
pub use space::*;
