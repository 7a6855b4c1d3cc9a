pub(crate) mod connection;
pub(crate) mod conversations;
pub(crate) mod documents;
pub(crate) mod error;
pub(crate) mod issues;
pub(crate) mod search;

pub(crate) use error::ApiError;
