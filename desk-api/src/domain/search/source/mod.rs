mod atlassian_source;
mod fixture;

pub use atlassian_source::AtlassianSource;
pub use fixture::FixtureSource;
