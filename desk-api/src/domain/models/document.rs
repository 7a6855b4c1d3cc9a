use serde::Serialize;

/// A normalized wiki-style content page from the documentation source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub space: SpaceRef,
    pub status: String,
    /// Monotonically increasing per document, starts at 1.
    pub version: u32,
    /// Markup body as the source stores it.
    pub body: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRef {
    pub key: String,
    pub name: String,
}
