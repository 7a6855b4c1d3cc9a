use serde::{Deserialize, Serialize};

/// Project reference as returned by the tracker, also used as the
/// liveness-probe payload.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
