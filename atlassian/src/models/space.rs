use serde::{Deserialize, Serialize};

/// Space reference as returned by the documentation source, also used as
/// the liveness-probe payload.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpace {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
