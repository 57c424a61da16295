use serde::{Deserialize, Serialize};

/// One generated color: hex code plus a name and a mood/use-case blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hex: String,
    pub name: String,
    pub description: String,
}
