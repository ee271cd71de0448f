use serde::{Deserialize, Serialize};

/// GitHub label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhLabel {
    /// Name.
    pub name: String,
    /// Color, 6 hex digits without `#`.
    pub color: String,
}

impl GhLabel {
    /// Creates a new label.
    pub fn new<N: Into<String>, C: Into<String>>(name: N, color: C) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}
