use serde::{Deserialize, Serialize};

/// Issue label: a name and a 6-hex-digit color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    name: String,
    color: String,
}

impl Label {
    /// Creates a new label.
    pub fn new<N: Into<String>, C: Into<String>>(name: N, color: C) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Name, with its original case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color, without `#`.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Matching key: the lowercase name.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Compare colors, ignoring hex digit case.
    pub fn has_same_color(&self, other: &Label) -> bool {
        self.color.eq_ignore_ascii_case(&other.color)
    }
}

impl<N: Into<String>, C: Into<String>> From<(N, C)> for Label {
    fn from((name, color): (N, C)) -> Self {
        Self::new(name, color)
    }
}
