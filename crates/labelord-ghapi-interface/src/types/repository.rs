use serde::Deserialize;

/// GitHub repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GhRepository {
    /// Full name, `owner/name`.
    pub full_name: String,
}

impl GhRepository {
    /// Creates a repository from its full name.
    pub fn new<T: Into<String>>(full_name: T) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}
