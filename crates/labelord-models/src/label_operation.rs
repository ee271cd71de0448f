use crate::Label;

/// Operation kind, with its log tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Update,
    Delete,
}

impl OperationKind {
    /// Three-letter tag used in operation logs.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Update => "UPD",
            Self::Delete => "DEL",
        }
    }
}

/// Single write needed to converge a repository label set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOperation {
    /// Create a new label.
    Add(Label),
    /// Rename and/or recolor an existing label, identified by its current name.
    Update { old_name: String, label: Label },
    /// Delete an existing label.
    Delete(Label),
}

impl LabelOperation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Add(_) => OperationKind::Add,
            Self::Update { .. } => OperationKind::Update,
            Self::Delete(_) => OperationKind::Delete,
        }
    }

    /// Label shown in logs: the new label, or the deleted one.
    pub fn label(&self) -> &Label {
        match self {
            Self::Add(label) | Self::Delete(label) | Self::Update { label, .. } => label,
        }
    }
}
