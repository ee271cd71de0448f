//! Domain models.

mod label;
mod label_action;
mod label_operation;
mod label_set;
mod repository_path;
mod sync_mode;
mod verbosity;

pub use label::Label;
pub use label_action::LabelAction;
pub use label_operation::{LabelOperation, OperationKind};
pub use label_set::LabelSet;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use sync_mode::{SyncMode, SyncModeError};
pub use verbosity::Verbosity;
