//! GitHub types.

mod label;
mod label_event;
mod page;
mod ping_event;
mod repository;

pub use label::GhLabel;
pub use label_event::{GhLabelAction, GhLabelChanges, GhLabelEvent, GhPreviousValue};
pub use page::{GhPage, GhPageCursor};
pub use ping_event::GhPingEvent;
pub use repository::GhRepository;
