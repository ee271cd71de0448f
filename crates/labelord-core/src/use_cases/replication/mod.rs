pub mod replicate_label_event;
pub mod suppression_store;
