pub mod fetch_label_set;
pub mod reconcile_repository;
pub mod resolve_desired_labels;
