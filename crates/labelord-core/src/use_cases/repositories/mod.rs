pub mod list_repositories;
pub mod resolve_target_repositories;
