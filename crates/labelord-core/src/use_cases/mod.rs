pub mod labels;
pub mod replication;
pub mod repositories;
pub mod synchronization;
