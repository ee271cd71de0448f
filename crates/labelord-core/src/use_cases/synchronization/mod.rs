pub mod run_synchronization;
