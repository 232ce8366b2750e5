pub mod error;
pub mod task_repo;
