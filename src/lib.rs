pub mod config;
pub mod data_processing;
pub mod error;
pub mod numerical;
pub mod processing;
pub mod summary;
pub mod systems;
