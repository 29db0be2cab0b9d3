pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod storage;
pub mod sync;
pub mod task_api;
