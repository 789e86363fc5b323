pub mod auth_service;
pub mod job_service;

pub use auth_service::*;
pub use job_service::*;
