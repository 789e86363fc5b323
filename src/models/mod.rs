pub mod account;
pub mod common;
pub mod job;

pub use account::*;
pub use common::*;
pub use job::*;
