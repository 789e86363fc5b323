pub mod accounts;
pub mod job_postings;

pub use accounts as account_entity;
pub use job_postings as job_posting_entity;
pub use job_postings::ExperienceLevel;
