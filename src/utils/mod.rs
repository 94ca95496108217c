pub mod commit;
pub mod email_report;
pub mod exclusion;
pub mod repo;
pub mod reqwest_client;
pub mod summary;
