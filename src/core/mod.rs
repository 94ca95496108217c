pub mod commits;
pub mod repos;
pub mod scan;
