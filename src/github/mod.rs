pub mod client;
pub mod config;
pub mod gateway;
pub mod pagination;

#[cfg(test)]
pub(crate) mod testing;
