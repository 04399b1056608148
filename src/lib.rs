pub mod analysis;
pub mod config;
pub mod journal;
pub mod models;
pub mod report;
pub mod stats;
#[cfg(test)]
pub mod test_helpers;
