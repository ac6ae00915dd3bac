pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod naming;

pub use config::Config;
pub use error::GenError;
pub use generator::{find_item, Generator};

/// Names derived from one framework header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub original_name: String,
    pub normalized_name: String,
    pub header_file_name: String,
    pub binding_file_name: String,
    pub header_var_name: String,
    pub binding_var_name: String,
}
