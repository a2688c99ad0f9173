pub mod config;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod scanner;
pub mod strategy;
pub mod validate;
pub mod wordlist;

// re-export the pieces integration tests drive directly
pub use crate::scanner::Scanner;
pub use crate::validate::is_valid_label;
