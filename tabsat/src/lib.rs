mod cli;
mod error;
pub mod input;
pub mod report;

pub use cli::Cli;
pub use error::Error;
