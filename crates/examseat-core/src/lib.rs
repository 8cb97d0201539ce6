pub mod config;
pub mod types;

pub use config::ExamseatConfig;
pub use types::*;
