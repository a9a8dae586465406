#[cfg(feature = "cli")]
pub mod cli;
pub mod form_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ResolvedForm};
pub use form_file::FormFile;
