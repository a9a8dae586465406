pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod pages;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ResolvedForm};

pub use app::CalcEngine;
pub use crate::core::{
    navigation::{BackButton, LinkDispatcher},
    page::{CalculatorController, PageContext},
    submission::SubmissionHandler,
};
pub use pages::CalculatorKind;
pub use utils::error::{CalcError, Result};
