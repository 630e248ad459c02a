pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::StdoutSink, CliConfig};

pub use crate::core::{engine::ReportEngine, pipeline::SequencePipeline};
pub use utils::error::{ReportError, Result};
