pub mod engine;
pub mod generator;
pub mod pipeline;

pub use crate::domain::model::{ReportDocument, Sequence};
pub use crate::domain::ports::{ConfigProvider, ReportPipeline, ReportSink};
pub use crate::utils::error::Result;
