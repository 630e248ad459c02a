use crate::domain::model::{ReportDocument, Sequence};
use crate::utils::error::Result;

pub trait ReportSink: Send + Sync {
    fn write_report(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn count(&self) -> i64;
}

pub trait ReportPipeline: Send + Sync {
    fn generate(&self) -> Result<Sequence>;
    fn format(&self, sequence: &Sequence) -> Result<ReportDocument>;
    fn emit(&self, document: ReportDocument) -> Result<()>;
}
