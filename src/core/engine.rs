use crate::core::ReportPipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: ReportPipeline> {
    pipeline: P,
}

impl<P: ReportPipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the linear generate -> format -> emit flow once.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Starting report generation");

        let sequence = self.pipeline.generate()?;
        tracing::info!("Generated {} values", sequence.len());

        let document = self.pipeline.format(&sequence)?;
        tracing::info!("Formatted {} enumerated lines", document.enumerated_lines.len());

        self.pipeline.emit(document)?;
        tracing::info!("Report written");

        Ok(())
    }
}
