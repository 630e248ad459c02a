use crate::core::generator::{first_n, triangular_sum};
use crate::core::{ConfigProvider, ReportDocument, ReportPipeline, ReportSink, Sequence};
use crate::utils::error::Result;
use crate::utils::validation::validate_count;

pub struct SequencePipeline<S: ReportSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: ReportSink, C: ConfigProvider> SequencePipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

impl<S: ReportSink, C: ConfigProvider> ReportPipeline for SequencePipeline<S, C> {
    fn generate(&self) -> Result<Sequence> {
        let count = validate_count("count", self.config.count())?;

        tracing::debug!("Generating the first {} natural numbers", count);
        Ok(Sequence {
            values: first_n(count),
        })
    }

    fn format(&self, sequence: &Sequence) -> Result<ReportDocument> {
        let count = sequence.len() as u64;

        let rendered: Vec<String> = sequence.values.iter().map(|v| v.to_string()).collect();
        let sequence_line = format!("[{}]", rendered.join(", "));

        let enumerated_lines = sequence
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{}: {}", i + 1, value))
            .collect();

        // Closed form; equivalent to folding the sequence.
        let sum = triangular_sum(count);
        let sum_line = format!("Sum of first {} natural numbers: {}", count, sum);

        Ok(ReportDocument {
            count,
            sequence_line,
            enumerated_lines,
            sum_line,
        })
    }

    fn emit(&self, document: ReportDocument) -> Result<()> {
        let text = document.render();
        tracing::debug!("Writing report ({} bytes) to sink", text.len());
        self.sink.write_report(&text)?;
        Ok(())
    }
}
