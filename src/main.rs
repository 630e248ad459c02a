use clap::Parser;
use natural_report::utils::{logger, validation::Validate};
use natural_report::{CliConfig, ReportEngine, SequencePipeline, StdoutSink};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting natural-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let sink = StdoutSink::new();
    let pipeline = SequencePipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    if let Err(e) = engine.run() {
        tracing::error!("Report generation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Report completed");
    Ok(())
}
