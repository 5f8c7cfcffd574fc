use anyhow::Context;
use caaj2cryptact::{config::Config, Converter};

fn run() -> anyhow::Result<()> {
    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_input_path(path);
    }

    let converter = Converter::new(config);
    let records = converter.run().with_context(|| {
        format!(
            "converting {} into {}",
            converter.config().input_path.display(),
            converter.config().output_path.display()
        )
    })?;

    tracing::info!(records = records.len(), "conversion finished");
    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
