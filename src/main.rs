use clap::{Parser, builder::styling};
use eyre::Result;
use owo_colors::OwoColorize;
use people_etl::config::{DEFAULT_LOG_FILE, DEFAULT_SOURCE_DIR, DEFAULT_TARGET_FILE};
use people_etl::{EtlJob, JobConfig, Table};
use std::path::{Path, PathBuf};

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Normalize people records from CSV, JSON and XML files into one metric CSV
#[derive(Parser)]
#[command(name = "people-etl", version, styles = STYLES)]
struct Cli {
    /// Directory scanned for *.csv, *.json and *.xml sources
    #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// CSV file to write the converted records to
    #[arg(short, long, default_value = DEFAULT_TARGET_FILE)]
    target: PathBuf,

    /// File to append progress lines to
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// The dotenv file to source settings from, skipped when absent
    #[arg(short, long, default_value = ".env")]
    env: String,

    /// Print the converted records as a table when the job ends
    #[arg(short, long)]
    preview: bool,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if Path::new(&cli.env).is_file() {
        dotenvy::from_filename(&cli.env)?;
    }

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let config = JobConfig::default()
        .with_source_dir(cli.source_dir)
        .with_target_file(cli.target)
        .with_log_file(cli.log_file);

    log::info!(
        "Converting sources in {} to {}",
        config.source_dir.display().bright_black(),
        config.target_file.display().bright_black()
    );

    let job = EtlJob::new(config);
    let records = job.run()?;

    if cli.preview {
        println!("Transformed Data");
        println!("{}", Table(&records));
    }

    log::info!(
        "Wrote {} records to {}",
        records.len().cyan(),
        job.config().target_file.display().bright_black()
    );

    Ok(())
}
