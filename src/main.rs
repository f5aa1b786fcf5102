use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use proxy_report::{Config, ReportGenerator, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

/// A markdown report generator for harvested proxy lists
#[derive(Parser)]
#[command(name = "proxy-report")]
#[command(about = "Generates a markdown summary of working proxies")]
struct Cli {
    /// Input file containing working proxies, one per line
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output file for the rendered report
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new()
        .with_input_path(cli.input)
        .with_output_path(&cli.output);

    let report = ReportGenerator::with_config(config).run(Utc::now())?;

    if report.count() == 0 {
        println!("No working proxies were found. Generated an empty report.");
    } else {
        println!(
            "Successfully generated {:?} with {} proxies.",
            cli.output,
            report.count()
        );
    }

    Ok(())
}
