//! mdpdf CLI - Markdown to PDF conversion tool

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

const DEFAULT_INPUT: &str = "README.md";
const DEFAULT_OUTPUT: &str = "output/pdf/Project_Workflow_Documentation.pdf";

#[derive(Parser)]
#[command(name = "mdpdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert a Markdown file to a paginated PDF", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PDF file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = cmd_convert(&cli.input, &cli.output) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("converting {} -> {}", input.display(), output.display());

    let report = mdpdf::convert_file(input, output)?;

    println!(
        "{} {} ({} bytes)",
        "Wrote".green(),
        report.output.display(),
        report.bytes
    );

    Ok(())
}
