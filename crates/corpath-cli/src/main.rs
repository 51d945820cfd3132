mod display;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use corpath_classify::suggest_elements;
use corpath_extract::analyze_document;

#[derive(Parser)]
#[command(name = "corpath", version, about = "Safety-form analysis and COR element classification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a document and suggest matching COR elements
    Analyze {
        /// Input file; PDFs are text-extracted, anything else is read as plain text
        path: PathBuf,
        /// Emit the full report as JSON instead of the card view
        #[arg(long)]
        json: bool,
        /// Maximum number of element suggestions to show
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// List the COR audit elements and their reference questions
    Elements,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("corpath v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { path, json, top } => analyze(&path, json, top),
        Command::Elements => {
            display::print_elements();
            Ok(())
        }
    }
}

struct Input {
    text: String,
    page_count: usize,
    warnings: Vec<String>,
}

fn load_input(path: &Path) -> anyhow::Result<Input> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let extracted = corpath_pdf::extract_text(&bytes)
            .with_context(|| format!("failed to extract text from {}", path.display()))?;
        Ok(Input {
            text: extracted.text,
            page_count: extracted.page_count,
            warnings: extracted.warnings,
        })
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Input {
            text,
            page_count: 1,
            warnings: Vec::new(),
        })
    }
}

fn analyze(path: &Path, json: bool, top: usize) -> anyhow::Result<()> {
    let input = load_input(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");

    let mut result = analyze_document(&input.text, input.page_count, file_name);
    for warning in input.warnings {
        result
            .analysis
            .processing_notes
            .push(format!("PDF extraction warning: {warning}"));
    }

    let mut suggestions = suggest_elements(&result.analysis, &result.fields, &input.text);
    suggestions.truncate(top);

    if json {
        let report = report::AnalysisReport::new(file_name, &result, &suggestions);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_analysis_card(&result, &suggestions);
    }
    Ok(())
}
