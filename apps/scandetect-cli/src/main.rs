//! Batch CLI for PDF scan detection
//!
//! Analyzes one or more PDFs and reports whether each looks like a scanned
//! document or a digital-native one, with the score and the reasons behind
//! the verdict.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use scandetect_pdf::analyze_file;
use scandetect_types::DocumentAnalysis;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "scandetect",
    about = "Classify PDFs as scanned or digital-native documents"
)]
struct Cli {
    /// PDF files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Emit one JSON object per file instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    analysis: &'a DocumentAnalysis,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scandetect_pdf=warn".parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut failures = 0usize;

    for path in &cli.files {
        if let Err(err) = report_file(path, cli.json) {
            error!("{err:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report_file(path: &Path, json: bool) -> anyhow::Result<()> {
    let analysis =
        analyze_file(path).with_context(|| format!("cannot analyze {}", path.display()))?;

    let file = path.display().to_string();
    if json {
        let report = JsonReport {
            file: &file,
            analysis: &analysis,
        };
        let rendered = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{rendered}");
    } else {
        print_report(&file, &analysis);
    }
    Ok(())
}

fn print_report(file: &str, analysis: &DocumentAnalysis) {
    let result = &analysis.classification;
    let pages = &analysis.pages;
    let fonts = &analysis.fonts;

    println!("{}", "=".repeat(60));
    println!("{file}");
    println!("{}", "=".repeat(60));

    println!("\n[Metadata]");
    println!("  Producer: {}", non_empty(&analysis.metadata.producer));
    println!("  Creator:  {}", non_empty(&analysis.metadata.creator));

    println!("\n[Pages]");
    println!("  Total pages:      {}", pages.total_pages);
    println!("  Pages with text:  {}", pages.text_pages);
    println!("  Image-only pages: {}", pages.image_only_pages);
    println!("  Embedded images:  {}", pages.total_images);
    println!("  Avg text/page:    {:.0} chars", pages.avg_text_per_page);
    if pages.skipped_pages > 0 {
        println!("  Unreadable pages: {}", pages.skipped_pages);
    }

    println!("\n[Fonts]");
    println!("  Unique fonts: {}", fonts.unique_font_count);
    for name in fonts.font_names.iter().take(10) {
        println!("    - {name}");
    }

    println!("\n[Verdict]");
    println!(
        "  {} (type: {}, score {}/100, confidence {:.2})",
        if result.is_scanned {
            "Scanned document"
        } else {
            "Digital document"
        },
        result.pdf_type,
        result.scan_score,
        result.confidence,
    );
    for reason in &result.reasons {
        println!("    - {reason}");
    }
    println!();
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
