//! CLI tool for asking the study assistant a question.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use study_client::{resolve_base_url, AssistClient, AssistRequest};
use study_core::{build_outline, export, SectionKind};

/// Ask the study assistant a question and print a study guide or a
/// ready-to-present outline.
#[derive(Parser, Debug)]
#[command(name = "study-assist")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The question or topic, e.g. "Explain photosynthesis"
    question: String,

    /// Class of the student (1-10)
    #[arg(short = 'c', long = "class", default_value = "6")]
    student_class: u32,

    /// Subject the question belongs to
    #[arg(short, long, default_value = "Math")]
    subject: String,

    /// Comma-separated section kinds to request (default: all)
    #[arg(long, value_delimiter = ',')]
    sections: Vec<String>,

    /// Print a presentation outline instead of the study guide
    #[arg(long)]
    outline: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Backend base URL (default: $STUDY_BACKEND_URL or http://localhost:8000)
    #[arg(long)]
    backend: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let needs = parse_sections(&args.sections)?;
    let base_url = resolve_base_url(args.backend.as_deref());

    if args.verbose {
        eprintln!("Asking: {}", base_url);
    }

    let request = AssistRequest::new(args.question.clone())
        .with_class(args.student_class)
        .with_subject(args.subject.clone())
        .with_needs(needs);

    let client = AssistClient::new(base_url);
    let answer = client
        .ask(&request)
        .with_context(|| format!("Request to {} failed", client.endpoint_url()))?;

    if args.verbose {
        eprintln!("  Received {} sections", answer.sections.len());
    }

    let output = if args.outline {
        let slides = build_outline(Some(&answer));
        log::debug!("Built {} slides", slides.len());
        export::outline_text_with_newline(&slides)
    } else {
        export::study_guide_text_with_newline(&answer)
    };

    match &args.output {
        Some(path) => {
            write_output(path, &output)?;
            if args.verbose {
                eprintln!("Written to: {}", path.display());
            }
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Parse the requested section kinds, defaulting to all of them.
fn parse_sections(sections: &[String]) -> Result<Vec<SectionKind>> {
    if sections.is_empty() {
        return Ok(SectionKind::all());
    }

    sections
        .iter()
        .map(|name| {
            SectionKind::from_wire(name.trim()).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown section kind '{}' (valid: {})",
                    name,
                    SectionKind::all()
                        .iter()
                        .map(|k| k.wire_name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
        })
        .collect()
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
