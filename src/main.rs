use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use gist::config::Config;
use gist::output::terminal;
use gist::summary::weighted::WeightedFrequencySummarizer;

/// Gist: extractive text summarization.
///
/// Scores every sentence by the weighted frequency of its words and keeps
/// the best ones, verbatim.
#[derive(Parser)]
#[command(name = "gist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the document comes from. Exactly one of the two must be given.
#[derive(Args)]
struct Source {
    /// Text to summarize
    #[arg(long)]
    text: Option<String>,

    /// File to summarize: plain text (.txt, .text, .md) or Word (.docx)
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a document and show term weights, sentence scores and the summary
    Summarize {
        #[command(flatten)]
        source: Source,

        /// Sentences in the summary (default: GIST_SENTENCES or 5)
        #[arg(short = 'k', long, value_parser = clap::value_parser!(u32).range(1..))]
        sentences: Option<u32>,

        /// Terms to list in the weight table (default: GIST_TOP_TERMS or 15)
        #[arg(long)]
        top: Option<u32>,

        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show the weighted term frequencies of a document
    Terms {
        #[command(flatten)]
        source: Source,

        /// Terms to list (default: GIST_TOP_TERMS or 15)
        #[arg(long)]
        top: Option<u32>,

        /// Print all weights as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging; quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gist=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Summarize {
            source,
            sentences,
            top,
            json,
        } => {
            let text = gist::input::resolve(source.text.as_deref(), source.file.as_deref())?;

            let sentence_count = sentences.map_or(config.summary_sentences, |k| k as usize);
            let top_terms = top.map_or(config.top_terms, |n| n as usize);

            info!(
                chars = text.len(),
                sentence_count,
                stopwords = %config.stopwords,
                "Summarizing document"
            );

            let summarizer = WeightedFrequencySummarizer::new(sentence_count, config.stopwords);
            let scored = summarizer.score(&text)?;

            let report = match scored.select(sentence_count) {
                Ok(report) => report,
                Err(e) => {
                    // Show the maps that were computed before failing
                    if json {
                        println!("{}", serde_json::to_string_pretty(&scored)?);
                    } else {
                        terminal::display_original(&scored.original_text);
                        terminal::display_term_weights(&scored.weighted_frequencies, top_terms);
                        terminal::display_sentence_scores(&scored.sentence_scores, &[]);
                    }
                    return Err(e.into());
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report, top_terms);
            }
        }

        Commands::Terms { source, top, json } => {
            let text = gist::input::resolve(source.text.as_deref(), source.file.as_deref())?;
            let top_terms = top.map_or(config.top_terms, |n| n as usize);

            let summarizer =
                WeightedFrequencySummarizer::new(config.summary_sentences, config.stopwords);
            let weights = summarizer.term_weights(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&weights)?);
            } else {
                terminal::display_term_weights(&weights, top_terms);
            }
        }
    }

    Ok(())
}
