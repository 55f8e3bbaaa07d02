//! Catastro CLI - cadastral record extraction from text or audio
//!
//! `catastro extract` runs the extraction pipeline over dictated or typed
//! Spanish text, optionally with a span list computed by the external NER
//! service; `catastro transcribe` sends audio to the transcription provider
//! and can chain the pipeline over the transcript.

use anyhow::{bail, Context, Result};
use catastro_asr::{AssemblyAi, SpeechToText};
use catastro_pipeline::{EntityRecognizer, NoRecognizer, Pipeline, StaticSpans};
use catastro_ubigeo::UbigeoCatalog;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "catastro", version, about = "Cadastral record extraction from noisy Spanish text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a canonical record from text
    Extract {
        /// Text to process, inline
        #[arg(short = 't', long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// JSON span list produced by the NER service over the sanitized text
        #[arg(long)]
        spans: Option<PathBuf>,

        /// UBIGEO catalog file (CSV or XLSX); defaults to $UBIGEO_PATH or
        /// ubigeo.xlsx / ubigeo.csv in the working directory
        #[arg(long)]
        ubigeo: Option<PathBuf>,
    },

    /// Transcribe an audio file via AssemblyAI
    Transcribe {
        /// Audio file to transcribe
        #[arg(short = 'a', long)]
        audio: PathBuf,

        /// Chain the extraction pipeline over the transcript
        #[arg(long)]
        extract: bool,

        /// UBIGEO catalog file, as for `extract`
        #[arg(long)]
        ubigeo: Option<PathBuf>,
    },
}

/// Resolve the input text of `extract` from its flags.
fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        (None, None) => bail!("provide --text or --file"),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Option<UbigeoCatalog>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let catalog = UbigeoCatalog::load_from_path(path)
        .with_context(|| format!("cannot load catalog {}", path.display()))?;
    Ok(Some(catalog))
}

fn run_pipeline<R: EntityRecognizer>(
    recognizer: R,
    catalog: Option<UbigeoCatalog>,
    text: &str,
) -> Result<catastro_core::CanonicalRecord> {
    let pipeline = match catalog {
        Some(catalog) => Pipeline::with_catalog(recognizer, catalog),
        None => Pipeline::new(recognizer),
    };
    pipeline.process_text(text).context("extraction failed")
}

fn cmd_extract(
    text: Option<String>,
    file: Option<&Path>,
    spans: Option<&Path>,
    ubigeo: Option<&Path>,
) -> Result<()> {
    let input = read_input(text, file)?;
    let catalog = load_catalog(ubigeo)?;

    let record = match spans {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let recognizer = StaticSpans::from_json(&json)
                .with_context(|| format!("bad span list in {}", path.display()))?;
            run_pipeline(recognizer, catalog, &input)?
        }
        None => {
            log::warn!("no span list supplied; running in degraded mode");
            run_pipeline(NoRecognizer, catalog, &input)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn cmd_transcribe(audio: &Path, extract: bool, ubigeo: Option<&Path>) -> Result<()> {
    let bytes =
        fs::read(audio).with_context(|| format!("cannot read audio {}", audio.display()))?;
    let provider = AssemblyAi::from_env().context("transcription provider unavailable")?;
    let transcript = provider.transcribe(&bytes).context("transcription failed")?;

    if !extract {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    let catalog = load_catalog(ubigeo)?;
    let record = run_pipeline(NoRecognizer, catalog, &transcript.text)?;

    // Record plus the ASR metadata the caller needs to judge the transcript.
    let mut output = serde_json::to_value(&record)?;
    output["asr"] = serde_json::json!({
        "confidence": transcript.confidence,
        "num_words": transcript.words.len(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Extract {
            text,
            file,
            spans,
            ubigeo,
        } => cmd_extract(text, file.as_deref(), spans.as_deref(), ubigeo.as_deref()),
        Command::Transcribe {
            audio,
            extract,
            ubigeo,
        } => cmd_transcribe(&audio, extract, ubigeo.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text_wins_over_file() {
        let input = read_input(Some("texto".into()), Some(Path::new("ignored.txt"))).unwrap();
        assert_eq!(input, "texto");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        assert!(read_input(None, None).is_err());
    }

    #[test]
    fn test_cli_parses_extract_with_spans() {
        let cli = Cli::try_parse_from([
            "catastro", "extract", "--text", "predio", "--spans", "spans.json",
        ])
        .unwrap();
        match cli.command {
            Command::Extract { text, spans, .. } => {
                assert_eq!(text.as_deref(), Some("predio"));
                assert_eq!(spans, Some(PathBuf::from("spans.json")));
            }
            Command::Transcribe { .. } => panic!("expected extract"),
        }
    }

    #[test]
    fn test_cli_rejects_text_and_file_together() {
        assert!(Cli::try_parse_from([
            "catastro", "extract", "--text", "a", "--file", "b.txt",
        ])
        .is_err());
    }
}
