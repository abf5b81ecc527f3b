//! Wavscribe - offline WAV transcription
//!
//! Feeds a WAV file through a Vosk model and prints a single JSON object to
//! stdout: `{"transcript": ...}` on success, `{"error": ..., "hint"?: ...}`
//! on any failure. Exit code 0 on success, 2 on failure. Diagnostics go to
//! stderr so stdout stays machine-parseable.

mod config;
mod output;

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;

use crate::config::Config;
use crate::output::{emit, Failure, TranscriptReport, FAILURE_EXIT_CODE};
use wavscribe_stt::{Recognizer, Transcript, WavSource};

/// Transcribe a WAV file with a Vosk model
#[derive(Parser)]
#[command(name = "wavscribe", version)]
struct Cli {
    /// Path to the WAV file to transcribe
    wav: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_args();
    let config = match Config::resolve(cli.wav) {
        Ok(config) => config,
        Err(failure) => fail(failure),
    };

    match run(&config) {
        Ok(transcript) => {
            emit(&TranscriptReport::new(&transcript));
            process::exit(0);
        }
        Err(failure) => fail(failure),
    }
}

/// Parse the command line, mapping parse failures onto the JSON contract
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            process::exit(0);
        }
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            fail(Failure::new("missing wav path"))
        }
        Err(err) => {
            let rendered = err.render().to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or("invalid arguments")
                .trim_start_matches("error: ")
                .to_string();
            fail(Failure::new(message))
        }
    }
}

fn run(config: &Config) -> Result<Transcript, Failure> {
    info!("Transcribing {}", config.wav_path.display());
    info!("Model: {}", config.model_path.display());

    let mut source = WavSource::open(&config.wav_path)?;
    source.warn_on_unexpected_format();

    let mut recognizer = Recognizer::new(&config.model_path, source.sample_rate() as f32)?;
    let transcript = recognizer.transcribe(&mut source)?;

    info!("Collected {} utterance(s)", transcript.len());
    Ok(transcript)
}

/// Print one JSON error object and terminate with the failure exit code
fn fail(failure: Failure) -> ! {
    emit(&failure);
    process::exit(FAILURE_EXIT_CODE);
}
