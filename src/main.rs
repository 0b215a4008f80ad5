use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use lexicross::candidate::{self, WordCandidate};
use lexicross::errors::InputError;
use lexicross::layout;

/// Lexicross crossword layout generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the candidates file (JSON array of {"clue", "answer"} objects)
    candidates: String,

    /// Fail on answers that violate the upstream contract instead of
    /// skipping them with a warning
    #[arg(long)]
    strict: bool,

    /// Pretty-print the layout JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("LEXICROSS_DEBUG").is_ok();
    lexicross::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Lexicross CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the candidate list from disk, checking the upstream answer contract.
/// 3. Generate the layout.
/// 4. Print the layout JSON on stdout.
/// 5. Print diagnostics (placed/dropped counts, timings) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let candidates = load_candidates(&cli.candidates, cli.strict)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_generate = Instant::now();
    let layout = layout::generate_layout(&candidates);
    let generate_secs = t_generate.elapsed().as_secs_f64();

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!("{}", serde_json::to_string(&layout)?);
    }

    eprintln!(
        "Loaded {} candidates in {:.3}s; placed {} on a {}x{} grid in {:.3}s ({} dropped).",
        candidates.len(),
        load_secs,
        layout.result.len(),
        layout.rows,
        layout.cols,
        generate_secs,
        candidates.len() - layout.result.len(),
    );

    Ok(())
}

/// Read and parse the candidates file.
///
/// In strict mode the first out-of-contract answer is an error; otherwise
/// offenders are logged and passed through (the engine drops what it cannot
/// place, so generation still proceeds best-effort).
fn load_candidates(path: &str, strict: bool) -> Result<Vec<WordCandidate>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_string(),
        source,
    })?;
    let candidates: Vec<WordCandidate> = serde_json::from_str(&contents)?;

    for (index, cand) in candidates.iter().enumerate() {
        if candidate::is_playable_answer(&cand.answer) {
            continue;
        }
        if strict {
            return Err(InputError::ContractViolation {
                index,
                answer: cand.answer.clone(),
            });
        }
        log::warn!(
            "candidate {index} ({:?}) violates the upstream answer contract",
            cand.answer
        );
    }

    Ok(candidates)
}
