use clap::{Parser, Subcommand};
use morse_core::config::Preferences;
use morse_core::core::detector::detect_direction_with;
use morse_core::core::segmenter::decode_continuous_with;
use morse_core::core::table;
use morse_core::playback::{clamped_frequency, schedule, total_duration, SignalKind};
use morse_core::trace_init::init_tracing;
use morse_core::{MorseEngine, Result, Translation};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

const PREFERENCES_PATH: &str = "dotdash_prefs.json";
const HISTORY_PATH: &str = "dotdash_history.bin";

#[derive(Parser)]
#[command(name = "morse_engine", about = "Translate between text and Morse code")]
struct Cli {
    /// Preferences file (JSON); defaults are used when it does not exist
    #[arg(long, global = true, default_value = PREFERENCES_PATH)]
    prefs: PathBuf,

    /// History file
    #[arg(long, global = true, default_value = HISTORY_PATH)]
    history: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Text to Morse
    Encode { text: Option<String> },
    /// Segmented Morse to text
    Decode { morse: Option<String> },
    /// Print "english" or "morse" for the input
    Detect { text: Option<String> },
    /// Decode an unseparated dot/dash run
    Segment { morse: Option<String> },
    /// Detect direction and translate
    Auto {
        text: Option<String>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Record the translation in history
        #[arg(long)]
        save: bool,
    },
    /// Print the code table
    Lessons,
    /// Print the tone/silence plan for Morse (or text, which is encoded first)
    Timing { text: Option<String> },
    /// Inspect or clear the translation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    List,
    Export,
    Clear,
}

/// Argument if given, stdin otherwise.
fn input_or_stdin(arg: Option<String>) -> io::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_translation(t: &Translation) {
    println!("{}", t.output);
    if !t.is_clean() {
        tracing::warn!("unknown input: {}", t.invalid.join(" "));
    }
}

fn run(cli: Cli) -> Result<()> {
    let prefs = Preferences::load(&cli.prefs)?;
    let mut engine = MorseEngine::from_file_or_new(&cli.history, &prefs);

    match cli.command {
        Command::Encode { text } => print_translation(&engine.encode(&input_or_stdin(text)?)),
        Command::Decode { morse } => print_translation(&engine.decode(&input_or_stdin(morse)?)),
        Command::Detect { text } => {
            let text = input_or_stdin(text)?;
            println!("{}", detect_direction_with(&text, prefs.translator.ratio_threshold));
        }
        Command::Segment { morse } => {
            let morse = input_or_stdin(morse)?;
            println!("{}", decode_continuous_with(&morse, prefs.translator.placeholder));
        }
        Command::Auto { text, json, save } => {
            let text = input_or_stdin(text)?;
            let result = engine.translate(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.output());
            }
            if !result.invalid.is_empty() {
                tracing::warn!("unknown input: {}", result.invalid.join(" "));
            }
            if save && engine.commit(text.trim(), &result).is_some() {
                engine.save_history()?;
            }
        }
        Command::Lessons => {
            for (symbol, pattern) in table::entries() {
                println!("{symbol}\t{pattern}");
            }
        }
        Command::Timing { text } => {
            let text = input_or_stdin(text)?;
            let result = engine.translate(&text);
            let signals = schedule(&result.morse, &prefs.playback);
            println!(
                "# {} wpm, {} Hz, {:?}",
                prefs.playback.wpm,
                clamped_frequency(&prefs.playback),
                prefs.playback.tone
            );
            for signal in &signals {
                let label = match signal.kind {
                    SignalKind::Dot => "dot",
                    SignalKind::Dash => "dash",
                    SignalKind::Silence => "gap",
                };
                println!("{label}\t{}", signal.duration.as_millis());
            }
            println!("# total {} ms", total_duration(&signals).as_millis());
        }
        Command::History { action } => match action {
            HistoryAction::List => {
                for record in engine.history.records() {
                    println!("{}\t{}\t{} => {}", record.id, record.timestamp, record.input, record.output);
                }
            }
            HistoryAction::Export => match engine.history.export_text() {
                Some(text) => print!("{text}"),
                None => tracing::info!("history is empty"),
            },
            HistoryAction::Clear => {
                engine.history.clear();
                engine.save_history()?;
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
