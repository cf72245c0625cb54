use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use morse_core::config::Preferences;
use morse_core::keyer::Keyer;
use morse_core::trace_init::init_tracing;
use morse_core::{Direction, MorseEngine, TranslationResult};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

const PREFERENCES_PATH: &str = "dotdash_prefs.json";
const HISTORY_PATH: &str = "dotdash_history.bin";

struct Session {
    engine: MorseEngine,
    keyer: Keyer,
    input: String,
    result: TranslationResult,
}

impl Session {
    fn set_input(&mut self, input: String) {
        self.result = self.engine.translate(&input);
        self.input = input;
    }

    fn handle(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        match parts.next().unwrap_or("") {
            ":exit" => return false,
            ":save" => {
                self.engine.commit(&self.input, &self.result);
            }
            ":key" => {
                for ms in parts.filter_map(|p| p.parse::<u64>().ok()) {
                    self.keyer.press(Duration::from_millis(ms));
                }
            }
            ":ls" => self.keyer.letter_space(),
            ":ws" => self.keyer.word_space(),
            ":commit" => {
                if let Some(keyed) = self.keyer.commit() {
                    self.set_input(keyed);
                }
            }
            ":history" => {}
            ":clear" => {
                self.keyer.clear();
                self.set_input(String::new());
            }
            _ => self.set_input(line.to_string()),
        }
        true
    }
}

fn print_ui(session: &Session, show_history: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "DotDash Morse Simulator".bold());
    println!("---------------------------------------------------------------");
    println!("Type text or Morse and press [Enter]. ':save' stores the pair.");
    println!("Keyer: ':key 80 300' presses, ':ls' / ':ws' spaces, ':commit'.");
    println!("':history', ':clear', ':exit' to save and quit.\n");

    let r = &session.result;
    let label = match r.direction {
        Direction::English => "text -> morse",
        Direction::Morse => "morse -> text",
    };
    println!("Input    [{}]", session.input);
    println!("Detected {}", label.cyan());
    println!("English  {}", r.english);
    println!("Morse    {}", r.morse.clone().yellow());
    if r.continuous {
        println!("{}", "(continuous run, segmented longest-match first)".dark_grey());
    }
    if r.changed {
        println!("{}", "(input was normalized)".dark_grey());
    }
    if !r.invalid.is_empty() {
        println!("{} {}", "Unknown:".red(), r.invalid.join(" "));
    }

    println!(
        "\nKeyer    [{}] threshold {:.0} ms",
        session.keyer.buffer(),
        session.keyer.threshold_ms()
    );

    if show_history {
        println!("\nHistory:");
        for record in session.engine.history.records() {
            println!("  {} {} => {}", record.id.clone().dark_grey(), record.input, record.output);
        }
    }
    print!("\n> ");
    stdout.flush()
}

fn main() -> io::Result<()> {
    init_tracing();
    let prefs = Preferences::load(Path::new(PREFERENCES_PATH)).unwrap_or_else(|e| {
        tracing::warn!("using default preferences: {e}");
        Preferences::default()
    });

    let mut session = Session {
        engine: MorseEngine::from_file_or_new(Path::new(HISTORY_PATH), &prefs),
        keyer: Keyer::new(),
        input: String::new(),
        result: TranslationResult::empty(),
    };

    print_ui(&session, false)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let cmd = line.trim();
        if !session.handle(cmd) {
            break;
        }
        print_ui(&session, cmd == ":history")?;
    }

    println!("\nSaving history...");
    if let Err(e) = session.engine.save_history() {
        tracing::error!("could not save history: {e}");
    } else {
        println!("History saved to '{}'", HISTORY_PATH);
    }
    Ok(())
}
