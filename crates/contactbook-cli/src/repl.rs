use crate::commands::{self, Command, Context};
use crate::error::error_message;
use chrono::NaiveDate;
use contactbook_config::AppConfig;
use contactbook_core::rules::local_today;
use contactbook_core::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";
pub const EMPTY_INPUT: &str = "Please enter a command.";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// One line of user input, split into a command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Exit,
    Run(Command, Vec<String>),
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Terminated,
}

/// Only the command word is case-folded; arguments pass through as typed.
pub fn parse_input(line: &str) -> Input {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Input::Empty;
    };
    let word = word.to_lowercase();
    if matches!(word.as_str(), "close" | "exit") {
        return Input::Exit;
    }
    match Command::from_word(&word) {
        Some(command) => Input::Run(command, tokens.map(str::to_string).collect()),
        None => Input::Unknown(word),
    }
}

pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    book: &mut AddressBook,
    config: &AppConfig,
) -> io::Result<()> {
    run_with_clock(input, output, book, config, local_today)
}

/// Reads and answers lines until an exit word or end of input. `today` is
/// consulted once per line.
pub fn run_with_clock<R, W, F>(
    mut input: R,
    output: &mut W,
    book: &mut AddressBook,
    config: &AppConfig,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", WELCOME)?;
    let mut state = LoopState::Running;
    let mut line = String::new();
    while state == LoopState::Running {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }
        state = handle_line(&line, output, book, config, today())?;
    }
    Ok(())
}

fn handle_line<W: Write>(
    line: &str,
    output: &mut W,
    book: &mut AddressBook,
    config: &AppConfig,
    today: NaiveDate,
) -> io::Result<LoopState> {
    let reply = match parse_input(line) {
        Input::Empty => EMPTY_INPUT.to_string(),
        Input::Exit => {
            writeln!(output, "{}", FAREWELL)?;
            return Ok(LoopState::Terminated);
        }
        Input::Unknown(word) => {
            debug!(command = %word, "unknown command");
            INVALID_COMMAND.to_string()
        }
        Input::Run(command, args) => {
            debug!(command = command.word(), args = args.len(), "dispatch");
            let mut ctx = Context {
                book,
                today,
                config,
            };
            commands::execute(&mut ctx, command, &args).unwrap_or_else(|err| {
                debug!(error = %err, "command failed");
                error_message(&err)
            })
        }
    };
    writeln!(output, "{}", reply)?;
    Ok(LoopState::Running)
}
