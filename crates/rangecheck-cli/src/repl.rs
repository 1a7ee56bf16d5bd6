//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{BatchArgs, CheckArgs, Command, RenderArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rangecheck_service::RangeService;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
pub fn run_repl(config: &Config, service: &RangeService, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Rangecheck REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    if let Err(e) = editor.load_history(&history_path) {
        debug!("No history loaded from {}: {}", history_path.display(), e);
    }

    let default_type = config.settings.default_type.as_str();

    loop {
        match editor.readline("rangecheck> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                // Parse command
                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, service, default_type, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
///
/// Range literals contain spaces, so the range is always the rest of the line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (word, rest) = next_word(line);

    match word {
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "types" => Ok(ReplCommand::Command(Command::Types)),
        "check" => parse_check_command(rest),
        "render" => parse_render_command(rest),
        "batch" => parse_batch_command(rest),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            word
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: Command,
    service: &RangeService,
    default_type: &str,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Check(args) => commands::execute_check(args, service, default_type, formatter),
        Command::Render(args) => commands::execute_render(args, service, default_type, formatter),
        Command::Batch(args) => commands::execute_batch(args, service, default_type, formatter),
        Command::Types => commands::execute_types(formatter),
        Command::Repl => Err(CliError::InvalidInput("Already in REPL mode".to_string())),
    }
}

fn parse_check_command(args: &str) -> Result<ReplCommand> {
    let (type_name, rest) = next_word(args);
    let (value, range) = next_word(rest);

    if range.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: check <type> <value> <range>".to_string(),
        ));
    }

    Ok(ReplCommand::Command(Command::Check(CheckArgs {
        range: range.to_string(),
        value: value.to_string(),
        type_name: Some(type_name.to_string()),
    })))
}

fn parse_render_command(args: &str) -> Result<ReplCommand> {
    let (type_name, range) = next_word(args);

    if range.is_empty() {
        return Err(CliError::InvalidInput("Usage: render <type> <range>".to_string()));
    }

    Ok(ReplCommand::Command(Command::Render(RenderArgs {
        range: range.to_string(),
        type_name: Some(type_name.to_string()),
    })))
}

fn parse_batch_command(args: &str) -> Result<ReplCommand> {
    let (file, type_name) = next_word(args);

    if file.is_empty() {
        return Err(CliError::InvalidInput("Usage: batch <file> [type]".to_string()));
    }

    Ok(ReplCommand::Command(Command::Batch(BatchArgs {
        file: Some(PathBuf::from(file)),
        stdin: false,
        type_name: (!type_name.is_empty()).then(|| type_name.to_string()),
    })))
}

/// Split off the first whitespace-delimited word, returning it and the trimmed rest.
fn next_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let path = Config::history_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(path)
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  check <type> <value> <range>   - Check whether a value lies in a range");
    println!("    e.g. check Integer 6 [5, 7]");
    println!("  render <type> <range>          - Print the canonical form of a range");
    println!("    e.g. render LocalDate [infinitive, 2020-12-31)");
    println!("  batch <file> [type]            - Check every request in a JSON file");
    println!("  types                          - List supported types");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
