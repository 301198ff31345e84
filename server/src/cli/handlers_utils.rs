// server/src/cli/handlers_utils.rs
use std::io::{self, Write};
use anyhow::{anyhow, Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{self, Stylize};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use log::{debug, warn};
use models::RecordsError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Authorization failures and every other failure render differently.
pub fn render_error(err: &RecordsError) -> String {
    if err.is_authorization() {
        format!("ACCESS DENIED: {}", err)
    } else {
        format!("ERROR: {}", err)
    }
}

pub fn clear_terminal_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
        .context("Failed to clear terminal screen or move cursor")?;
    io::stdout().flush()?;
    Ok(())
}

pub fn print_banner(title: &str) {
    let line = "=".repeat(title.len() + 8);
    println!("{}", line.as_str().with(style::Color::Cyan));
    println!("    {}", title.with(style::Color::DarkCyan).bold());
    println!("{}", line.as_str().with(style::Color::Cyan));
}

/// One line of input. `None` when the user closed the input stream or hit
/// Ctrl-C.
pub fn prompt(rl: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match rl.readline(label) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            debug!("Input closed at prompt {:?}", label);
            Ok(None)
        }
        Err(e) => Err(anyhow!("Readline error: {:?}", e)),
    }
}

/// Like `prompt`, but a closed stream reads as an empty answer.
pub fn prompt_or_empty(rl: &mut DefaultEditor, label: &str) -> Result<String> {
    Ok(prompt(rl, label)?.unwrap_or_default())
}

pub fn pause(rl: &mut DefaultEditor) -> Result<()> {
    prompt(rl, "Press Enter to continue...")?;
    Ok(())
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Reads a password without echoing it, printing `*` per character.
/// `Ok(None)` when the user pressed Ctrl-C. Fails when the terminal cannot be
/// put in raw mode, e.g. when stdin is not a TTY.
pub fn read_hidden(label: &str) -> Result<Option<String>> {
    let mut password = String::new();
    {
        let _raw = RawModeGuard::enable()?;
        print!("{}", label);
        io::stdout().flush()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    print!("\r\n");
                    return Ok(None);
                }
                KeyCode::Backspace => {
                    if password.pop().is_some() {
                        print!("\x08 \x08");
                    }
                }
                KeyCode::Char(c) => {
                    password.push(c);
                    print!("*");
                }
                _ => {}
            }
            io::stdout().flush()?;
        }
    }
    println!();
    Ok(Some(password))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordEntry {
    Entered(String),
    Cancelled,
    /// Hidden entry could not be used; read the password as a plain line.
    Unavailable,
}

pub fn password_entry_from(hidden: Result<Option<String>>) -> PasswordEntry {
    match hidden {
        Ok(Some(password)) => PasswordEntry::Entered(password),
        Ok(None) => PasswordEntry::Cancelled,
        Err(e) => {
            warn!("Hidden password entry unavailable: {:#}", e);
            PasswordEntry::Unavailable
        }
    }
}

/// Hidden entry when the terminal allows it, a plain prompt otherwise.
/// `None` when the user cancelled or closed the input stream.
pub fn read_password(rl: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match password_entry_from(read_hidden(label)) {
        PasswordEntry::Entered(password) => Ok(Some(password)),
        PasswordEntry::Cancelled => Ok(None),
        PasswordEntry::Unavailable => prompt(rl, label),
    }
}

/// Replacement value for an edited field; blank input keeps the current one.
pub fn keep_if_blank(current: &str, input: &str) -> String {
    if input.trim().is_empty() {
        current.to_string()
    } else {
        input.to_string()
    }
}
