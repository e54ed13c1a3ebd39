use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_CYAN: &str = "\x1b[36m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_STEP: &str = "➡️";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// One migration step being applied
pub fn step<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_CYAN, BOLD, ICON_STEP, RESET, msg);
}

/// Wait for ENTER. Does nothing when stdin is not an interactive terminal.
pub fn pause() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }

    print!("\nPress ENTER to continue...");
    io::stdout().flush().ok();

    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}
