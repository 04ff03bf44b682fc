//! Line-based stdin prompts.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Learner input parsed from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Prints `message` and reads one trimmed line. EOF and `q` both quit.
pub fn ask(message: &str) -> Result<Reply> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(Reply::Quit);
    }
    Ok(parse_reply(&line))
}

/// Asks until the learner answers yes or no.
pub fn ask_yes_no(message: &str) -> Result<Option<bool>> {
    loop {
        match ask(message)? {
            Reply::Quit => return Ok(None),
            Reply::Text(text) => match text.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => println!("Please answer y or n (q to stop)."),
            },
        }
    }
}

fn parse_reply(line: &str) -> Reply {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        Reply::Quit
    } else {
        Reply::Text(trimmed.to_string())
    }
}
