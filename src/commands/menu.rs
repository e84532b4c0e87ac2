//! Interactive text menu
//!
//! Lets the user pick a search mode and change the word list files before a run.

use super::{SearchMode, run_search};
use crate::scoring::SearchConfig;
use crate::wordlists::{LARGE_ANSWERS_FILE, LARGE_GUESSES_FILE, WordSource};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FirstWords,
    FirstAndSecondWords,
    ChangeFiles,
    Exit,
    /// Unlisted: switch to the large word lists and run both rounds
    LargeFiles,
}

impl MenuChoice {
    /// Parse a menu number, ignoring surrounding whitespace
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::FirstWords),
            "2" => Some(Self::FirstAndSecondWords),
            "3" => Some(Self::ChangeFiles),
            "4" => Some(Self::Exit),
            "5" => Some(Self::LargeFiles),
            _ => None,
        }
    }
}

/// What the user settled on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Run {
        mode: SearchMode,
        answers: WordSource,
        guesses: WordSource,
    },
    Exit,
}

/// Show the menu until the user picks a search or exits
///
/// End of input counts as exit.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut answers: WordSource,
    mut guesses: WordSource,
) -> io::Result<MenuOutcome> {
    writeln!(output, "Word lists are {answers} and {guesses}")?;

    loop {
        writeln!(output)?;
        writeln!(output, "Menu Options:")?;
        writeln!(output, "  1. Display best first words only")?;
        writeln!(output, "  2. Display best first and best second words")?;
        writeln!(output, "  3. Change answers and guesses filenames")?;
        writeln!(output, "  4. Exit")?;

        let Some(line) = prompt(input, output, "Your choice")? else {
            return Ok(MenuOutcome::Exit);
        };

        let mode = match MenuChoice::parse(&line) {
            Some(MenuChoice::FirstWords) => SearchMode::FirstWords,
            Some(MenuChoice::FirstAndSecondWords) => SearchMode::FirstAndSecondWords,
            Some(MenuChoice::Exit) => return Ok(MenuOutcome::Exit),
            Some(MenuChoice::LargeFiles) => {
                answers = WordSource::File(LARGE_ANSWERS_FILE.into());
                guesses = WordSource::File(LARGE_GUESSES_FILE.into());
                SearchMode::FirstAndSecondWords
            }
            Some(MenuChoice::ChangeFiles) => {
                let Some((a, g)) = read_file_names(input, output)? else {
                    return Ok(MenuOutcome::Exit);
                };
                answers = a;
                guesses = g;
                writeln!(output, "Word lists are now {answers} and {guesses}")?;
                continue;
            }
            None => {
                writeln!(output, "Invalid choice '{}', enter 1-4", line.trim())?;
                continue;
            }
        };

        return Ok(MenuOutcome::Run {
            mode,
            answers,
            guesses,
        });
    }
}

/// Read two whitespace-separated names, possibly across several lines
fn read_file_names<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<(WordSource, WordSource)>> {
    let mut names: Vec<String> = Vec::with_capacity(2);
    let mut label = "Enter new answers and guesses filenames";

    while names.len() < 2 {
        let Some(line) = prompt(input, output, label)? else {
            return Ok(None);
        };
        names.extend(line.split_whitespace().map(str::to_string));
        label = "Guesses filename";
    }

    Ok(Some((
        WordSource::from(names[0].as_str()),
        WordSource::from(names[1].as_str()),
    )))
}

/// Print `label` and read one line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the interactive menu on stdin/stdout
///
/// A chosen search runs once and ends the session.
///
/// # Errors
///
/// Returns an error if terminal I/O fails, a word list cannot be loaded, or ranking fails.
pub fn run_menu(answers: WordSource, guesses: WordSource, config: &SearchConfig) -> Result<()> {
    let outcome = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        choose(&mut input, &mut output, answers, guesses)?
    };

    match outcome {
        MenuOutcome::Run {
            mode,
            answers,
            guesses,
        } => {
            tracing::debug!(?mode, %answers, %guesses, "menu search selected");
            run_search(mode, &answers, &guesses, config)?;
            println!("Done");
            Ok(())
        }
        MenuOutcome::Exit => Ok(()),
    }
}
