//! The interactive application walkthrough.
//!
//! Drives a [`FormSession`] over stdin/stdout: one step at a time, one
//! prompt per field, `back` to retreat, and a review screen before
//! submission. The draft file is rewritten after every answer, so quitting
//! mid-way (or losing the terminal) costs nothing when rerun with
//! `--resume`.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use loan_core::{Advance, DraftStore, FormData, FormField, FormSession};
use loan_store_json::JsonDraftStore;

/// What the borrower asked for at a prompt.
enum Input {
    Answer(String),
    Back,
    Quit,
}

pub fn run(loan_type: &str, draft_path: PathBuf, resume: bool) -> Result<()> {
    let store = JsonDraftStore::new(draft_path);
    let initial = if resume {
        store
            .load()
            .context("cannot read the saved draft")?
            .unwrap_or_default()
    } else {
        FormData::new()
    };
    if resume && !initial.is_empty() {
        println!("Resuming your saved application ({} answers).", initial.len());
    }

    let mut session = FormSession::new(loan_type, initial, store);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let step = session.current_step().clone();
        let (position, total) = session.progress();
        println!();
        println!("── Step {position} of {total}: {} ──", step.title);
        println!("{}", step.description);

        if step.is_review() {
            print_summary(session.data());
            println!("Type 'submit' to send your application, or 'back' to edit.");
            match read_input(&mut lines)? {
                Input::Back => {
                    session.previous();
                    continue;
                }
                Input::Quit => return quit(),
                Input::Answer(answer) if answer.eq_ignore_ascii_case("submit") => {}
                Input::Answer(_) => continue,
            }
        } else {
            let mut retreated = false;
            for field in &step.fields {
                match prompt_field(&mut session, field, &mut lines)? {
                    Input::Answer(_) => {}
                    Input::Back => {
                        if session.previous() {
                            retreated = true;
                            break;
                        }
                        println!("Already on the first step.");
                    }
                    Input::Quit => return quit(),
                }
            }
            if retreated {
                continue;
            }
        }

        match session.next()? {
            Advance::Moved(_) => {}
            Advance::Rejected => {
                println!();
                for field in &step.fields {
                    if let Some(message) = session.error(field.name) {
                        println!("  ✗ {message}");
                    }
                }
                println!("Please correct the answers above.");
            }
            Advance::Submitted(record) => {
                info!(fields = record.len(), loan_type, "application received");
                println!();
                println!("Application submitted. A loan officer will reach out shortly.");
                return Ok(());
            }
        }
    }
}

/// Prompts for one field, showing options, the placeholder, and any saved
/// answer. An empty reply keeps the saved answer.
fn prompt_field(
    session: &mut FormSession<JsonDraftStore>,
    field: &FormField,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Input> {
    println!();
    println!("{}", field.label);
    if let Some(options) = field.kind.options() {
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option.label);
        }
    }
    match (session.data().get(field.name), &field.placeholder) {
        (Some(saved), _) if !saved.trim().is_empty() => {
            println!("  [current: {saved}, Enter keeps it]");
        }
        (_, Some(placeholder)) => println!("  [e.g. {placeholder}]"),
        _ => {}
    }

    let input = read_input(lines)?;
    if let Input::Answer(answer) = input {
        if answer.is_empty() {
            return Ok(Input::Answer(answer));
        }
        let value = resolve_choice(field, &answer);
        session.set_field(field.name, &value)?;
        return Ok(Input::Answer(value));
    }
    Ok(input)
}

/// Numbered replies to choice fields map to the option value; anything
/// else is taken verbatim.
fn resolve_choice(field: &FormField, answer: &str) -> String {
    if let Some(options) = field.kind.options() {
        if let Ok(index) = answer.parse::<usize>() {
            if index >= 1 && index <= options.len() {
                return options[index - 1].value.clone();
            }
        }
    }
    answer.to_string()
}

fn read_input(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Input> {
    match lines.next() {
        None => Ok(Input::Quit),
        Some(line) => {
            let line = line.context("cannot read from stdin")?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("back") {
                Ok(Input::Back)
            } else if trimmed.eq_ignore_ascii_case("quit") {
                Ok(Input::Quit)
            } else {
                Ok(Input::Answer(trimmed.to_string()))
            }
        }
    }
}

fn print_summary(data: &FormData) {
    println!();
    for (name, value) in data.iter() {
        println!("  {name}: {value}");
    }
}

fn quit() -> Result<()> {
    println!();
    println!("Your draft is saved; rerun with --resume to pick up where you left off.");
    Ok(())
}
