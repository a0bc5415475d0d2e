//! Blocking line prompts for the interactive session.
//!
//! Every prompt loops until it gets acceptable input. Reaching end of input
//! on stdin is the one unrecoverable condition and surfaces as
//! [`Error::InputClosed`], which terminates the session.

use std::io::stdin;

use roster_core::error::{Error, Result};
use roster_core::roster::Roster;
use roster_core::student::Student;

use super::types::is_affirmative;
use super::ui::Ui;

fn read_line() -> Result<String> {
    let mut input = String::new();
    let bytes_read = stdin().read_line(&mut input)?;

    if bytes_read == 0 {
        return Err(Error::InputClosed);
    }

    Ok(input.trim().to_string())
}

/// Prompts once and returns the trimmed line, which may be empty.
pub fn prompt_line(ui: &Ui, prompt: &str) -> Result<String> {
    ui.prompt(prompt)?;
    read_line()
}

/// Prompts until a non-empty value is entered.
pub fn prompt_required(ui: &Ui, prompt: &str, field: &str) -> Result<String> {
    loop {
        let value = prompt_line(ui, prompt)?;

        if !value.is_empty() {
            return Ok(value);
        }

        ui.reprompt_hint(&format!("{field} cannot be empty. Please enter a value."))?;
    }
}

/// Prompts for a student ID until it is non-empty and not already taken.
///
/// The roster's own duplicate check still guards the eventual insert; this
/// loop just keeps the operator from typing three more fields for a doomed
/// record.
pub fn prompt_new_id(ui: &Ui, roster: &Roster) -> Result<String> {
    loop {
        let id = prompt_line(ui, "Enter student ID: ")?;

        if id.is_empty() {
            ui.reprompt_hint("Student ID cannot be empty. Please enter a value.")?;
            continue;
        }

        if roster.contains_id(&id) {
            ui.reprompt_hint(&format!(
                "[ERROR] Student ID '{id}' already exists. Please enter a unique ID."
            ))?;
            continue;
        }

        return Ok(id);
    }
}

/// Prompts for a menu selection until the input parses as an integer.
pub fn prompt_menu_choice(ui: &Ui) -> Result<i64> {
    loop {
        ui.menu_prompt("Enter your choice: ")?;
        let input = read_line()?;

        match input.parse::<i64>() {
            Ok(selection) => return Ok(selection),
            Err(_) => {
                ui.reprompt_hint("[ERROR] Invalid input. Please enter a number.")?;
            }
        }
    }
}

/// Prompts once for an optional replacement value; blank keeps the current one.
pub fn prompt_optional(ui: &Ui, prompt: &str) -> Result<Option<String>> {
    let value = prompt_line(ui, prompt)?;

    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Asks for explicit confirmation before deleting a record.
///
/// Only the exact word "yes" (case-insensitive) confirms; anything else,
/// including an empty line, declines.
pub fn confirm_deletion(ui: &Ui, student: &Student) -> Result<bool> {
    let answer = prompt_line(
        ui,
        &format!(
            "\nAre you sure you want to delete student with ID '{}' (Name: {})? (yes/no): ",
            student.id, student.name
        ),
    )?;

    Ok(is_affirmative(&answer))
}

/// Holds the screen until the operator presses Enter.
pub fn pause(ui: &Ui) -> Result<()> {
    ui.prompt("\nPress Enter to continue...")?;
    read_line()?;
    Ok(())
}
