//! Colored terminal rendering for the menu loop.
//!
//! All output goes through [`Ui`], which queues crossterm style commands when
//! color is enabled and falls back to plain prints when it is not.

use std::io::{stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use roster_core::error::Result;
use roster_core::student::Student;

const HEADER: &str = "\
==========================================
            Student Entry System
==========================================
";

const MENU: &str = "
============ MAIN MENU ============
1. Add Student
2. View All Students
3. Delete Student by ID
4. Search Student by Name
5. Modify Student by ID
6. Exit
===================================
";

/// Terminal output handle for the interactive session.
pub struct Ui {
    color_enabled: bool,
}

impl Ui {
    #[must_use]
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    pub fn clear_screen(&self) -> Result<()> {
        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write_colored(&self, color: Color, text: &str, newline: bool) -> Result<()> {
        let mut stdout = stdout();

        if self.color_enabled {
            queue!(
                stdout,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            )?;
        } else {
            queue!(stdout, Print(text))?;
        }

        if newline {
            queue!(stdout, Print("\n"))?;
        }

        stdout.flush()?;
        Ok(())
    }

    pub fn header(&self) -> Result<()> {
        self.write_colored(Color::Blue, HEADER, false)
    }

    pub fn menu(&self) -> Result<()> {
        self.write_colored(Color::Cyan, MENU, false)
    }

    /// Cyan section banner, e.g. `--- Add New Student ---`
    pub fn section(&self, title: &str) -> Result<()> {
        self.write_colored(Color::Cyan, &format!("\n--- {title} ---"), true)
    }

    /// Yellow inline prompt; the cursor stays on the line.
    pub fn prompt(&self, text: &str) -> Result<()> {
        self.write_colored(Color::Yellow, text, false)
    }

    /// Cyan inline prompt used for the menu selection.
    pub fn menu_prompt(&self, text: &str) -> Result<()> {
        self.write_colored(Color::Cyan, text, false)
    }

    pub fn success(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Green, &format!("\n[OK] {message}"), true)
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Red, &format!("\n[ERROR] {message}"), true)
    }

    pub fn warning(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Red, &format!("\n[WARNING] {message}"), true)
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Red, &format!("\n[INFO] {message}"), true)
    }

    /// Red inline complaint used inside re-prompt loops.
    pub fn reprompt_hint(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Red, message, true)
    }

    /// Blue informational notice, e.g. cancellation of a delete.
    pub fn notice(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Blue, &format!("\n{message}"), true)
    }

    /// Green status line without the `[OK]` prefix.
    pub fn status(&self, message: &str) -> Result<()> {
        self.write_colored(Color::Green, &format!("\n{message}"), true)
    }

    /// One record with its 1-based index, as used by the full listing.
    pub fn record(&self, position: usize, student: &Student) -> Result<()> {
        self.write_colored(
            Color::Magenta,
            &format!("\nStudent {}:\n{student}", position + 1),
            true,
        )
    }

    /// One search hit, labeled with its roster position and ID.
    pub fn record_with_id(&self, position: usize, student: &Student) -> Result<()> {
        self.write_colored(
            Color::Magenta,
            &format!("\nStudent {} (ID: {}):\n{student}", position + 1, student.id),
            true,
        )
    }
}
