//! Type definitions for menu dispatch.

/// Represents the user's main menu selection.
///
/// Menu entries are numbered 1 through 6 on screen; anything else is an
/// invalid choice and the menu is shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ListStudents,
    DeleteStudent,
    SearchStudents,
    ModifyStudent,
    Exit,
}

impl MenuChoice {
    /// Maps a validated integer selection to a menu entry.
    #[must_use]
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Self::AddStudent),
            2 => Some(Self::ListStudents),
            3 => Some(Self::DeleteStudent),
            4 => Some(Self::SearchStudents),
            5 => Some(Self::ModifyStudent),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Returns true only for an explicit "yes", case-insensitively.
///
/// Any other input, including an empty line, declines the confirmation.
#[must_use]
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}
