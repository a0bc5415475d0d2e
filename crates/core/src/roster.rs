//! The in-memory roster store.
//!
//! The roster holds student records in insertion order, keyed by student ID.
//! All operations are synchronous and run against a single owner; nothing here
//! persists past the end of the process.

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::student::{Student, StudentUpdate};

/// Outcome of a delete request. Cancellation is an ordinary result, not an
/// error: the caller declined the confirmation and the roster is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Student),
    Cancelled,
}

/// An insertion-ordered collection of [`Student`] records with unique IDs.
///
/// Backed by an [`IndexMap`] keyed by ID, which keeps iteration in insertion
/// order and makes the uniqueness check a key lookup. Deletion uses
/// `shift_remove`, so the relative order of the remaining records is
/// preserved.
#[derive(Debug)]
pub struct Roster {
    students: IndexMap<String, Student>,
    capacity: usize,
}

impl Roster {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            students: IndexMap::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    /// Appends a record to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The roster is at its capacity limit
    /// - Any of the four fields is empty
    /// - A record with the same ID already exists (exact, case-sensitive)
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded(self.capacity));
        }

        validate_required_fields(&student)?;

        if self.students.contains_key(&student.id) {
            return Err(Error::DuplicateId(student.id));
        }

        debug!("Adding student with ID `{}`", student.id);
        self.students.insert(student.id.clone(), student);
        Ok(())
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Looks up a record by exact, case-sensitive ID.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    /// Case-insensitive substring search against student names.
    ///
    /// Both the query and the candidate names are ASCII-lowercased before
    /// comparison. Matches are returned with their 0-based roster position,
    /// in insertion order.
    #[must_use]
    pub fn search_by_name(&self, fragment: &str) -> Vec<(usize, &Student)> {
        let needle = fragment.to_ascii_lowercase();

        self.students
            .values()
            .enumerate()
            .filter(|(_, student)| student.name.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    /// Removes a record by ID, but only when `confirmed` is true.
    ///
    /// An unconfirmed delete is a no-op reported as
    /// [`DeleteOutcome::Cancelled`]. A confirmed delete removes the record
    /// and shifts the remaining records to fill the gap, preserving their
    /// relative order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has the given ID.
    pub fn delete(&mut self, id: &str, confirmed: bool) -> Result<DeleteOutcome> {
        if !self.students.contains_key(id) {
            return Err(Error::NotFound(id.to_string()));
        }

        if !confirmed {
            debug!("Delete of `{id}` declined, roster unchanged");
            return Ok(DeleteOutcome::Cancelled);
        }

        // shift_remove keeps the insertion order of the survivors intact
        let removed = self
            .students
            .shift_remove(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        debug!("Deleted student with ID `{id}`");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Applies a partial update to the record with the given ID.
    ///
    /// Fields that are absent or blank in the update are left unchanged; the
    /// ID itself can never be modified. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has the given ID.
    pub fn modify(&mut self, id: &str, update: &StudentUpdate) -> Result<&Student> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        update.apply_to(student);
        debug!("Modified student with ID `{id}`");
        Ok(student)
    }
}

fn validate_required_fields(student: &Student) -> Result<()> {
    if student.name.is_empty() {
        return Err(Error::EmptyField("Name"));
    }

    if student.phone.is_empty() {
        return Err(Error::EmptyField("Phone number"));
    }

    if student.id.is_empty() {
        return Err(Error::EmptyField("Student ID"));
    }

    if student.department.is_empty() {
        return Err(Error::EmptyField("Department"));
    }

    Ok(())
}
