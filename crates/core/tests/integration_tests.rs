//! Integration tests for roster-core
//!
//! These tests verify that the store operations work together correctly by
//! exercising complete CRUD workflows end-to-end.

use roster_core::error::Error;
use roster_core::roster::{DeleteOutcome, Roster};
use roster_core::student::{Student, StudentUpdate};

/// Test the full add/duplicate/modify/delete session workflow
#[test]
fn test_complete_roster_session_workflow() {
    let mut roster = Roster::with_capacity(100);

    // Add a first student
    roster
        .add(Student::new("Alice", "555-1111", "S1", "CS"))
        .unwrap();

    let listed: Vec<&Student> = roster.iter().collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Alice");

    // A second student reusing the ID is rejected, roster unchanged
    let duplicate = roster.add(Student::new("Bob", "555-2222", "S1", "EE"));
    assert!(matches!(duplicate, Err(Error::DuplicateId(id)) if id == "S1"));
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.find_by_id("S1").unwrap().name, "Alice");

    // Partial update changes only the phone
    let update = StudentUpdate {
        phone: Some("555-9999".to_string()),
        ..StudentUpdate::default()
    };
    roster.modify("S1", &update).unwrap();

    let listed: Vec<&Student> = roster.iter().collect();
    assert_eq!(listed[0].phone, "555-9999");
    assert_eq!(listed[0].name, "Alice");
    assert_eq!(listed[0].department, "CS");

    // Confirmed delete empties the roster
    let outcome = roster.delete("S1", true).unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted(student) if student.name == "Alice"));
    assert!(roster.is_empty());
}

/// Test that listing preserves insertion order across mixed operations
#[test]
fn test_insertion_order_survives_deletes() {
    let mut roster = Roster::with_capacity(100);
    for (id, name) in [
        ("S1", "Alice"),
        ("S2", "Bob"),
        ("S3", "Carol"),
        ("S4", "Dave"),
    ] {
        roster.add(Student::new(name, "555-0000", id, "CS")).unwrap();
    }

    roster.delete("S2", true).unwrap();
    roster
        .add(Student::new("Erin", "555-0000", "S5", "EE"))
        .unwrap();

    let ids: Vec<&str> = roster.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["S1", "S3", "S4", "S5"]);
}

/// Test search across a roster with mixed-case names
#[test]
fn test_search_workflow_mixed_case() {
    let mut roster = Roster::with_capacity(100);
    roster
        .add(Student::new("Alice Smith", "555-1111", "S1", "CS"))
        .unwrap();
    roster
        .add(Student::new("BOB ALICE", "555-2222", "S2", "EE"))
        .unwrap();
    roster
        .add(Student::new("Carol", "555-3333", "S3", "ME"))
        .unwrap();

    let matches = roster.search_by_name("alice");
    let names: Vec<&str> = matches
        .iter()
        .map(|(_, student)| student.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice Smith", "BOB ALICE"]);

    // Query casing is irrelevant too
    let matches = roster.search_by_name("ALICE");
    assert_eq!(matches.len(), 2);
}

/// Test that the number of successful adds equals the roster size
#[test]
fn test_successful_adds_match_roster_size() {
    let mut roster = Roster::with_capacity(10);
    let mut successful = 0;

    for i in 0..12 {
        let id = format!("S{i}");
        if roster
            .add(Student::new("Student", "555-0000", id, "CS"))
            .is_ok()
        {
            successful += 1;
        }
    }

    assert_eq!(successful, 10);
    assert_eq!(roster.len(), successful);

    // Every id is unique in the final roster
    let mut ids: Vec<&str> = roster.iter().map(|s| s.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

/// Test that a failed add never leaves a partial record behind
#[test]
fn test_failed_adds_leave_no_trace() {
    let mut roster = Roster::with_capacity(100);
    roster
        .add(Student::new("Alice", "555-1111", "S1", "CS"))
        .unwrap();

    assert!(roster
        .add(Student::new("", "555-2222", "S2", "EE"))
        .is_err());
    assert!(roster
        .add(Student::new("Bob", "555-2222", "S1", "EE"))
        .is_err());

    assert_eq!(roster.len(), 1);
    assert!(!roster.contains_id("S2"));
}
