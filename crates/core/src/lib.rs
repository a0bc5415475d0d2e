//! Roster Core Library
//!
//! This crate provides the core functionality for the student roster manager,
//! an interactive console tool for keeping a small in-memory roster of student
//! records for the duration of a session.
//!
//! # Key Features
//!
//! - **Student Records**: Name, phone, ID and department fields with an
//!   ID-uniqueness guarantee
//! - **Roster Store**: Add, list, search, modify and delete operations over an
//!   insertion-ordered collection
//! - **Confirmed Deletion**: Destructive removal only proceeds with an explicit
//!   confirmation flag
//! - **Configuration**: Capacity limit resolution with a sensible default
//! - **Error Handling**: Error types for every recoverable failure mode
//!
//! # Examples
//!
//! Adding and looking up a record:
//!
//! ```
//! use roster_core::roster::Roster;
//! use roster_core::student::Student;
//!
//! let mut roster = Roster::with_capacity(100);
//! roster.add(Student::new("Alice Smith", "555-1111", "S1", "CS"))?;
//! assert!(roster.find_by_id("S1").is_some());
//! # Ok::<(), roster_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod roster;
pub mod student;
