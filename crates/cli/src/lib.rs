//! Roster CLI Library
//!
//! This crate provides the interactive console interface for the student
//! roster manager. It handles the main menu loop, field prompts, delete
//! confirmation and colored terminal output.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`interaction`]: Menu rendering, line prompts and confirmation dialogs
//!
//! # Examples
//!
//! The binary (`roster`) runs a single interactive session:
//!
//! ```bash
//! # Default capacity of 100 records
//! roster
//!
//! # Smaller roster, plain output
//! roster --capacity 25 --no-color
//! ```

pub mod cli_args;
pub mod interaction;
