//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `roster`
//! binary using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the roster CLI tool.
///
/// The tool is fully interactive; the only tunables are the roster capacity
/// and whether output is colored.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Maximum number of students the roster will hold.
    ///
    /// If not provided, defaults to 100.
    #[arg(long, short = 'n')]
    pub capacity: Option<usize>,

    /// Disable colored output.
    ///
    /// Useful for dumb terminals or when piping the session transcript.
    #[arg(long, action)]
    pub no_color: bool,
}
