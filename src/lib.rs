// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    fibonacci_iter, fibonacci_iterative, fibonacci_recursive, fibonacci_sequence, terms,
    FibonacciIter, Method, MAX_EXACT_POSITION, SLOW_RECURSION_POSITION,
};

pub use crate::errors::FibError;

pub use crate::io::output::{
    create_writer, format_sequence, print_sequence, render_report, write_sequence, OutputFormat,
    OutputWriter, SequenceReport,
};
