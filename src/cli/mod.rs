//! Command Line Interface (CLI) layer for benchrun.
//!
//! This module collects the process arguments (`args`), defines the binary's
//! error type (`errors`), and reports the binding outcome (`runner`). The
//! option schema itself lives in the library; this layer only decides what
//! to print and which exit status to use.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::collect_tokens;
pub use runner::{init_logging, run};
