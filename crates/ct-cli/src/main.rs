//! comment-thread - Nested reply tree demo CLI
//!
//! An interactive walk through the comment thread engine: reply to any
//! comment by id and watch the thread rebuild around it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the interactive demo on the built-in seed thread
//! comment-thread demo
//!
//! # Render a thread JSON file as an indented listing
//! comment-thread render thread.json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
