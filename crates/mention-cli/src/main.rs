//! mention-helper - comment @mention extraction CLI
//!
//! Extracts @mentions from comment bodies and runs the behavioural
//! scenarios that describe the extraction rule.
//!
//! ## Quick Start
//!
//! ```bash
//! # Extract mentions from a comment
//! mention-helper extract "thanks @alice, cc @bob"
//!
//! # Run the feature scenarios
//! mention-helper run features/
//!
//! # Write a default configuration file
//! mention-helper config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
