//! # jsondir CLI
//!
//! A thin command-line client over the `jsondir` library. This file only invokes
//! `cli::run()` and handles process termination; everything user-facing lives
//! in `src/cli/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + store wiring (commands.rs)                    │
//! │  - Terminal output (render.rs), logging (logging.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/jsondir)                                   │
//! │  - Store: write / read / read_all / delete                  │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod config;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
