//! # CLI Behavior
//!
//! This is **one possible client** for jsondir, not the store itself. The CLI
//! is the only place that knows about terminal I/O, configuration files,
//! environment variables, and exit codes.
//!
//! ## Commands
//!
//! - `jsondir write <collection> <resource> [json]`: store a record. The JSON
//!   document is read from stdin when the argument is omitted.
//! - `jsondir read <collection> <resource>`: print one record.
//! - `jsondir list <collection>`: print every record of a collection.
//! - `jsondir delete <collection> [resource]`: delete a record, or the whole
//!   collection when no resource is given.
//! - `jsondir seed`: write the sample `users` collection and print it back.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Dispatch logic and per-command handlers
//! - `render`: Output formatting
//! - `logging`: Console subscriber setup
//! - `seed`: Sample data

mod commands;
mod logging;
mod render;
mod seed;
pub mod setup;

pub use commands::run;
