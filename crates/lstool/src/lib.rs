//! lstool - keeps localization keys in sync across `.strings` tables.
//!
//! Every insert runs one sequential pipeline over the project tree:
//! [`scanner`] finds the tables, [`store`] parses them into a
//! [`TableCollection`](store::TableCollection), [`inserter`] adds the key
//! where it is missing, and [`writer`] persists every table sorted by key.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod config;
pub mod error;
pub mod inserter;
pub mod scanner;
pub mod store;
pub mod writer;

// Public CLI module (needed by binary)
pub mod cli;

// Command implementations
pub mod commands;

pub mod output;
