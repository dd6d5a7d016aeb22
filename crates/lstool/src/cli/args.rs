//! CLI argument structs for all commands.

use clap::Parser;

/// Arguments for the `insert` command
#[derive(Parser, Debug, Clone, Default)]
pub struct InsertArgs {
    /// Keys to insert, processed in order
    ///
    /// Each key is added to every table that lacks it, with the key itself as
    /// the value. Tables that already contain the key keep their value.
    /// Keys starting with `-` go after `--`: `lstool insert -- -x`.
    #[arg(value_name = "LSTRING")]
    pub keys: Vec<String>,
}
