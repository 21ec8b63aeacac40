//! Glue between the command line and the library crates: output locations,
//! logging setup and the interactive prompt.

pub(crate) mod interactive;
pub(crate) mod logging;
pub(crate) mod output_dir;
