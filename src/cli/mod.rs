mod args;
mod output;

pub(crate) use args::{CliArgs, ExportFormat, parse_cli};
pub(crate) use output::print_export;
