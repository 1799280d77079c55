pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use context::RecencyCliContext;
pub use output::{
    CliColors, OutputFormat, format_error, format_info, format_recency, format_warning,
    output_error_json, print_explanations, print_records,
};
pub use utils::{parse_records, read_records};
