pub mod config;
pub mod explain;
pub mod rank;

pub use config::handle_config_command;
pub use explain::handle_explain_command;
pub use rank::handle_rank_command;
