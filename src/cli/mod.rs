pub mod args;
pub mod commands;
pub mod core;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;
pub mod shell_context;

pub use args::CliArgs;
pub use shell::run_cli;
