pub mod command_utils;

pub use command_utils::{CommandOutcome, first_line, run_command};
