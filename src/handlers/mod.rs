// Handler modules
pub mod fastapi;
pub mod hello;
pub mod probe;

// Re-export all handler functions
pub use fastapi::handle_fastapi;
pub use hello::handle_hello;
pub use probe::{ProbeOptions, handle_probe};
