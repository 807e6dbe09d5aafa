//! BDD step definitions for hub console

pub mod console_steps;
pub mod server_steps;
