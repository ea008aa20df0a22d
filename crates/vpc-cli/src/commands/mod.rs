//! Command handlers, one module per subcommand group.

pub mod agent;
pub mod auth;
pub mod canvas;
pub mod run;
