//! Server bootstrap: configuration, application state and app assembly.

pub mod config;
pub mod init;
pub mod state;
