//! HTTP route configuration.

pub mod router;
