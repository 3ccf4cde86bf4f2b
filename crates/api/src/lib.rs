//! HTTP API: routing, request parsing and response mapping.

pub mod app;
