//! Table repositories.
//!
//! Every function takes the caller's connection, normally the request's open
//! transaction, so a handler's reads and writes commit or roll back together.

pub mod activities;
pub mod campers;
pub mod signups;
