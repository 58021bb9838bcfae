//! Types shared by the web client and the server.
//!
//! Everything in here compiles for both targets, so validation rules and checklist
//! definitions live here and are run on both sides of the wire.

pub mod api;
pub mod checklist;
pub mod container;
pub mod format;
pub mod inspection;
pub mod role;
pub mod user;
pub mod validation;
