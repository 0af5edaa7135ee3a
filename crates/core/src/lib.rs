//! Domain types and pure state logic for the staffdir employee directory.
//!
//! This crate holds everything that does not touch the network: the
//! employee record types, the wire-format bodies of the REST contract,
//! the form draft and its validation rules, and the reducer-style state
//! container the admin application runs on.

pub mod error;
pub mod form;
pub mod state;
pub mod types;
pub mod validation;
pub mod wire;
