//! The staffdir admin application.
//!
//! Drives the employee-directory workflows against a record store: the
//! navigation surface, the validation & submission workflow, the
//! two-phase deletion workflow, and the list/detail view rendering.

pub mod config;
pub mod routes;
pub mod session;
pub mod views;
