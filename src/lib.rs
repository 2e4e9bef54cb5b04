//! Medibook - form engine for the Medibook appointment booking app
//!
//! Multi-step form state, field validation and payload assembly shared by
//! patient sign-up, profile editing and appointment booking.

pub mod config;
pub mod form;
pub mod forms;
pub mod payload;
pub mod validation;
