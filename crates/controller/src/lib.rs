#![deny(unused)]
//! Form orchestration for Mr-or-Ms.
//!
//! The controller ties validation, persistence, and prediction together in
//! response to the three user actions: submit, save, and clear.

pub mod form;
pub mod messages;

pub use form::FormController;
