#![deny(unused)]
//! Core types, traits, and error definitions for Mr-or-Ms.
//!
//! This crate provides the foundational building blocks shared across the
//! store, prediction, and controller layers.

pub mod config;
pub mod error;
pub mod mocks;
pub mod traits;
pub mod types;
pub mod validate;

pub use error::{Error, FetchError, Result, ValidationError};
pub use traits::*;
pub use types::*;
