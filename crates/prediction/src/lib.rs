#![deny(unused)]
//! HTTP client for the remote gender prediction service.

pub mod client;

pub use client::PredictionClient;
