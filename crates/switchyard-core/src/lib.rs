//! Switchyard Core
//!
//! Core domain types and error handling for the Switchyard CI matrix
//! compiler. This crate has minimal dependencies and defines the shared
//! vocabulary used by the compiler and the CLI.

pub mod error;
pub mod job;
pub mod platform;
pub mod secrets;
pub mod toolchain;

pub use error::{Error, Result};
