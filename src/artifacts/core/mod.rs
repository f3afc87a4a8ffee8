//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application:
//!
//! - `error`: the error taxonomy every operation reports through
//! - `settings`: environment-driven configuration
//! - `table`: rendering of the checkout history listing

pub mod error;
pub mod settings;
pub mod table;
