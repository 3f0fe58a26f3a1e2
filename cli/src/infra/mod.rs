//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: AWS API calls, SDK
//! configuration, process spawning, and wall-clock time.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod aws;
pub mod browser;
pub mod clock;
pub mod command_runner;
pub mod config;
