//! CLI-specific utilities for butterfly-transit
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod report;
