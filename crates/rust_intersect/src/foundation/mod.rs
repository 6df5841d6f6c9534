//! Foundation module - Core utilities and types
//!
//! This module provides the fundamental utilities shared by every
//! intersection routine:
//! - Math types and operations
//! - Logging utilities

pub mod math;
pub mod logging;
