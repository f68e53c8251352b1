//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete
//! and the button prompt that guards deletes.

/// Autocomplete handlers for employee emails, department and shift type names, and colors
pub mod autocomplete;
/// Two-button delete confirmation
pub mod confirm;
