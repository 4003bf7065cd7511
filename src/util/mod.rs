//! Utility helpers shared across screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (navigation, dialogs, clipboard)
//! and display formatting from page and component logic.

pub mod auth;
pub mod browser;
pub mod format;
