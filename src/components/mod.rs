//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome (header, menu, banners, pagers) and the
//! small controls shared by several screens. They read the session and gate
//! channel from Leptos context.

pub mod capacity_meter;
pub mod flash_banner;
pub mod gate_status;
pub mod header;
pub mod menu;
pub mod pager;
pub mod shell;
pub mod usage_counter;
