//! Reactive state models provided through Leptos context.
//!
//! DESIGN
//! ======
//! Types here are plain data held in `RwSignal`s by the root component.
//! Browser side effects (cookies, sockets, timers) live in `session`,
//! `net` and `components`, so these stay testable natively.

pub mod flash;
pub mod gate;
pub mod request;
pub mod session;
