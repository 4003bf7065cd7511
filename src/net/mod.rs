//! Networking modules for REST calls and the gate status socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every REST endpoint of the gate service, `channel` owns the
//! reconnecting status socket shared by all screens.

pub mod api;
pub mod channel;
