//! Mission Sync server.
//!
//! HTTP surface and CLI plumbing around [`mission_sync_core`].

pub mod api;
pub mod client;
pub mod config;
