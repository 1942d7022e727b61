//! Dashboard component modules
//!
//! Shell chrome and shared overlays; panel bodies live under `panels`.

pub mod feed;
pub mod footer;
pub mod header;
pub mod modal;
