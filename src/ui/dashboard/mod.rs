//! Modular dashboard implementation
//!
//! Split into logical modules for better maintainability

pub mod components;
pub mod panels;
pub mod rain;
pub mod registry;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod utils;
pub mod widgets;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
