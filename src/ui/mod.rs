// UI module - HUD overlay drawn on top of the 3D view

mod events;
mod hud;

// Re-export the public interface
pub use hud::{UIState, draw_ui, process_egui};
