//! Core model for an interactive hexagonal tile editor.
//!
//! The crate owns the parts that are easy to get wrong and easy to test:
//! axial tile storage with the single-exit rule, the pixel↔hex coordinate
//! transforms, and the click-vs-drag gesture state machine. Drawing and the
//! window/event loop belong to the host — it feeds raw `winit` events into
//! [`input::GestureController`] and walks [`grid::HexGrid::for_each_tile`]
//! to draw the result.

pub mod config;
pub mod grid;
pub mod input;
pub mod palette;
