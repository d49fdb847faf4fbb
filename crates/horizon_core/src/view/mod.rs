//! View-layer state: editors, the editor cache and period panels.
//!
//! # Responsibility
//! - Hold everything a rendering layer needs short of drawing: window
//!   positions, focus, editor text state.
//! - Keep widget state reusable across re-renders via the editor cache.
//!
//! # Invariants
//! - No module here performs I/O besides repository calls handed in by the
//!   caller; rendering and key mapping live outside this crate.

pub mod editor;
pub mod editor_cache;
pub mod panel;
pub mod workspace;
