//! Data layer of the Steam top games dashboard.
//!
//! The GUI binary depends on this crate; nothing here touches `egui`.

pub mod data;
pub mod format;
