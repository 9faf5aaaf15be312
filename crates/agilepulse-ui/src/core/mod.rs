//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod copy;
pub mod login;
pub mod sections;
pub mod tab_style;
pub mod theme;
