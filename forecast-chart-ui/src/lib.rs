//! Shared Dioxus components and D3.js bridge for the sales forecast dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line chart and browser notifications
//! - `state`: Reactive AppState with Dioxus Signals, plus the fetch actions
//! - `components`: Reusable RSX components (city selector, chart sections, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
