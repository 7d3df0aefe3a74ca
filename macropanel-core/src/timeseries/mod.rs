//! Time-series utilities used to build a panel.
//!
//! Modules include:
//! - `calendar`: the canonical daily date axis
//! - `normalize`: timezone stripping, duplicate collapsing, calendar alignment
//! - `fill`: forward-then-backward gap filling
//! - `rolling`: fixed-horizon percent change and trailing means
/// Canonical daily calendar.
pub mod calendar;
/// Gap filling over calendar-aligned columns.
pub mod fill;
/// Series normalization onto a calendar.
pub mod normalize;
/// Rolling-window and horizon primitives.
pub mod rolling;
