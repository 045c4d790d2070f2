//! Sentiment bar charts for the sector analysis UI.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of every sentiment chart: building a spec from a sector's
//! scores, laying bars out in pixel space, drawing them onto a `<canvas>`
//! element, and tracking the live handles so a render pass can tear them all
//! down before the next one begins. The host UI layer is responsible only for
//! mounting canvas elements and deciding when a pass starts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`spec`] | Chart specs: series values and sign-threshold coloring |
//! | [`layout`] | Value-to-pixel bar geometry for a fixed `[-1, 1]` axis |
//! | [`render`] | Canvas2D drawing (the only module touching `web_sys`) |
//! | [`registry`] | Chart handles and the per-pass handle registry |
//! | [`consts`] | Shared numeric constants and the bar color palette |

pub mod consts;
pub mod layout;
pub mod registry;
pub mod render;
pub mod spec;
