//! scalar-terminal
//!
//! Terminal client for one scalar market:
//! - [`config`]  : TOML config + CLI overrides
//! - [`logging`] : file-based tracing (the TUI owns stdout)
//! - [`network`] : HTTP API client and the background request worker
//! - [`form`]    : the configured order-form variant behind one interface
//! - [`app`]     : application state driven by keys, API events and ticks
//! - [`ui`]      : ratatui rendering

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod logging;
pub mod network;
pub mod ui;
