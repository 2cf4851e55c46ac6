//! # Comimemo Architecture
//!
//! Comimemo keeps a personal list of **circles** (booths) to visit at a convention: where
//! each booth is, who runs it, a reference, which hall it is in, and how much you want to
//! get there. The list can be sorted by priority, grown through an add form, and pruned by
//! position.
//!
//! The crate is a **UI-agnostic core** with a terminal client on top. The core never
//! prints, never exits, and never assumes a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments and session lines, renders listings     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, owns the registry for a session             │
//! │  - Normalizes inputs (display positions, form drafts)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One module per user action, returns `CmdResult`          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                     │
//! │  - Ordered in-memory list: add, remove, sort, read          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Persistence
//!
//! Circles live only as long as the registry that holds them. A session starts from a seed
//! (the built-in sample, a JSON seed file, or nothing) and nothing is written back. The only
//! file comimemo writes is its own `config.json`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Logic for each user action
//! - [`registry`]: The ordered circle list and its invariants
//! - [`model`]: `CircleRecord`, `NewCircle`, `Priority`
//! - [`form`]: The add form: picker options, completeness gate, place composition
//! - [`index`]: One-based display positions and range parsing
//! - [`sample`] / [`seed`]: Where a registry's initial circles come from
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod index;
pub mod model;
pub mod registry;
pub mod sample;
pub mod seed;
