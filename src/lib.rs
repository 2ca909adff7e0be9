//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note manager**. State lives only in memory for
//! the lifetime of the owning process — there is no persistence, no
//! networking, and no concurrency machinery, by design.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands                               │
//! │  - Normalizes inputs (e.g. sort-key strings)               │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Business logic, returns CmdResult with messages         │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Collection/Model Layer (collection.rs, model.rs)          │
//! │  - NoteCollection owns the notes and the id counter        │
//! │  - Linear-scan CRUD, search, and in-place sort             │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`), and never writes to stdout/stderr or
//! assumes a terminal. Diagnostics travel as structured [`commands::CmdMessage`]s
//! for a front-end to render; the one below-the-command-layer signal (the
//! confirmation-required notice on guarded edits) goes through the `log`
//! facade.
//!
//! ## Key Principle: Fail Silently, Never Throw
//!
//! Domain-level failure modes — blank input to create, an id that doesn't
//! exist — resolve to silent no-ops or `Option` absences, never to errors or
//! panics. The only fallible operation in the crate is parsing a sort key
//! from user input.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`collection`]: The note collection and its linear-scan operations
//! - [`model`]: Core data types (`Note`, `NoteStatus`)
//! - [`query`]: Filtering (`NoteQuery`) and ordering (`SortKey`) types
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod error;
pub mod model;
pub mod query;
