//! # Assistant Architecture
//!
//! Assistant is a personal address book and notebook driven by short typed
//! commands. The library holds everything except the terminal: the binary only
//! reads lines, hands them to [`api::AssistantApi`], and prints what comes back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, the read-eval loop, colored output     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's address book and notes                │
//! │  - Parses a command line and dispatches it                  │
//! │  - Turns user mistakes into messages                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, returning a CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields, tags, model, book, notes)                  │
//! │  - Validated values, records, notes, birthday arithmetic    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (JSON files), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! Both collections are loaded once when a session opens and written back as
//! whole snapshots when it closes. Nothing is saved between commands.
//!
//! ## Testing Strategy
//!
//! 1. **Domain and commands**: unit tests next to the code; most of the
//!    coverage lives here.
//! 2. **API**: dispatch and the error boundary, against `InMemoryStore`.
//! 3. **Binary**: `tests/` drives the built executable end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: session facade and dispatch
//! - [`commands`]: per-command logic and the input parser
//! - [`fields`]: validated `Name`, `Phone`, `Email`, `Birthday`
//! - [`tags`]: tag normalization
//! - [`model`]: `Record` and `Note`
//! - [`book`]: `AddressBook` and upcoming birthdays
//! - [`notes`]: `NotesCollection`
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration file
//! - [`init`]: data directory resolution and session wiring
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod init;
pub mod model;
pub mod notes;
pub mod store;
pub mod tags;
