//! # Core Application Logic
//!
//! The roster and everything that reads or rewrites it, plus the menu
//! navigation that drives it. It knows nothing about any terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Roster / grading     │
//!                    │  • Sort / search        │
//!                    │  • Navigator (frames)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │ Action / Prompt
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`student`]: `Student` records and the subject list
//! - [`grading`]: score → letter grade
//! - [`roster`]: the store (insert / update / delete / read)
//! - [`sort`], [`search`]: reordering and lookup
//! - [`nav`]: frames, menus, and forms
//! - [`action`]: `Action`, `update()`
//! - [`state`]: `App`
//! - [`config`]: settings file + overrides

pub mod action;
pub mod config;
pub mod grading;
pub mod nav;
pub mod roster;
pub mod search;
pub mod sort;
pub mod state;
pub mod student;
