//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `Screen`: Bordered page chrome with title and instruction line
//! - `OptionList`: Menu rows with one highlighted
//! - `StudentTable`: Fixed-column record listing, drawn from a row offset
//!
//! ### Stateful Components
//!
//! Components that keep local state between draws:
//! - `LineInput`: Prompted line entry with integer validation (emits `LineEvent`)
//! - `RecordPicker`: Scrolling student list for modify/delete
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//! Navigation state (which row is highlighted, which page is showing) stays
//! in `core::nav`; components only draw it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── screen.rs         (Page chrome)
//! ├── option_list.rs    (Menu rows)
//! ├── student_table.rs  (Record table)
//! ├── record_picker.rs  (Selectable record list)
//! └── line_input.rs     (Prompted line entry)
//! ```

pub mod line_input;
pub mod option_list;
pub mod record_picker;
pub mod screen;
pub mod student_table;

pub use line_input::{LineEvent, LineInput};
pub use option_list::OptionList;
pub use record_picker::{RecordPicker, RecordPickerState};
pub use screen::Screen;
pub use student_table::StudentTable;
