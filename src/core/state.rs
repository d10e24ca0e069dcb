//! # Application State
//!
//! Core business state for the roster. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── roster: Roster      // the student records
//! └── nav: Navigator      // frame stack above the main menu
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::nav::Navigator;
use crate::core::roster::Roster;

pub struct App {
    pub roster: Roster,
    pub nav: Navigator,
}

impl App {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            nav: Navigator::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(Roster::new(config.id_scheme))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::{Diagnostics, GradebookConfig, RosterConfig, resolve};
    use crate::core::roster::IdScheme;
    use crate::test_support::test_app;

    use super::App;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.roster.is_empty());
        assert!(app.nav.is_at_root());
        assert_eq!(app.nav.root_menu().highlight(), 0);
    }

    #[test]
    fn test_from_config_uses_id_scheme() {
        let config = GradebookConfig {
            roster: RosterConfig {
                id_scheme: Some(IdScheme::Monotonic),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &Default::default(), &mut Diagnostics::default());
        let app = App::from_config(&resolved);
        assert_eq!(app.roster.id_scheme(), IdScheme::Monotonic);
    }
}
