//! # Actions
//!
//! Everything that can happen in the roster becomes an `Action`.
//! Operator presses Enter on a menu? That's `Action::Key(Key::Confirm)`.
//! Operator finishes typing a grade? That's `Action::SubmitInteger(87)`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and tells the caller whether to keep going.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Each frame handler only *decides* where to go next (a `Transition`);
//! the navigation stack is touched in one place, `apply`.

use log::{debug, error, info, warn};

use crate::core::nav::form::StudentForm;
use crate::core::nav::menu::{
    DisplayOption, MainOption, Menu, SearchMissOption, SortedOption, ViewOption, wrap_down,
    wrap_up,
};
use crate::core::nav::{DisplayFrame, Frame, Navigator, SearchFrame};
use crate::core::roster::{Roster, RosterError};
use crate::core::search::{SearchOutcome, search};
use crate::core::sort::{SortKey, sort};
use crate::core::state::App;

const NO_STUDENTS: &str = "No registered students.";

/// A key press, already classified by the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    /// Enter.
    Confirm,
    /// `q` / `Q`.
    Cancel,
    /// `y` / `Y`.
    Yes,
    /// `n` / `N`.
    No,
    /// Page Up, scrolls a record table.
    ScrollUp,
    /// Page Down.
    ScrollDown,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    /// A completed line of free text.
    SubmitText(String),
    /// A completed line that already parsed as an integer.
    SubmitInteger(i32),
    /// Ctrl+C: leave from anywhere.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

#[derive(Debug)]
enum Transition {
    Stay,
    Push(Frame),
    Pop,
    Replace(Frame),
    Root,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    let transition = match action {
        Action::Quit => Transition::Quit,
        Action::Key(key) => on_key(app, key),
        Action::SubmitText(text) => on_text(app, text),
        Action::SubmitInteger(value) => on_integer(app, value),
    };
    apply(&mut app.nav, transition)
}

fn apply(nav: &mut Navigator, transition: Transition) -> Effect {
    match transition {
        Transition::Stay => {}
        Transition::Push(frame) => nav.push(frame),
        Transition::Pop => {
            nav.pop();
        }
        Transition::Replace(frame) => nav.replace(frame),
        Transition::Root => nav.return_to_root(),
        Transition::Quit => {
            info!("Exit requested");
            return Effect::Quit;
        }
    }
    Effect::None
}

/// A position the navigator itself offered no longer exists.
fn fault(err: RosterError) -> Transition {
    error!("Navigation referenced a stale position: {err}");
    Transition::Root
}

// ============================================================================
// Keys
// ============================================================================

fn on_key(app: &mut App, key: Key) -> Transition {
    let App { roster, nav } = app;

    if nav.prompt().is_some() {
        debug!("Key {:?} ignored while a line is expected", key);
        return Transition::Stay;
    }

    if nav.is_at_root() {
        return on_root_key(roster, nav.root_menu_mut(), key);
    }

    let Some(frame) = nav.active_mut() else {
        return Transition::Stay;
    };

    match frame {
        Frame::View(menu) => match menu.handle_key(key) {
            Some(ViewOption::DisplayAll) => Transition::Push(Frame::Display(DisplayFrame::new(
                "Student List",
                roster.all().to_vec(),
            ))),
            Some(ViewOption::DisplaySorted) => Transition::Push(Frame::sorted()),
            Some(ViewOption::Search) => Transition::Push(Frame::Search(SearchFrame::Prompt)),
            Some(ViewOption::Return) => Transition::Pop,
            None => Transition::Stay,
        },
        Frame::Sorted { menu, order } => {
            let sort_key = match menu.handle_key(key) {
                Some(SortedOption::ToggleOrder) => {
                    *order = order.toggled();
                    debug!("Sort order now {}", order.label());
                    return Transition::Stay;
                }
                Some(SortedOption::GoBack) => return Transition::Pop,
                Some(SortedOption::ByName) => SortKey::Name,
                Some(SortedOption::ByNumber) => SortKey::StudentNumber,
                Some(SortedOption::ByTotalScore) => SortKey::TotalScore,
                None => return Transition::Stay,
            };
            sort(roster, sort_key, *order);
            Transition::Push(Frame::Display(DisplayFrame::new(
                "Sorted Output",
                roster.all().to_vec(),
            )))
        }
        Frame::Display(display) => match key {
            Key::ScrollUp => {
                display.scroll_up();
                Transition::Stay
            }
            Key::ScrollDown => {
                display.scroll_down();
                Transition::Stay
            }
            key => match display.menu.handle_key(key) {
                Some(DisplayOption::GoBack) => Transition::Pop,
                Some(DisplayOption::MainMenu) => Transition::Root,
                None => Transition::Stay,
            },
        },
        Frame::Search(SearchFrame::Miss { menu, .. }) => match menu.handle_key(key) {
            Some(SearchMissOption::SearchAgain) => {
                Transition::Replace(Frame::Search(SearchFrame::Prompt))
            }
            Some(SearchMissOption::ReturnToView) => Transition::Pop,
            Some(SearchMissOption::MainMenu) => Transition::Root,
            None => Transition::Stay,
        },
        Frame::Modify { highlight } => {
            let len = roster.len();
            if len == 0 {
                return Transition::Pop;
            }
            match key {
                Key::Up => *highlight = wrap_up(*highlight, len),
                Key::Down => *highlight = wrap_down(*highlight, len),
                Key::Confirm => {
                    return match roster.get(*highlight) {
                        Some(student) => Transition::Push(Frame::Edit {
                            position: *highlight,
                            form: StudentForm::edit(student.fields()),
                        }),
                        None => fault(RosterError::NotFound {
                            position: *highlight,
                            len,
                        }),
                    };
                }
                Key::Cancel => return Transition::Pop,
                _ => {}
            }
            Transition::Stay
        }
        Frame::Delete {
            highlight,
            confirming,
        } => on_delete_key(roster, highlight, confirming, key),
        Frame::Notice(_) => Transition::Pop,
        // Waiting on lines; keys were filtered above.
        Frame::Register(_) | Frame::Edit { .. } | Frame::Search(SearchFrame::Prompt) => {
            Transition::Stay
        }
    }
}

fn on_root_key(roster: &Roster, menu: &mut Menu<MainOption>, key: Key) -> Transition {
    match menu.handle_key(key) {
        Some(MainOption::Register) if roster.is_full() => {
            warn!("Registration refused: roster full");
            Transition::Push(Frame::notice(
                "Student Registration",
                capacity_message(roster.capacity()),
            ))
        }
        Some(MainOption::Register) => Transition::Push(Frame::Register(StudentForm::registration())),
        Some(MainOption::View) => Transition::Push(Frame::View(Menu::new())),
        Some(MainOption::Modify) if roster.is_empty() => {
            Transition::Push(Frame::notice("Modify Student Info", NO_STUDENTS))
        }
        Some(MainOption::Modify) => Transition::Push(Frame::Modify { highlight: 0 }),
        Some(MainOption::Delete) if roster.is_empty() => {
            Transition::Push(Frame::notice("Delete Student", NO_STUDENTS))
        }
        Some(MainOption::Delete) => Transition::Push(Frame::Delete {
            highlight: 0,
            confirming: false,
        }),
        Some(MainOption::Exit) => Transition::Quit,
        None => Transition::Stay,
    }
}

fn on_delete_key(
    roster: &mut Roster,
    highlight: &mut usize,
    confirming: &mut bool,
    key: Key,
) -> Transition {
    let len = roster.len();
    if len == 0 {
        return Transition::Pop;
    }

    if *confirming {
        return match key {
            Key::Yes => match roster.delete_at(*highlight) {
                Ok(_) => Transition::Replace(Frame::notice("Delete Student", "Deletion completed!")),
                Err(err) => fault(err),
            },
            Key::No | Key::Cancel => {
                info!("Deletion cancelled");
                Transition::Pop
            }
            _ => Transition::Stay,
        };
    }

    match key {
        Key::Up => *highlight = wrap_up(*highlight, len),
        Key::Down => *highlight = wrap_down(*highlight, len),
        Key::Confirm => *confirming = true,
        Key::Cancel => return Transition::Pop,
        _ => {}
    }
    Transition::Stay
}

fn capacity_message(capacity: usize) -> String {
    format!("The roster is full ({capacity} students). Registration refused.")
}

// ============================================================================
// Lines
// ============================================================================

fn on_text(app: &mut App, text: String) -> Transition {
    let App { roster, nav } = app;
    match nav.active_mut() {
        Some(Frame::Register(form)) | Some(Frame::Edit { form, .. }) => {
            if !form.submit_text(text) {
                debug!("Text submitted while the form expects an integer");
                return Transition::Stay;
            }
        }
        Some(Frame::Search(SearchFrame::Prompt)) => {
            return match search(roster, &text) {
                SearchOutcome::Matches(found) => {
                    Transition::Replace(Frame::Display(DisplayFrame::new("Search Results", found)))
                }
                outcome => Transition::Replace(Frame::Search(SearchFrame::Miss {
                    outcome,
                    menu: Menu::new(),
                })),
            };
        }
        _ => {
            debug!("Text submitted with no prompt active");
            return Transition::Stay;
        }
    }
    finish_form(app)
}

fn on_integer(app: &mut App, value: i32) -> Transition {
    match app.nav.active_mut() {
        Some(Frame::Register(form)) | Some(Frame::Edit { form, .. }) => {
            if !form.submit_integer(value) {
                debug!("Integer submitted while the form expects text");
                return Transition::Stay;
            }
        }
        _ => {
            debug!("Integer submitted with no integer prompt active");
            return Transition::Stay;
        }
    }
    finish_form(app)
}

/// Write a completed form back to the roster.
fn finish_form(app: &mut App) -> Transition {
    let App { roster, nav } = app;
    match nav.active() {
        Some(Frame::Register(form)) => {
            let Some(fields) = form.finish() else {
                return Transition::Stay;
            };
            match roster.insert(fields) {
                Ok(_) => Transition::Replace(Frame::notice(
                    "Student Registration",
                    "Student registration completed!",
                )),
                Err(err @ RosterError::CapacityExceeded { .. }) => {
                    warn!("Registration refused: {err}");
                    Transition::Replace(Frame::notice(
                        "Student Registration",
                        capacity_message(roster.capacity()),
                    ))
                }
                Err(err) => fault(err),
            }
        }
        Some(Frame::Edit { position, form }) => {
            let Some(fields) = form.finish() else {
                return Transition::Stay;
            };
            match roster.update(*position, fields) {
                Ok(()) => Transition::Replace(Frame::notice(
                    "Edit Student Information",
                    "Modification completed!",
                )),
                Err(err) => fault(err),
            }
        }
        _ => Transition::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roster::CAPACITY;
    use crate::core::sort::SortOrder;
    use crate::test_support::{fields, test_app, test_app_with};

    fn key(app: &mut App, k: Key) -> Effect {
        update(app, Action::Key(k))
    }

    /// Move the root (or active) menu highlight to `index` and confirm.
    fn choose(app: &mut App, index: usize) {
        for _ in 0..index {
            key(app, Key::Down);
        }
        key(app, Key::Confirm);
    }

    fn register(app: &mut App, number: i32, name: &str, grades: [i32; 5]) {
        choose(app, 0);
        update(app, Action::SubmitInteger(number));
        update(app, Action::SubmitText(name.to_string()));
        for g in grades {
            update(app, Action::SubmitInteger(g));
        }
        // Acknowledge the completion notice.
        key(app, Key::Other);
    }

    fn active_name(app: &App) -> Option<&'static str> {
        app.nav.active().map(Frame::name)
    }

    #[test]
    fn test_exit_quits() {
        let mut app = test_app();
        key(&mut app, Key::Up);
        assert_eq!(key(&mut app, Key::Confirm), Effect::Quit);
    }

    #[test]
    fn test_force_quit_from_anywhere() {
        let mut app = test_app();
        choose(&mut app, 0);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_registration_flow() {
        let mut app = test_app();
        choose(&mut app, 0);
        assert_eq!(active_name(&app), Some("Register"));
        assert_eq!(app.nav.prompt().unwrap().label, "Student Number: ");

        update(&mut app, Action::SubmitInteger(1001));
        update(&mut app, Action::SubmitText("Ann".to_string()));
        for g in [95, 85, 75, 65, 55] {
            update(&mut app, Action::SubmitInteger(g));
        }

        match app.nav.active() {
            Some(Frame::Notice(notice)) => {
                assert_eq!(notice.message, "Student registration completed!")
            }
            other => panic!("expected notice, got {other:?}"),
        }
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster.all()[0].total_score(), 375);

        key(&mut app, Key::Other);
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_keys_ignored_while_prompting() {
        let mut app = test_app();
        choose(&mut app, 0);
        key(&mut app, Key::Cancel);
        key(&mut app, Key::Confirm);
        assert_eq!(active_name(&app), Some("Register"));
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_register_when_full_shows_notice() {
        let students: Vec<_> = (0..CAPACITY as i32).map(|i| fields(i, "S", [0; 5])).collect();
        let mut app = test_app_with(&students);
        choose(&mut app, 0);
        match app.nav.active() {
            Some(Frame::Notice(notice)) => assert!(notice.message.contains("full")),
            other => panic!("expected capacity notice, got {other:?}"),
        }
        assert_eq!(app.roster.len(), CAPACITY);
        key(&mut app, Key::Confirm);
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_insert_failure_at_finish_is_surfaced() {
        let mut app = test_app();
        choose(&mut app, 0);
        // Fill the roster behind the open form.
        for i in 0..CAPACITY as i32 {
            app.roster.insert(fields(i, "S", [0; 5])).unwrap();
        }
        update(&mut app, Action::SubmitInteger(1));
        update(&mut app, Action::SubmitText("Late".to_string()));
        for _ in 0..5 {
            update(&mut app, Action::SubmitInteger(1));
        }
        match app.nav.active() {
            Some(Frame::Notice(notice)) => assert!(notice.message.contains("Registration refused")),
            other => panic!("expected capacity notice, got {other:?}"),
        }
        assert_eq!(app.roster.len(), CAPACITY);
    }

    #[test]
    fn test_display_all_and_go_back() {
        let mut app = test_app_with(&[fields(1, "Ann", [90; 5])]);
        choose(&mut app, 1); // View
        choose(&mut app, 0); // Display All
        match app.nav.active() {
            Some(Frame::Display(display)) => assert_eq!(display.records.len(), 1),
            other => panic!("expected display, got {other:?}"),
        }
        key(&mut app, Key::Confirm); // Go Back
        assert_eq!(active_name(&app), Some("View"));
    }

    #[test]
    fn test_display_scrolls_without_moving_the_menu() {
        let records: Vec<_> = (1..=4).map(|n| fields(n, "S", [0; 5])).collect();
        let mut app = test_app_with(&records);
        choose(&mut app, 1);
        key(&mut app, Key::Confirm); // Display All
        key(&mut app, Key::ScrollDown);
        key(&mut app, Key::ScrollDown);
        key(&mut app, Key::ScrollUp);
        match app.nav.active() {
            Some(Frame::Display(display)) => {
                assert_eq!(display.offset, 1);
                assert_eq!(display.menu.highlight(), 0);
            }
            other => panic!("expected display, got {other:?}"),
        }

        // Go Back still works, and a fresh display starts at the top.
        key(&mut app, Key::Confirm);
        key(&mut app, Key::Confirm);
        match app.nav.active() {
            Some(Frame::Display(display)) => assert_eq!(display.offset, 0),
            other => panic!("expected display, got {other:?}"),
        }
    }

    #[test]
    fn test_display_handles_empty_roster() {
        let mut app = test_app();
        choose(&mut app, 1);
        choose(&mut app, 0);
        match app.nav.active() {
            Some(Frame::Display(display)) => assert!(display.records.is_empty()),
            other => panic!("expected display, got {other:?}"),
        }
        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm);
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_sorted_output_sorts_then_displays() {
        let mut app = test_app_with(&[
            fields(3, "c", [0; 5]),
            fields(1, "a", [0; 5]),
            fields(2, "b", [0; 5]),
        ]);
        choose(&mut app, 1); // View
        choose(&mut app, 1); // Display Sorted
        assert_eq!(active_name(&app), Some("Sorted"));

        // Highlight starts on "Sort by Name"; toggle order first.
        key(&mut app, Key::Up);
        key(&mut app, Key::Confirm);
        match app.nav.active() {
            Some(Frame::Sorted { order, .. }) => assert_eq!(*order, SortOrder::Descending),
            other => panic!("expected sorted, got {other:?}"),
        }
        key(&mut app, Key::Down);
        key(&mut app, Key::Down); // Sort by Student Number
        key(&mut app, Key::Confirm);

        let numbers: Vec<i32> = app.roster.all().iter().map(|s| s.student_number).collect();
        assert_eq!(numbers, [3, 2, 1]);
        assert_eq!(active_name(&app), Some("Display"));
        assert_eq!(app.nav.depth(), 3);

        key(&mut app, Key::Confirm); // Go Back
        assert_eq!(active_name(&app), Some("Sorted"));
    }

    #[test]
    fn test_main_menu_from_sorted_display_is_one_step() {
        let mut app = test_app_with(&[fields(1, "a", [0; 5])]);
        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm); // View (root highlight now 1)
        choose(&mut app, 1); // Sorted
        key(&mut app, Key::Confirm); // Sort by Name -> Display
        assert_eq!(app.nav.depth(), 3);

        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm); // Return to Main Menu
        assert!(app.nav.is_at_root());
        assert_eq!(app.nav.depth(), 0);
        assert_eq!(app.nav.root_menu().highlight(), 0);
    }

    #[test]
    fn test_pop_to_root_keeps_root_highlight() {
        let mut app = test_app();
        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm); // View
        for _ in 0..3 {
            key(&mut app, Key::Down);
        }
        key(&mut app, Key::Confirm); // Return to Menu
        assert!(app.nav.is_at_root());
        assert_eq!(app.nav.root_menu().highlighted(), MainOption::View);
    }

    #[test]
    fn test_search_hit_replaces_search_frame() {
        let mut app = test_app_with(&[fields(1, "Kim", [0; 5]), fields(2, "Lee", [0; 5])]);
        choose(&mut app, 1);
        choose(&mut app, 2);
        assert_eq!(app.nav.prompt().unwrap().label, "Enter Name: ");
        update(&mut app, Action::SubmitText("Lee".to_string()));

        match app.nav.active() {
            Some(Frame::Display(display)) => {
                assert_eq!(display.records.len(), 1);
                assert_eq!(display.records[0].name, "Lee");
            }
            other => panic!("expected display, got {other:?}"),
        }
        assert_eq!(app.nav.depth(), 2);
        key(&mut app, Key::Confirm); // Go Back lands on View, not Search
        assert_eq!(active_name(&app), Some("View"));
    }

    #[test]
    fn test_search_miss_options() {
        let mut app = test_app_with(&[fields(1, "Kim", [0; 5])]);
        choose(&mut app, 1);
        choose(&mut app, 2);
        update(&mut app, Action::SubmitText("Park".to_string()));
        match app.nav.active() {
            Some(Frame::Search(miss)) => {
                assert_eq!(miss.miss_message(), Some("No students found with that name."))
            }
            other => panic!("expected search miss, got {other:?}"),
        }

        // Search Again
        key(&mut app, Key::Confirm);
        assert!(app.nav.prompt().is_some());

        update(&mut app, Action::SubmitText("Park".to_string()));
        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm); // Return to View
        assert_eq!(active_name(&app), Some("View"));

        choose(&mut app, 0); // View menu highlight is still on Search
        update(&mut app, Action::SubmitText("Park".to_string()));
        key(&mut app, Key::Up);
        key(&mut app, Key::Confirm); // Return to Menu (wrapped)
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_search_on_empty_roster_reports_no_students() {
        let mut app = test_app();
        choose(&mut app, 1);
        choose(&mut app, 2);
        update(&mut app, Action::SubmitText("Anyone".to_string()));
        match app.nav.active() {
            Some(Frame::Search(miss)) => {
                assert_eq!(miss.miss_message(), Some("No registered students."))
            }
            other => panic!("expected search miss, got {other:?}"),
        }
    }

    #[test]
    fn test_modify_empty_roster_notice() {
        let mut app = test_app();
        choose(&mut app, 2);
        match app.nav.active() {
            Some(Frame::Notice(notice)) => assert_eq!(notice.message, NO_STUDENTS),
            other => panic!("expected notice, got {other:?}"),
        }
        key(&mut app, Key::Confirm);
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_modify_edits_highlighted_record() {
        let mut app = test_app_with(&[fields(1, "A", [0; 5]), fields(2, "B", [0; 5])]);
        choose(&mut app, 2);
        key(&mut app, Key::Up); // wraps to B
        key(&mut app, Key::Confirm);
        assert_eq!(active_name(&app), Some("Edit"));
        assert_eq!(app.nav.prompt().unwrap().label, "New Student Number: ");

        update(&mut app, Action::SubmitInteger(20));
        update(&mut app, Action::SubmitText("Bee".to_string()));
        for g in [90, 80, 70, 60, 50] {
            update(&mut app, Action::SubmitInteger(g));
        }
        key(&mut app, Key::Confirm); // acknowledge

        match app.nav.active() {
            Some(Frame::Modify { highlight }) => assert_eq!(*highlight, 1),
            other => panic!("expected modify list, got {other:?}"),
        }
        let edited = &app.roster.all()[1];
        assert_eq!(edited.id(), 2);
        assert_eq!(edited.name, "Bee");
        assert_eq!(edited.letter_grades(), &['A', 'B', 'C', 'D', 'F']);
        assert_eq!(edited.total_score(), 350);

        key(&mut app, Key::Cancel);
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_delete_empty_roster_notice() {
        let mut app = test_app();
        choose(&mut app, 3);
        match app.nav.active() {
            Some(Frame::Notice(notice)) => {
                assert_eq!(notice.title, "Delete Student");
                assert_eq!(notice.message, NO_STUDENTS);
            }
            other => panic!("expected notice, got {other:?}"),
        }
        assert!(app.nav.prompt().is_none());

        key(&mut app, Key::Other);
        assert!(app.nav.is_at_root());
        assert_eq!(app.roster.len(), 0);
    }

    #[test]
    fn test_delete_confirm_yes() {
        let mut app = test_app_with(&[
            fields(1, "A", [0; 5]),
            fields(2, "B", [0; 5]),
            fields(3, "C", [0; 5]),
        ]);
        choose(&mut app, 3);
        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm);
        // Unrelated keys do not answer the question.
        key(&mut app, Key::Other);
        key(&mut app, Key::Confirm);
        assert_eq!(app.roster.len(), 3);

        key(&mut app, Key::Yes);
        match app.nav.active() {
            Some(Frame::Notice(notice)) => assert_eq!(notice.message, "Deletion completed!"),
            other => panic!("expected notice, got {other:?}"),
        }
        let names: Vec<&str> = app.roster.all().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
        key(&mut app, Key::Confirm);
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_delete_confirm_no_and_cancel() {
        let mut app = test_app_with(&[fields(1, "A", [0; 5])]);
        choose(&mut app, 3);
        key(&mut app, Key::Confirm);
        key(&mut app, Key::No);
        assert!(app.nav.is_at_root());
        assert_eq!(app.roster.len(), 1);

        choose(&mut app, 0); // root highlight still on Delete
        key(&mut app, Key::Confirm);
        key(&mut app, Key::Cancel);
        assert!(app.nav.is_at_root());
        assert_eq!(app.roster.len(), 1);

        choose(&mut app, 0);
        key(&mut app, Key::Cancel); // quit the list itself
        assert!(app.nav.is_at_root());
    }

    #[test]
    fn test_delete_then_register_reuses_count_id() {
        let mut app = test_app();
        for name in ["A", "B", "C"] {
            register(&mut app, 0, name, [0; 5]);
        }
        choose(&mut app, 3);
        key(&mut app, Key::Down);
        key(&mut app, Key::Confirm);
        key(&mut app, Key::Yes);
        key(&mut app, Key::Other);
        assert_eq!(app.roster.len(), 2);

        // The notice popped back to a root still highlighting Delete;
        // two steps down wrap around to Register.
        assert_eq!(app.nav.root_menu().highlighted(), MainOption::Delete);
        key(&mut app, Key::Down);
        key(&mut app, Key::Down);
        assert_eq!(app.nav.root_menu().highlighted(), MainOption::Register);
        register(&mut app, 0, "D", [0; 5]);

        let ids: Vec<u32> = app.roster.all().iter().map(|s| s.id()).collect();
        assert_eq!(ids, [1, 3, 3]);
    }

    #[test]
    fn test_text_without_prompt_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SubmitText("x".into())), Effect::None);
        assert_eq!(update(&mut app, Action::SubmitInteger(3)), Effect::None);
        assert!(app.nav.is_at_root());
    }
}
