use std::time::{Duration, SystemTime};

use crate::git::BranchDetails;

/// One row offered to the selector.
#[derive(Debug, Clone)]
pub struct Choice {
    pub name: String,
    pub details: Option<BranchDetails>,
}

impl Choice {
    #[cfg(test)]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: None,
        }
    }
}

pub struct BranchItem {
    pub choice: Choice,
    pub selected: bool,
    pub age: Option<Duration>,
}

impl BranchItem {
    fn new(choice: Choice, now: SystemTime) -> Self {
        let age = choice.details.as_ref().and_then(|details| details.age(now));
        Self {
            choice,
            selected: false,
            age,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.choice.details.as_ref()?.summary.as_deref()
    }
}

pub struct App {
    title: String,
    branches: Vec<BranchItem>,
    cursor: usize,
    should_quit: bool,
    confirmed: bool,
    message: Option<String>,
}

impl App {
    pub fn new(title: impl Into<String>, choices: Vec<Choice>) -> Self {
        let now = SystemTime::now();
        let items = choices
            .into_iter()
            .map(|choice| BranchItem::new(choice, now))
            .collect();

        Self {
            title: title.into(),
            branches: items,
            cursor: 0,
            should_quit: false,
            confirmed: false,
            message: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn move_down(&mut self) {
        if self.branches.is_empty() {
            return;
        }
        self.clear_message();
        self.cursor = (self.cursor + 1).min(self.branches.len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.branches.is_empty() {
            return;
        }
        self.clear_message();
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(current) = self.branches.get_mut(self.cursor) {
            current.selected = !current.selected;
        }
    }

    pub fn toggle_all(&mut self) {
        let all_selected = self.branches.iter().all(|branch| branch.selected);
        for branch in &mut self.branches {
            branch.selected = !all_selected;
        }
    }

    pub fn cancel(&mut self) {
        self.should_quit = true;
    }

    /// Confirming with nothing selected is allowed and deletes nothing.
    pub fn confirm(&mut self) {
        self.confirmed = true;
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[BranchItem] {
        &self.branches
    }

    pub fn selected_count(&self) -> usize {
        self.branches
            .iter()
            .filter(|branch| branch.selected)
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.branches.len()
    }

    pub fn set_message<S: Into<String>>(&mut self, message: S) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The chosen names in list order; empty unless the user confirmed.
    pub fn selection(&self) -> Vec<String> {
        if !self.confirmed() {
            return Vec::new();
        }
        self.branches
            .iter()
            .filter(|branch| branch.selected)
            .map(|branch| branch.choice.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(names: &[&str]) -> App {
        App::new(
            "Select the local branches to delete:",
            names.iter().map(|name| Choice::plain(*name)).collect(),
        )
    }

    #[test]
    fn keeps_candidate_order() {
        let app = app(&["zeta", "alpha", "mid"]);
        let names: Vec<&str> = app.items().iter().map(|i| i.choice.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app(&["a", "b"]);
        app.move_up();
        assert_eq!(app.cursor(), 0);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn selection_follows_list_order() {
        let mut app = app(&["a", "b", "c"]);
        app.move_down();
        app.move_down();
        app.toggle_current();
        app.move_up();
        app.move_up();
        app.toggle_current();
        app.confirm();

        assert_eq!(app.selection(), vec!["a", "c"]);
        assert_eq!(app.selected_count(), 2);
    }

    #[test]
    fn toggle_all_flips_everything() {
        let mut app = app(&["a", "b"]);
        app.toggle_current();
        app.toggle_all();
        assert_eq!(app.selected_count(), 2);
        app.toggle_all();
        assert_eq!(app.selected_count(), 0);
    }

    #[test]
    fn cancel_yields_empty_selection() {
        let mut app = app(&["a", "b"]);
        app.toggle_all();
        app.cancel();

        assert!(app.should_quit());
        assert!(!app.confirmed());
        assert!(app.selection().is_empty());
    }

    #[test]
    fn confirm_with_nothing_selected_is_allowed() {
        let mut app = app(&["a"]);
        app.confirm();

        assert!(app.confirmed());
        assert!(app.selection().is_empty());
    }

    #[test]
    fn age_comes_from_details() {
        let choice = Choice {
            name: "old".into(),
            details: Some(BranchDetails {
                summary: Some("fix things".into()),
                commit_timestamp: Some(0),
            }),
        };
        let app = App::new("title", vec![choice, Choice::plain("bare")]);

        assert!(app.items()[0].age.is_some());
        assert_eq!(app.items()[0].summary(), Some("fix things"));
        assert!(app.items()[1].age.is_none());
        assert_eq!(app.items()[1].summary(), None);
    }
}
