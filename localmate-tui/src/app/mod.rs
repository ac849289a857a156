use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use localmate_api::domain::Task;
use std::time::{Duration, Instant};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::i18n::{self, Lang};

mod state;
pub mod tasks;
pub mod timer;

pub use state::{
    AddTaskField, AddTaskForm, DeleteContext, Notification, NotificationKind, Pane, TextInput,
    View,
};
pub use timer::{format_remaining, CountdownTimer, RunningTimer, StartError};

use tasks::Buckets;

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);
const FLASH_DURATION: Duration = Duration::from_millis(1200);

const DUE_INPUT_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]");

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub lang: Lang,

    // Task buckets, recomputed from a fresh fetch on every reload
    pub buckets: Buckets,
    pub focused_pane: Pane,
    pub today_index: usize,
    pub pending_index: usize,

    // Add-task form
    pub add_task_form: AddTaskForm,

    // Delete confirmation
    pub delete_context: Option<DeleteContext>,

    // Countdown timer
    pub timer: CountdownTimer,
    pub selector_tasks: Vec<Task>, // incomplete tasks offered to the countdown
    pub selector_search: TextInput,
    pub filtered_selector: Vec<Task>,
    pub selector_index: usize,
    pub duration_input: TextInput,
    pub duration_focused: bool,
    pub selected_total: Option<u32>, // aggregated minutes for the selected task
    pub flash_until: Option<Instant>, // completion visual cue

    // Feedback
    pub notification: Option<Notification>,
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(lang: Lang) -> Self {
        Self {
            running: true,
            current_view: View::Tasks,
            lang,
            buckets: Buckets::default(),
            focused_pane: Pane::Today,
            today_index: 0,
            pending_index: 0,
            add_task_form: AddTaskForm::new(&default_due_input()),
            delete_context: None,
            timer: CountdownTimer::default(),
            selector_tasks: Vec::new(),
            selector_search: TextInput::new(),
            filtered_selector: Vec::new(),
            selector_index: 0,
            duration_input: TextInput::new(),
            duration_focused: false,
            selected_total: None,
            flash_until: None,
            notification: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn text(&self, key: &str) -> String {
        i18n::lookup(self.lang, key).to_string()
    }

    pub fn notify_success(&mut self, message: String) {
        self.notification = Some(Notification {
            message,
            kind: NotificationKind::Success,
            shown_at: Instant::now(),
        });
    }

    pub fn notify_error(&mut self, message: String) {
        self.notification = Some(Notification {
            message,
            kind: NotificationKind::Error,
            shown_at: Instant::now(),
        });
    }

    pub fn expire_notification(&mut self, now: Instant) {
        if let Some(n) = &self.notification {
            if now.duration_since(n.shown_at) >= NOTIFICATION_TTL {
                self.notification = None;
            }
        }
    }

    /// Replace the task buckets and the timer selector from a fresh fetch.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.selector_tasks = tasks.iter().filter(|t| !t.is_completed).cloned().collect();
        self.buckets = tasks::partition(tasks, tasks::local_today());
        self.clamp_selection();
        self.filter_selector();
    }

    pub fn visible_tasks(&self, pane: Pane) -> &[Task] {
        match pane {
            Pane::Today => &self.buckets.today,
            Pane::Pending => &self.buckets.pending,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let (list, index) = match self.focused_pane {
            Pane::Today => (&self.buckets.today, self.today_index),
            Pane::Pending => (&self.buckets.pending, self.pending_index),
        };
        list.get(index)
    }

    pub fn toggle_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Today => Pane::Pending,
            Pane::Pending => Pane::Today,
        };
    }

    pub fn selection_up(&mut self) {
        let index = match self.focused_pane {
            Pane::Today => &mut self.today_index,
            Pane::Pending => &mut self.pending_index,
        };
        *index = index.saturating_sub(1);
    }

    pub fn selection_down(&mut self) {
        let (len, index) = match self.focused_pane {
            Pane::Today => (self.buckets.today.len(), &mut self.today_index),
            Pane::Pending => (self.buckets.pending.len(), &mut self.pending_index),
        };
        if *index + 1 < len {
            *index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.today_index = self
            .today_index
            .min(self.buckets.today.len().saturating_sub(1));
        self.pending_index = self
            .pending_index
            .min(self.buckets.pending.len().saturating_sub(1));
    }

    /// Rebuild the fuzzy-filtered selector list from the current search input.
    pub fn filter_selector(&mut self) {
        let query = self.selector_search.value.trim();
        if query.is_empty() {
            self.filtered_selector = self.selector_tasks.clone();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, Task)> = self
                .selector_tasks
                .iter()
                .filter_map(|t| matcher.fuzzy_match(&t.title, query).map(|s| (s, t.clone())))
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.filtered_selector = scored.into_iter().map(|(_, t)| t).collect();
        }
        self.selector_index = self
            .selector_index
            .min(self.filtered_selector.len().saturating_sub(1));
    }

    pub fn selector_selected(&self) -> Option<&Task> {
        self.filtered_selector.get(self.selector_index)
    }

    pub fn selector_up(&mut self) {
        self.selector_index = self.selector_index.saturating_sub(1);
    }

    pub fn selector_down(&mut self) {
        if self.selector_index + 1 < self.filtered_selector.len() {
            self.selector_index += 1;
        }
    }

    /// Reset the timer inputs after a stop or completion. TimerState itself
    /// is cleared by the countdown component.
    pub fn reset_timer_inputs(&mut self) {
        self.duration_input.clear();
        self.duration_focused = false;
    }

    pub fn start_flash(&mut self) {
        self.flash_until = Some(Instant::now() + FLASH_DURATION);
    }

    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    /// Duration field parsed as whole minutes; None when empty or malformed.
    pub fn parsed_duration(&self) -> Option<u32> {
        self.duration_input.value.trim().parse::<u32>().ok()
    }
}

/// Default due-date text for the add-task form: now, in local time.
pub fn default_due_input() -> String {
    let now = OffsetDateTime::now_utc()
        .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC));
    PrimitiveDateTime::new(now.date(), now.time())
        .format(&DUE_INPUT_FORMAT)
        .unwrap_or_default()
}

/// Parse the add-task due field ("YYYY-MM-DD HH:MM", local time).
pub fn parse_due_input(input: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(input.trim(), &DUE_INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn task(id: i64, title: &str, is_completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            due_date: datetime!(2099-01-01 10:00:00),
            is_completed,
        }
    }

    #[test]
    fn selector_only_offers_incomplete_tasks() {
        let mut app = App::new(Lang::En);
        app.set_tasks(vec![
            task(1, "Read chapter 4", false),
            task(2, "Done already", true),
            task(3, "Write summary", false),
        ]);
        let ids: Vec<i64> = app.selector_tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn selector_search_filters_by_fuzzy_title() {
        let mut app = App::new(Lang::En);
        app.set_tasks(vec![
            task(1, "Read chapter 4", false),
            task(2, "Write summary", false),
        ]);
        app.selector_search = TextInput::from_str("sum");
        app.filter_selector();
        assert_eq!(app.filtered_selector.len(), 1);
        assert_eq!(app.filtered_selector[0].id, 2);
    }

    #[test]
    fn parse_due_input_round_trips() {
        let parsed = parse_due_input("2025-03-10 09:30").unwrap();
        assert_eq!(parsed, datetime!(2025-03-10 09:30:00));
        assert!(parse_due_input("not a date").is_none());
        assert!(parse_due_input("").is_none());
    }

    #[test]
    fn notification_expires_after_ttl() {
        let mut app = App::new(Lang::En);
        app.notify_success("saved".to_string());
        let shown_at = app.notification.as_ref().unwrap().shown_at;

        app.expire_notification(shown_at + Duration::from_secs(1));
        assert!(app.notification.is_some());

        app.expire_notification(shown_at + NOTIFICATION_TTL);
        assert!(app.notification.is_none());
    }

    #[test]
    fn parsed_duration_rejects_garbage() {
        let mut app = App::new(Lang::En);
        app.duration_input = TextInput::from_str("25");
        assert_eq!(app.parsed_duration(), Some(25));
        app.duration_input = TextInput::from_str("abc");
        assert_eq!(app.parsed_duration(), None);
        app.duration_input = TextInput::from_str("");
        assert_eq!(app.parsed_duration(), None);
    }
}
