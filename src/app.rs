//! Application state and core logic

use crate::config::AppConfig;
use crate::platform::has_shortcut_modifier;
use crate::state::{
    field, CommittedStore, FieldName, FormButton, FormController, FormFocus, SubmitOutcome,
};
use crate::submission::{Completion, SimulatedEndpoint, SubmissionEndpoint, SubmissionExecutor};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Form state and submission orchestration
    pub controller: FormController,
    /// Keyboard focus within the form
    pub focus: FormFocus,
    /// One-line notice shown under the form (last submission outcome)
    pub notice: Option<String>,
    /// Frame counter driving the pending spinner
    pub tick: usize,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from the loaded configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = match config.committed_path() {
            Some(path) => CommittedStore::load_or_default(path),
            None => CommittedStore::new(),
        };
        if let Some(path) = store.path() {
            tracing::info!("Committed values mirrored to {}", path.display());
        }

        let simulated = SimulatedEndpoint::new(config.submit_delay());
        tracing::info!(delay_ms = simulated.delay().as_millis() as u64, "Using simulated endpoint");
        let endpoint: Arc<dyn SubmissionEndpoint> = Arc::new(simulated);
        Ok(Self::with_parts(store, endpoint))
    }

    /// Assemble an App from an explicit store and endpoint
    pub fn with_parts(store: CommittedStore, endpoint: Arc<dyn SubmissionEndpoint>) -> Self {
        Self {
            controller: FormController::new(store, SubmissionExecutor::new(endpoint)),
            focus: FormFocus::default(),
            notice: None,
            tick: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Per-frame update: pick up finished submissions and advance the spinner
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(completion) = self.controller.poll_submission() {
            self.notice = Some(completion_notice(&completion));
        }
    }

    /// Submit if the status directive allows it
    pub fn submit_form(&mut self) {
        if !self.controller.status().submit_enabled {
            return;
        }
        self.notice = None;
        match self.controller.submit() {
            SubmitOutcome::Started(id) => tracing::debug!(%id, "Submit started from UI"),
            SubmitOutcome::Invalid(count) => tracing::debug!(count, "Submit blocked"),
            SubmitOutcome::Busy => {}
        }
    }

    /// Reset if the status directive allows it
    pub fn reset_form(&mut self) {
        if !self.controller.status().reset_enabled {
            return;
        }
        self.notice = None;
        self.controller.reset();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error overlay is modal
        if self.controller.is_error_detail_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.close_error_detail();
            }
            return Ok(());
        }

        if has_shortcut_modifier(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit_form(),
                KeyCode::Char('r') => self.reset_form(),
                KeyCode::Char('e') => self.controller.open_error_detail(),
                KeyCode::Char('q') => self.request_quit(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.prev(),
            _ => match self.focus.active_field() {
                Some(active) => self.handle_field_key(active, key),
                None => self.handle_buttons_key(key),
            },
        }
        Ok(())
    }

    fn handle_field_key(&mut self, active: FieldName, key: KeyEvent) {
        let values = self.controller.values();
        let edit = match key.code {
            KeyCode::Char(c) if active.is_text() => field::push_char(values, active, c),
            KeyCode::Backspace => field::pop_char(values, active),
            KeyCode::Left => field::cycle(values, active, false),
            KeyCode::Right | KeyCode::Char(' ') => field::cycle(values, active, true),
            KeyCode::Enter if !active.is_text() => field::cycle(values, active, true),
            KeyCode::Enter => {
                self.focus.next();
                None
            }
            _ => None,
        };
        if let Some(edit) = edit {
            self.controller.edit(edit);
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.focus.switch_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus.selected_button {
                FormButton::Submit => self.submit_form(),
                FormButton::Reset => self.reset_form(),
            },
            _ => {}
        }
    }
}

/// Notice text for a finished submission
fn completion_notice(completion: &Completion) -> String {
    match completion {
        Completion::Succeeded(_) => "Form submitted successfully!".to_string(),
        Completion::Failed(error) => format!("API Error: {error}"),
    }
}
