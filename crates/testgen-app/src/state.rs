//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::form::FormState;
use crate::request_tracker::{RequestId, RequestTracker};

/// Which part of the form receives key input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Requirements,
    TestType,
    GenerateButton,
    Result,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Requirements,
        Focus::TestType,
        Focus::GenerateButton,
        Focus::Result,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// How the most recent settled request ended.
///
/// Stale responses never produce an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Succeeded {
        request_id: RequestId,
        elapsed_ms: u64,
        completed_at: DateTime<Local>,
    },
    Failed {
        request_id: RequestId,
        message: String,
        completed_at: DateTime<Local>,
    },
    Cancelled {
        request_id: RequestId,
    },
}

impl GenerationOutcome {
    pub fn request_id(&self) -> RequestId {
        match self {
            GenerationOutcome::Succeeded { request_id, .. }
            | GenerationOutcome::Failed { request_id, .. }
            | GenerationOutcome::Cancelled { request_id } => *request_id,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failed { .. })
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub form: FormState,

    /// Sequencing of outbound requests
    pub requests: RequestTracker,

    /// When the pending request was submitted (for the elapsed display)
    pub pending_since: Option<DateTime<Local>>,

    pub last_outcome: Option<GenerationOutcome>,

    pub focus: Focus,

    /// First visible line of the result pane
    pub result_scroll: u16,

    pub settings: Settings,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            form: FormState::with_test_type(settings.form.default_test_type),
            requests: RequestTracker::new(),
            pending_since: None,
            last_outcome: None,
            focus: Focus::default(),
            result_scroll: 0,
            settings,
            quitting: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// A request is in flight whose response would still be applied
    pub fn is_generating(&self) -> bool {
        self.requests.is_pending()
    }

    /// Number of lines in the generated code (for scroll clamping)
    pub fn result_line_count(&self) -> u16 {
        let lines = self.form.generated_code().lines().count();
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}
