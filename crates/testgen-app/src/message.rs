//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::request_tracker::RequestId;
use testgen_core::TestType;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (elapsed-time display)
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────
    /// Replace the requirements text verbatim
    SetRequirements(String),
    InsertChar(char),
    InsertNewline,
    /// Bracketed paste; appended to the requirements when that field has focus
    PasteText(String),
    /// Delete the character before the end of the text
    DeleteBackward,
    ClearRequirements,

    SetTestType(TestType),
    ToggleTestType,

    FocusNext,
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    /// Submit the current requirements and test type
    Submit,

    /// Abandon the pending request, if any
    CancelGeneration,

    /// The service answered request `request_id` with `code`
    GenerationCompleted {
        request_id: RequestId,
        code: String,
        elapsed_ms: u64,
    },

    /// Request `request_id` failed (transport, status or body)
    GenerationFailed { request_id: RequestId, error: String },

    // ─────────────────────────────────────────────────────────
    // Result Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollResultUp,
    ScrollResultDown,
    ScrollResultPageUp,
    ScrollResultPageDown,
    ScrollResultToTop,
}
