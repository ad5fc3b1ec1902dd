//! Form state owned by the generation form
//!
//! Fields are private: requirements and test type change only through the
//! setters below, and generated code only through the result handler.

use testgen_client::GenerateRequest;
use testgen_core::TestType;

/// The three pieces of form state: requirements, test type, last generated code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    requirements: String,
    test_type: TestType,
    generated_code: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a test type other than the built-in default.
    pub fn with_test_type(test_type: TestType) -> Self {
        Self {
            test_type,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Requirements
    // ─────────────────────────────────────────────────────────

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    /// Replace the requirements verbatim. No trimming, no validation.
    pub fn set_requirements(&mut self, text: impl Into<String>) {
        self.requirements = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.requirements.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.requirements.push_str(text);
    }

    pub fn push_newline(&mut self) {
        self.requirements.push('\n');
    }

    /// Remove the last character, if any.
    pub fn pop_char(&mut self) -> Option<char> {
        self.requirements.pop()
    }

    pub fn clear_requirements(&mut self) {
        self.requirements.clear();
    }

    // ─────────────────────────────────────────────────────────
    // Test type
    // ─────────────────────────────────────────────────────────

    pub fn test_type(&self) -> TestType {
        self.test_type
    }

    pub fn set_test_type(&mut self, test_type: TestType) {
        self.test_type = test_type;
    }

    pub fn toggle_test_type(&mut self) {
        self.test_type = self.test_type.toggled();
    }

    // ─────────────────────────────────────────────────────────
    // Generated code
    // ─────────────────────────────────────────────────────────

    pub fn generated_code(&self) -> &str {
        &self.generated_code
    }

    pub fn has_result(&self) -> bool {
        !self.generated_code.is_empty()
    }

    pub(crate) fn apply_generated_code(&mut self, code: String) {
        self.generated_code = code;
    }

    /// Snapshot of the current inputs as a wire request.
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest::new(self.requirements.clone(), self.test_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let form = FormState::new();
        assert_eq!(form.requirements(), "");
        assert_eq!(form.test_type(), TestType::Ui);
        assert_eq!(form.generated_code(), "");
        assert!(!form.has_result());
    }

    #[test]
    fn test_set_requirements_round_trips_exactly() {
        let samples = [
            "",
            "Login page must validate empty fields",
            "  leading and trailing  ",
            "line one\nline two\r\n\ttabbed",
            "Требования: кнопка «Войти» 🚀",
            "\0 nul and \u{200b} zero-width",
        ];
        let mut form = FormState::new();
        for s in samples {
            form.set_requirements(s);
            assert_eq!(form.requirements(), s);
        }
    }

    #[test]
    fn test_editing_helpers() {
        let mut form = FormState::new();
        form.push_char('a');
        form.push_char('é');
        form.push_newline();
        form.push_char('b');
        assert_eq!(form.requirements(), "aé\nb");

        assert_eq!(form.pop_char(), Some('b'));
        assert_eq!(form.pop_char(), Some('\n'));
        assert_eq!(form.pop_char(), Some('é'));
        assert_eq!(form.requirements(), "a");

        form.clear_requirements();
        assert_eq!(form.pop_char(), None);
    }

    #[test]
    fn test_test_type_setters() {
        let mut form = FormState::new();
        form.set_test_type(TestType::Api);
        assert_eq!(form.test_type(), TestType::Api);
        form.toggle_test_type();
        assert_eq!(form.test_type(), TestType::Ui);
    }

    #[test]
    fn test_with_test_type() {
        let form = FormState::with_test_type(TestType::Api);
        assert_eq!(form.test_type(), TestType::Api);
        assert_eq!(form.requirements(), "");
    }

    #[test]
    fn test_to_request_snapshots_inputs() {
        let mut form = FormState::new();
        form.set_requirements("Checkout API returns 201");
        form.set_test_type(TestType::Api);
        let req = form.to_request();
        assert_eq!(req.requirements, "Checkout API returns 201");
        assert_eq!(req.test_type, TestType::Api);

        // Later edits do not leak into an already-built request
        form.set_requirements("changed");
        assert_eq!(req.requirements, "Checkout API returns 201");
    }

    #[test]
    fn test_editing_never_touches_generated_code() {
        let mut form = FormState::new();
        form.apply_generated_code("code".into());
        form.set_requirements("x");
        form.toggle_test_type();
        form.clear_requirements();
        assert_eq!(form.generated_code(), "code");
    }
}
