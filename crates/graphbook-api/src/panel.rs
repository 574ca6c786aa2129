//! Provider configuration panel state machine
//!
//! Each LLM provider gets an explicit finite-state machine instead of
//! implicit flag combinations:
//!
//! ```text
//! Unconfigured -> KeyEntered -> Testing -> {TestPassed, TestFailed}
//! TestPassed -> Saving -> Saved
//! ```
//!
//! Saving is reachable only from TestPassed. Editing the key from any
//! settled state returns to KeyEntered and clears the previous test
//! outcome. The API key lives only in this in-memory form state.

use crate::api::llm::ProviderInfo;
use crate::error::{GraphbookError, Result};

/// Configuration panel state for one provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Unconfigured,
    KeyEntered,
    Testing,
    TestPassed,
    TestFailed,
    Saving,
    Saved,
}

impl PanelState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::KeyEntered => "key entered",
            Self::Testing => "testing...",
            Self::TestPassed => "test passed",
            Self::TestFailed => "test failed",
            Self::Saving => "saving...",
            Self::Saved => "saved",
        }
    }
}

/// Local (unsaved) form state for one provider's panel
#[derive(Debug, Clone)]
pub struct ProviderPanel {
    pub provider_id: String,
    pub display_name: String,
    pub models: Vec<String>,
    pub selected_model: Option<String>,
    pub api_key: String,
    pub state: PanelState,
    /// Message from the last test or save call
    pub last_message: Option<String>,
}

impl ProviderPanel {
    pub fn new(info: &ProviderInfo) -> Self {
        Self {
            provider_id: info.id.clone(),
            display_name: info.name.clone(),
            selected_model: info.models.first().cloned(),
            models: info.models.clone(),
            api_key: String::new(),
            state: PanelState::Unconfigured,
            last_message: None,
        }
    }

    /// Key field edited: any state re-enters the cycle
    pub fn edit_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
        self.last_message = None;
        self.state = if self.api_key.is_empty() {
            PanelState::Unconfigured
        } else {
            PanelState::KeyEntered
        };
    }

    pub fn select_model(&mut self, model: impl Into<String>) {
        self.selected_model = Some(model.into());
    }

    /// Begin a test call; requires an entered key
    pub fn begin_test(&mut self) -> Result<()> {
        match self.state {
            PanelState::KeyEntered | PanelState::TestPassed | PanelState::TestFailed => {
                self.state = PanelState::Testing;
                self.last_message = None;
                Ok(())
            }
            PanelState::Unconfigured => Err(GraphbookError::InvalidInput(
                "enter an API key before testing".to_string(),
            )),
            other => Err(GraphbookError::InvalidInput(format!(
                "cannot test while {}",
                other.label()
            ))),
        }
    }

    /// Record the outcome of the in-flight test
    pub fn record_test(&mut self, success: bool, message: impl Into<String>) {
        debug_assert_eq!(self.state, PanelState::Testing);
        self.state = if success {
            PanelState::TestPassed
        } else {
            PanelState::TestFailed
        };
        self.last_message = Some(message.into());
    }

    /// Begin a save call; legal only after a passed test
    pub fn begin_save(&mut self) -> Result<()> {
        if self.state != PanelState::TestPassed {
            return Err(GraphbookError::InvalidInput(format!(
                "save requires a passed test (currently {})",
                self.state.label()
            )));
        }
        self.state = PanelState::Saving;
        Ok(())
    }

    /// Record the outcome of the in-flight save
    pub fn record_save(&mut self, success: bool, message: impl Into<String>) {
        debug_assert_eq!(self.state, PanelState::Saving);
        // A failed save leaves the passed test intact so the user can retry.
        self.state = if success {
            PanelState::Saved
        } else {
            PanelState::TestPassed
        };
        self.last_message = Some(message.into());
    }

    /// Whether the save action is currently enabled
    pub fn can_save(&self) -> bool {
        self.state == PanelState::TestPassed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn panel() -> ProviderPanel {
        ProviderPanel::new(&ProviderInfo {
            id: "qwen".to_string(),
            name: "Qwen".to_string(),
            models: vec!["qwen-turbo".to_string(), "qwen-plus".to_string()],
            configured: false,
            current: false,
        })
    }

    #[test]
    fn happy_path_reaches_saved() {
        let mut p = panel();
        assert_eq!(p.state, PanelState::Unconfigured);

        p.edit_key("sk-123");
        assert_eq!(p.state, PanelState::KeyEntered);

        p.begin_test().unwrap();
        assert_eq!(p.state, PanelState::Testing);

        p.record_test(true, "connection ok");
        assert_eq!(p.state, PanelState::TestPassed);
        assert!(p.can_save());

        p.begin_save().unwrap();
        assert_eq!(p.state, PanelState::Saving);

        p.record_save(true, "configured");
        assert_eq!(p.state, PanelState::Saved);
    }

    #[test]
    fn failed_test_never_reaches_saving() {
        let mut p = panel();
        p.edit_key("sk-bad");
        p.begin_test().unwrap();
        p.record_test(false, "network error");
        assert_eq!(p.state, PanelState::TestFailed);
        assert!(!p.can_save());
        assert!(p.begin_save().is_err());
        assert_eq!(p.state, PanelState::TestFailed);
    }

    #[test]
    fn testing_without_key_is_rejected() {
        let mut p = panel();
        assert!(p.begin_test().is_err());
        assert_eq!(p.state, PanelState::Unconfigured);
    }

    #[test]
    fn editing_key_after_save_re_enters_cycle() {
        let mut p = panel();
        p.edit_key("sk-123");
        p.begin_test().unwrap();
        p.record_test(true, "ok");
        p.begin_save().unwrap();
        p.record_save(true, "saved");

        p.edit_key("sk-456");
        assert_eq!(p.state, PanelState::KeyEntered);
        assert!(p.last_message.is_none());
        assert!(!p.can_save());
    }

    #[test]
    fn clearing_key_returns_to_unconfigured() {
        let mut p = panel();
        p.edit_key("sk-123");
        p.edit_key("");
        assert_eq!(p.state, PanelState::Unconfigured);
    }

    #[derive(Debug, Clone)]
    enum Event {
        EditKey(String),
        BeginTest,
        TestOutcome(bool),
        BeginSave,
        SaveOutcome(bool),
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        prop_oneof![
            "[a-z0-9]{0,8}".prop_map(Event::EditKey),
            Just(Event::BeginTest),
            any::<bool>().prop_map(Event::TestOutcome),
            Just(Event::BeginSave),
            any::<bool>().prop_map(Event::SaveOutcome),
        ]
    }

    proptest! {
        // Saving must only ever be entered from TestPassed, no matter the
        // event order the UI produces.
        #[test]
        fn saving_only_reachable_from_test_passed(
            events in proptest::collection::vec(event_strategy(), 1..40)
        ) {
            let mut p = panel();
            for event in events {
                let before = p.state;
                match event {
                    Event::EditKey(k) => p.edit_key(k),
                    Event::BeginTest => {
                        let _ = p.begin_test();
                    }
                    Event::TestOutcome(ok) => {
                        if p.state == PanelState::Testing {
                            p.record_test(ok, "outcome");
                        }
                    }
                    Event::BeginSave => {
                        let _ = p.begin_save();
                    }
                    Event::SaveOutcome(ok) => {
                        if p.state == PanelState::Saving {
                            p.record_save(ok, "outcome");
                        }
                    }
                }
                if p.state == PanelState::Saving && before != PanelState::Saving {
                    prop_assert_eq!(before, PanelState::TestPassed);
                }
            }
        }
    }
}
