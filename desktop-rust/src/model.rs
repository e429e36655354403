use regdoc_common::Locale;
use std::path::PathBuf;

/// Run lifecycle: idle -> running -> {success, failure}, reset on a new run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub locale: Locale,
    pub base_file: Option<PathBuf>,
    pub analysis_files: Vec<PathBuf>,
    pub run_state: RunState,
    pub generated_doc: String,
    pub error: String,
    /// Where the last successful run's text was written
    pub source_path: Option<PathBuf>,
    pub location: String,
    pub effective_date: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            base_file: None,
            analysis_files: Vec::new(),
            run_state: RunState::default(),
            generated_doc: String::new(),
            error: String::new(),
            source_path: None,
            location: "São Paulo".to_string(),
            effective_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl AppState {
    /// The run action is enabled iff a base file and at least one analysis
    /// file are selected and no run is in flight.
    pub fn can_run(&self) -> bool {
        self.base_file.is_some()
            && !self.analysis_files.is_empty()
            && self.run_state != RunState::Running
    }

    /// Clear the previous outcome and enter the running state.
    pub fn begin_run(&mut self) {
        self.generated_doc.clear();
        self.error.clear();
        self.source_path = None;
        self.run_state = RunState::Running;
    }

    pub fn complete_success(&mut self, document: String, source_path: PathBuf) {
        self.generated_doc = document;
        self.error.clear();
        self.source_path = Some(source_path);
        self.run_state = RunState::Success;
    }

    pub fn complete_failure(&mut self, message: String) {
        self.error = message;
        self.generated_doc.clear();
        self.source_path = None;
        self.run_state = RunState::Failure;
    }

    pub fn has_result(&self) -> bool {
        self.run_state == RunState::Success && !self.generated_doc.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_state() -> AppState {
        let mut state = AppState::default();
        state.base_file = Some(PathBuf::from("base.pdf"));
        state.analysis_files = vec![PathBuf::from("a.pdf")];
        state
    }

    #[test]
    fn test_can_run_requires_base_and_analysis() {
        let mut state = AppState::default();
        assert!(!state.can_run());

        state.base_file = Some(PathBuf::from("base.pdf"));
        assert!(!state.can_run());

        state.analysis_files.push(PathBuf::from("a.pdf"));
        assert!(state.can_run());

        state.base_file = None;
        assert!(!state.can_run());
    }

    #[test]
    fn test_can_run_disabled_while_running() {
        let mut state = selected_state();
        assert!(state.can_run());
        state.begin_run();
        assert!(!state.can_run());
    }

    #[test]
    fn test_begin_run_clears_previous_outcome() {
        let mut state = selected_state();
        state.complete_failure("erro".to_string());

        state.begin_run();
        assert_eq!(state.run_state, RunState::Running);
        assert!(state.error.is_empty());
        assert!(state.generated_doc.is_empty());
        assert!(state.source_path.is_none());
    }

    #[test]
    fn test_at_most_one_of_result_and_error() {
        let mut state = selected_state();
        state.begin_run();
        state.complete_success("documento".to_string(), PathBuf::from("out.md"));
        assert!(!state.generated_doc.is_empty());
        assert!(state.error.is_empty());

        state.begin_run();
        state.complete_failure("falha".to_string());
        assert!(state.generated_doc.is_empty());
        assert!(!state.error.is_empty());
    }

    #[test]
    fn test_locale_switch_keeps_run_outcome() {
        let mut state = selected_state();
        state.begin_run();
        state.complete_success("documento".to_string(), PathBuf::from("out.md"));

        state.locale = Locale::En;
        assert!(state.has_result());
        assert_eq!(state.generated_doc, "documento");
    }

    #[test]
    fn test_run_allowed_again_after_completion() {
        let mut state = selected_state();
        state.begin_run();
        state.complete_failure("falha".to_string());
        assert!(state.can_run());
    }
}
