//! The form controller: all session state and every user-triggered operation.
//!
//! The controller is UI-agnostic. The event loop maps input to a [`Trigger`],
//! calls [`FormController::dispatch`], performs the returned [`Effect`] (the one
//! network request) and feeds its outcome back through
//! [`FormController::complete_submit`]. Nothing here blocks or awaits.

use std::time::Instant;

use crate::clipboard::ClipboardWriter;
use crate::diff::{line_diff, DiffPart};
use crate::error::{RequestError, ValidationError};
use crate::toast::{Toast, Toaster};
use crate::types::{builtin_models, Model, ProcessRequest, ProcessResponse};

pub const NO_CODE: &str = "No code provided.";
pub const NO_EXPLANATION: &str = "No explanation provided.";
pub const NO_SUGGESTIONS: &str = "No suggestions provided.";
pub const COPY_OK: &str = "Code copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy code.";

/// The tabbed result panels, in display order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    ImprovedCode,
    Explanation,
    Suggestions,
    Changes,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::ImprovedCode, Tab::Explanation, Tab::Suggestions, Tab::Changes];

    pub fn index(self) -> usize {
        match self {
            Tab::ImprovedCode => 0,
            Tab::Explanation => 1,
            Tab::Suggestions => 2,
            Tab::Changes => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::ImprovedCode => "Improved Code",
            Tab::Explanation => "Explanation",
            Tab::Suggestions => "Suggestions",
            Tab::Changes => "Changes",
        }
    }

    /// Text shown in the panel before any response, and again after a reset.
    pub fn placeholder(self) -> &'static str {
        match self {
            Tab::ImprovedCode => "Your improved code will appear here.",
            Tab::Explanation => "Explanation will appear here.",
            Tab::Suggestions => "Additional suggestions will appear here.",
            Tab::Changes => "Changes will appear here.",
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Which of the two mutually exclusive result views is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Tabbed panels with the latest response.
    #[default]
    Result,
    /// The integrated code, ready to be taken back into the form.
    Final,
}

/// What a tab panel currently holds. The renderer decides how each is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Placeholder(String),
    /// Shown verbatim (code).
    Plain(String),
    /// Rendered as rich text.
    Markdown(String),
    Diff(Vec<DiffPart>),
}

impl PanelContent {
    fn placeholder(tab: Tab) -> Self {
        PanelContent::Placeholder(tab.placeholder().to_owned())
    }

    /// The raw text a user would see in the panel (diffs concatenated).
    pub fn text(&self) -> String {
        match self {
            PanelContent::Placeholder(s) | PanelContent::Plain(s) | PanelContent::Markdown(s) => {
                s.clone()
            }
            PanelContent::Diff(parts) => parts.iter().map(|p| p.value.as_str()).collect(),
        }
    }
}

/// Every user action the controller responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Submit,
    Integrate,
    Reset,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    Copy,
    SelectModel(usize),
    NextModel,
    PrevModel,
}

/// Work the event loop must carry out on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send this request to the backend, then call
    /// [`FormController::complete_submit`] with the outcome.
    Send(ProcessRequest),
}

/// Owns the form inputs, the session state and the visible UI state.
///
/// At most one response is current and at most one request is in flight.
#[derive(Debug)]
pub struct FormController {
    code_input: String,
    prompt_input: String,
    models: Vec<Model>,
    selected_model: usize,
    model_label: String,

    last_response: Option<ProcessResponse>,
    original_code_for_diff: String,
    busy: bool,

    view: View,
    active_tab: Tab,
    panels: [PanelContent; 4],
    final_code: String,
    integrate_available: bool,

    toaster: Toaster,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(builtin_models())
    }
}

impl FormController {
    /// Creates a controller over `models`. An empty list falls back to the
    /// built-in catalogue; the first model is selected.
    pub fn new(models: Vec<Model>) -> Self {
        let models = if models.is_empty() { builtin_models() } else { models };
        let model_label = models[0].label.clone();
        Self {
            code_input: String::new(),
            prompt_input: String::new(),
            models,
            selected_model: 0,
            model_label,
            last_response: None,
            original_code_for_diff: String::new(),
            busy: false,
            view: View::default(),
            active_tab: Tab::default(),
            panels: Tab::ALL.map(PanelContent::placeholder),
            final_code: String::new(),
            integrate_available: false,
            toaster: Toaster::default(),
        }
    }

    // ---------------------------------------------------------------------
    // Dispatch
    // ---------------------------------------------------------------------

    /// Runs the handler bound to `trigger`.
    ///
    /// Returns `Some(Effect::Send(..))` only for a valid submit while idle.
    pub fn dispatch(
        &mut self,
        trigger: Trigger,
        clipboard: &mut dyn ClipboardWriter,
        now: Instant,
    ) -> Option<Effect> {
        tracing::debug!(?trigger, "dispatch");
        match trigger {
            Trigger::Submit => return self.begin_submit(now).map(Effect::Send),
            Trigger::Integrate => self.integrate(),
            Trigger::Reset => self.reset(),
            Trigger::SelectTab(tab) => self.select_tab(tab),
            Trigger::NextTab => self.select_tab(self.active_tab.next()),
            Trigger::PrevTab => self.select_tab(self.active_tab.prev()),
            Trigger::Copy => self.copy(clipboard, now),
            Trigger::SelectModel(idx) => self.select_model(idx),
            Trigger::NextModel => self.select_model((self.selected_model + 1) % self.models.len()),
            Trigger::PrevModel => {
                let len = self.models.len();
                self.select_model((self.selected_model + len - 1) % len)
            }
        }
        None
    }

    // ---------------------------------------------------------------------
    // Submit
    // ---------------------------------------------------------------------

    /// Validates the form and, if it is valid and nothing is in flight, marks
    /// the controller busy and returns the request to send.
    ///
    /// The untrimmed code is kept as the diff baseline; the payload carries
    /// trimmed code and prompt.
    pub fn begin_submit(&mut self, now: Instant) -> Option<ProcessRequest> {
        if self.busy {
            tracing::debug!("submit ignored: request already in flight");
            return None;
        }
        if let Err(err) = self.validate() {
            tracing::info!(%err, "submit rejected");
            self.toaster.error(err.to_string(), now);
            return None;
        }

        self.original_code_for_diff = self.code_input.clone();
        self.busy = true;
        Some(ProcessRequest {
            code: self.code_input.trim().to_owned(),
            prompt: self.prompt_input.trim().to_owned(),
            model: self.selected_model().id.clone(),
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.code_input.trim().is_empty() {
            return Err(ValidationError::EmptyCode);
        }
        if self.prompt_input.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        Ok(())
    }

    /// Applies the outcome of the request started by [`Self::begin_submit`].
    ///
    /// The busy flag is cleared on every path. A failure leaves the stored
    /// response and the panels untouched.
    pub fn complete_submit(&mut self, outcome: Result<ProcessResponse, RequestError>, now: Instant) {
        self.busy = false;
        match outcome {
            Ok(response) => self.apply_response(response),
            Err(err) => {
                tracing::warn!(error = %err, "process request failed");
                self.toaster.error(format!("Error: {err}"), now);
            }
        }
    }

    fn apply_response(&mut self, response: ProcessResponse) {
        let improved = non_empty(&response.improved_code);
        self.panels[Tab::ImprovedCode.index()] =
            PanelContent::Plain(improved.unwrap_or(NO_CODE).to_owned());
        self.panels[Tab::Explanation.index()] = PanelContent::Markdown(
            non_empty(&response.explanation).unwrap_or(NO_EXPLANATION).to_owned(),
        );
        self.panels[Tab::Suggestions.index()] = PanelContent::Markdown(
            non_empty(&response.additional_suggestions).unwrap_or(NO_SUGGESTIONS).to_owned(),
        );
        self.panels[Tab::Changes.index()] =
            PanelContent::Diff(line_diff(&self.original_code_for_diff, improved.unwrap_or("")));
        self.integrate_available = true;
        self.last_response = Some(response);
    }

    // ---------------------------------------------------------------------
    // Integrate / reset
    // ---------------------------------------------------------------------

    /// Moves the improved code into the final view. No-op without a response.
    pub fn integrate(&mut self) {
        let Some(response) = &self.last_response else {
            return;
        };
        self.final_code = response.improved_code.clone().unwrap_or_default();
        self.view = View::Final;
    }

    /// Takes the final code back into the form and clears everything else.
    /// Only available from the final view; elsewhere it would wipe the
    /// code being edited.
    pub fn reset(&mut self) {
        if self.view != View::Final {
            return;
        }
        self.code_input = self.final_code.clone();
        self.prompt_input.clear();
        self.last_response = None;
        self.original_code_for_diff.clear();
        self.view = View::Result;
        self.integrate_available = false;
        self.panels = Tab::ALL.map(PanelContent::placeholder);
        self.active_tab = Tab::ImprovedCode;
    }

    // ---------------------------------------------------------------------
    // Tabs, copy, model
    // ---------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Copies the text currently shown in the improved-code panel.
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardWriter, now: Instant) {
        let text = self.panels[Tab::ImprovedCode.index()].text();
        match clipboard.write(&text) {
            Ok(()) => self.toaster.success(COPY_OK, now),
            Err(err) => {
                tracing::warn!(error = %err, "copy failed");
                self.toaster.error(COPY_FAILED, now);
            }
        }
    }

    /// Selects the model at `idx` and refreshes the label. Out-of-range
    /// indices are ignored.
    pub fn select_model(&mut self, idx: usize) {
        if let Some(model) = self.models.get(idx) {
            self.selected_model = idx;
            self.model_label = model.label.clone();
        }
    }

    /// Selects the model with identifier `id`, if it is in the catalogue.
    pub fn select_model_id(&mut self, id: &str) -> bool {
        match self.models.iter().position(|m| m.id == id) {
            Some(idx) => {
                self.select_model(idx);
                true
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Form inputs
    // ---------------------------------------------------------------------

    pub fn code_input(&self) -> &str {
        &self.code_input
    }

    pub fn code_input_mut(&mut self) -> &mut String {
        &mut self.code_input
    }

    pub fn set_code_input(&mut self, code: impl Into<String>) {
        self.code_input = code.into();
    }

    pub fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    pub fn prompt_input_mut(&mut self) -> &mut String {
        &mut self.prompt_input
    }

    pub fn set_prompt_input(&mut self, prompt: impl Into<String>) {
        self.prompt_input = prompt.into();
    }

    // ---------------------------------------------------------------------
    // Read-only state
    // ---------------------------------------------------------------------

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn selected_model_index(&self) -> usize {
        self.selected_model
    }

    pub fn selected_model(&self) -> &Model {
        &self.models[self.selected_model]
    }

    /// Human-readable name of the selected model.
    pub fn model_label(&self) -> &str {
        &self.model_label
    }

    pub fn last_response(&self) -> Option<&ProcessResponse> {
        self.last_response.as_ref()
    }

    pub fn original_code_for_diff(&self) -> &str {
        &self.original_code_for_diff
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn panel(&self, tab: Tab) -> &PanelContent {
        &self.panels[tab.index()]
    }

    pub fn final_code(&self) -> &str {
        &self.final_code
    }

    /// Whether the integrate follow-up action is offered.
    pub fn integrate_available(&self) -> bool {
        self.integrate_available
    }

    pub fn toast(&self, now: Instant) -> Option<&Toast> {
        self.toaster.visible(now)
    }

    /// Drops an expired toast; call on every tick.
    pub fn tick(&mut self, now: Instant) {
        self.toaster.expire(now);
    }
}

/// The backend sends `""` for sections it could not extract; treat those as
/// missing.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffKind;
    use crate::error::ClipboardError;
    use crate::toast::ToastKind;
    use pretty_assertions::assert_eq;

    /// Records writes; fails every write when `fail` is set.
    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".into()));
            }
            self.writes.push(text.to_owned());
            Ok(())
        }
    }

    fn filled(code: &str, prompt: &str) -> FormController {
        let mut form = FormController::default();
        form.set_code_input(code);
        form.set_prompt_input(prompt);
        form
    }

    fn full_response() -> ProcessResponse {
        ProcessResponse {
            improved_code: Some("let x = 2;\n".into()),
            explanation: Some("**Renamed** the constant.".into()),
            additional_suggestions: Some("- add tests".into()),
        }
    }

    fn submit_ok(form: &mut FormController, response: ProcessResponse) {
        let now = Instant::now();
        assert!(form.begin_submit(now).is_some());
        form.complete_submit(Ok(response), now);
    }

    #[test]
    fn empty_code_is_rejected_without_a_request() {
        let now = Instant::now();
        let mut form = filled("   \n", "make it faster");
        let mut clip = RecordingClipboard::default();

        assert_eq!(form.dispatch(Trigger::Submit, &mut clip, now), None);
        let toast = form.toast(now).unwrap();
        assert_eq!(toast.message, "Please enter some code to improve.");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(!form.is_busy());
    }

    #[test]
    fn blank_prompt_is_rejected_without_a_request() {
        let now = Instant::now();
        let mut form = filled("let x = 1;", " \t ");
        assert_eq!(form.begin_submit(now), None);
        assert_eq!(form.toast(now).unwrap().message, "Please describe what improvements you want.");
        assert_eq!(form.original_code_for_diff(), "");
    }

    #[test]
    fn valid_submit_sends_trimmed_payload_and_snapshots_raw_code() {
        let now = Instant::now();
        let mut form = filled("  let x = 1;\n", "  rename  ");
        form.select_model(2);
        let mut clip = RecordingClipboard::default();

        let effect = form.dispatch(Trigger::Submit, &mut clip, now);
        assert_eq!(
            effect,
            Some(Effect::Send(ProcessRequest {
                code: "let x = 1;".into(),
                prompt: "rename".into(),
                model: "llama3-cloud".into(),
            }))
        );
        assert!(form.is_busy());
        assert_eq!(form.original_code_for_diff(), "  let x = 1;\n");
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let now = Instant::now();
        let mut form = filled("a", "b");
        assert!(form.begin_submit(now).is_some());
        assert!(form.begin_submit(now).is_none());
        assert!(form.toast(now).is_none());
    }

    #[test]
    fn success_fills_every_panel_and_offers_integrate() {
        let mut form = filled("let x = 1;\n", "rename");
        submit_ok(&mut form, full_response());

        assert!(!form.is_busy());
        assert!(form.integrate_available());
        assert_eq!(form.panel(Tab::ImprovedCode), &PanelContent::Plain("let x = 2;\n".into()));
        assert_eq!(
            form.panel(Tab::Explanation),
            &PanelContent::Markdown("**Renamed** the constant.".into())
        );
        assert_eq!(form.panel(Tab::Suggestions), &PanelContent::Markdown("- add tests".into()));
        let PanelContent::Diff(parts) = form.panel(Tab::Changes) else {
            panic!("changes panel should hold a diff");
        };
        assert_eq!(parts[0].kind, DiffKind::Removed);
        assert_eq!(parts[0].value, "let x = 1;\n");
        assert_eq!(parts[1].kind, DiffKind::Added);
        assert_eq!(form.last_response(), Some(&full_response()));
    }

    #[test]
    fn missing_sections_fall_back_to_placeholders() {
        let mut form = filled("x", "y");
        submit_ok(&mut form, ProcessResponse::default());

        assert_eq!(form.panel(Tab::ImprovedCode), &PanelContent::Plain(NO_CODE.into()));
        assert_eq!(form.panel(Tab::Explanation), &PanelContent::Markdown(NO_EXPLANATION.into()));
        assert_eq!(form.panel(Tab::Suggestions), &PanelContent::Markdown(NO_SUGGESTIONS.into()));
    }

    #[test]
    fn empty_sections_fall_back_to_placeholders() {
        let mut form = filled("let x = 1;\n", "y");
        let response: ProcessResponse = serde_json::from_str(
            r#"{"improved_code":"","explanation":"","additional_suggestions":""}"#,
        )
        .unwrap();
        submit_ok(&mut form, response);

        assert_eq!(form.panel(Tab::ImprovedCode), &PanelContent::Plain(NO_CODE.into()));
        assert_eq!(form.panel(Tab::Explanation), &PanelContent::Markdown(NO_EXPLANATION.into()));
        assert_eq!(form.panel(Tab::Suggestions), &PanelContent::Markdown(NO_SUGGESTIONS.into()));
        let PanelContent::Diff(parts) = form.panel(Tab::Changes) else {
            panic!("changes panel should hold a diff");
        };
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].kind, DiffKind::Removed);
    }

    #[test]
    fn identical_code_diffs_as_unchanged_only() {
        let mut form = filled("same\n", "noop");
        submit_ok(
            &mut form,
            ProcessResponse { improved_code: Some("same\n".into()), ..Default::default() },
        );
        let PanelContent::Diff(parts) = form.panel(Tab::Changes) else {
            panic!("changes panel should hold a diff");
        };
        assert!(parts.iter().all(|p| p.kind == DiffKind::Unchanged));
    }

    #[test]
    fn failure_toasts_server_message_and_keeps_previous_response() {
        let now = Instant::now();
        let mut form = filled("x", "y");
        submit_ok(&mut form, full_response());

        assert!(form.begin_submit(now).is_some());
        form.complete_submit(
            Err(RequestError::Server { status: 500, message: "X".into() }),
            now,
        );

        assert!(!form.is_busy());
        assert_eq!(form.toast(now).unwrap().message, "Error: X");
        assert_eq!(form.last_response(), Some(&full_response()));
        assert_eq!(form.panel(Tab::ImprovedCode), &PanelContent::Plain("let x = 2;\n".into()));
    }

    #[test]
    fn integrate_without_response_is_a_no_op() {
        let mut form = FormController::default();
        form.integrate();
        assert_eq!(form.view(), View::Result);
        assert_eq!(form.final_code(), "");
    }

    #[test]
    fn integrate_switches_to_final_view() {
        let mut form = filled("x", "y");
        submit_ok(&mut form, full_response());
        form.integrate();
        assert_eq!(form.view(), View::Final);
        assert_eq!(form.final_code(), "let x = 2;\n");
    }

    #[test]
    fn reset_after_integrate_round_trips_final_code() {
        let now = Instant::now();
        let mut form = filled("let x = 1;\n", "rename");
        let mut clip = RecordingClipboard::default();
        submit_ok(&mut form, full_response());
        form.dispatch(Trigger::SelectTab(Tab::Changes), &mut clip, now);
        form.dispatch(Trigger::Integrate, &mut clip, now);
        form.dispatch(Trigger::Reset, &mut clip, now);

        assert_eq!(form.code_input(), "let x = 2;\n");
        assert_eq!(form.prompt_input(), "");
        assert_eq!(form.last_response(), None);
        assert_eq!(form.original_code_for_diff(), "");
        assert_eq!(form.view(), View::Result);
        assert!(!form.integrate_available());
        assert_eq!(form.active_tab(), Tab::ImprovedCode);
        for tab in Tab::ALL {
            assert_eq!(form.panel(tab), &PanelContent::Placeholder(tab.placeholder().into()));
        }
    }

    #[test]
    fn reset_outside_final_view_keeps_the_editor() {
        let now = Instant::now();
        let mut form = filled("fn precious() {}", "tidy");
        let mut clip = RecordingClipboard::default();
        form.dispatch(Trigger::Reset, &mut clip, now);
        assert_eq!(form.code_input(), "fn precious() {}");
        assert_eq!(form.prompt_input(), "tidy");

        submit_ok(&mut form, full_response());
        form.dispatch(Trigger::Reset, &mut clip, now);
        assert_eq!(form.code_input(), "fn precious() {}");
        assert!(form.integrate_available());
        assert_eq!(form.last_response(), Some(&full_response()));
    }

    #[test]
    fn tab_cycling_wraps_both_ways() {
        assert_eq!(Tab::Changes.next(), Tab::ImprovedCode);
        assert_eq!(Tab::ImprovedCode.prev(), Tab::Changes);

        let now = Instant::now();
        let mut form = FormController::default();
        let mut clip = RecordingClipboard::default();
        form.dispatch(Trigger::PrevTab, &mut clip, now);
        assert_eq!(form.active_tab(), Tab::Changes);
        form.dispatch(Trigger::NextTab, &mut clip, now);
        assert_eq!(form.active_tab(), Tab::ImprovedCode);
    }

    #[test]
    fn copy_writes_displayed_code_and_toasts() {
        let now = Instant::now();
        let mut form = filled("x", "y");
        submit_ok(&mut form, full_response());

        let mut clip = RecordingClipboard::default();
        form.dispatch(Trigger::Copy, &mut clip, now);
        assert_eq!(clip.writes, vec!["let x = 2;\n".to_owned()]);
        let toast = form.toast(now).unwrap();
        assert_eq!((toast.message.as_str(), toast.kind), (COPY_OK, ToastKind::Success));

        let mut broken = RecordingClipboard { fail: true, ..Default::default() };
        form.dispatch(Trigger::Copy, &mut broken, now);
        let toast = form.toast(now).unwrap();
        assert_eq!((toast.message.as_str(), toast.kind), (COPY_FAILED, ToastKind::Error));
    }

    #[test]
    fn model_change_updates_label_only() {
        let now = Instant::now();
        let mut form = FormController::default();
        let mut clip = RecordingClipboard::default();
        assert_eq!(form.model_label(), "Phi-3 (Local)");

        assert_eq!(form.dispatch(Trigger::SelectModel(1), &mut clip, now), None);
        assert_eq!(form.model_label(), "Llama 3 (Local)");

        form.dispatch(Trigger::SelectModel(42), &mut clip, now);
        assert_eq!(form.selected_model_index(), 1);

        form.dispatch(Trigger::NextModel, &mut clip, now);
        form.dispatch(Trigger::NextModel, &mut clip, now);
        assert_eq!(form.selected_model().id, "phi3-local");
        form.dispatch(Trigger::PrevModel, &mut clip, now);
        assert_eq!(form.selected_model().id, "llama3-cloud");
        assert!(!form.is_busy());
    }

    #[test]
    fn empty_catalogue_falls_back_to_builtins() {
        let form = FormController::new(Vec::new());
        assert_eq!(form.models(), builtin_models().as_slice());
        assert_eq!(form.selected_model().id, "phi3-local");
    }

    #[test]
    fn select_model_by_id() {
        let mut form = FormController::default();
        assert!(form.select_model_id("llama3-local"));
        assert_eq!(form.model_label(), "Llama 3 (Local)");
        assert!(!form.select_model_id("gpt-9"));
        assert_eq!(form.selected_model().id, "llama3-local");
    }
}
