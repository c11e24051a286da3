use crate::boundary::ErrorBoundary;
use crate::fetch::{CompletionSender, FetchCompletion, FetchOrchestrator, RequestState};
use crate::lookup::Lookup;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::view::View;
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root of the pokemon info screen: the name form, the fetch orchestrator
/// and the error boundary wrapping the info view.
pub struct App {
    should_quit: bool,
    backend_name: &'static str,
    /// Name form state (MVI pattern).
    form: FormState,
    orchestrator: FetchOrchestrator,
    boundary: ErrorBoundary,
    animation_tick: u8,
}

impl App {
    pub fn new(lookup: Arc<dyn Lookup>, completions: CompletionSender) -> Self {
        let backend_name = lookup.name();
        let mut boundary = ErrorBoundary::new();
        boundary.on_error(|error| {
            tracing::error!(error = %error, "Pokemon info failed, showing fallback");
        });

        Self {
            should_quit: false,
            backend_name,
            form: FormState::default(),
            orchestrator: FetchOrchestrator::new(lookup, completions),
            boundary,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn request_state(&self) -> &RequestState {
        self.orchestrator.state()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Submit the form and hand the name to the orchestrator.
    pub fn submit(&mut self) {
        self.dispatch_form(FormIntent::Submit);
        self.key_changed();
    }

    /// Fill the form with `name` and submit it.
    pub fn prefill(&mut self, name: &str) {
        self.dispatch_form(FormIntent::Prefill {
            name: name.to_string(),
        });
        self.key_changed();
    }

    /// Look the current name up again. The new generation resets the
    /// boundary on the next render.
    pub fn retry(&mut self) {
        self.orchestrator.retry();
    }

    pub fn on_completion(&mut self, completion: FetchCompletion) {
        self.orchestrator.apply(completion);
    }

    pub fn on_tick(&mut self) {
        if self.orchestrator.state().is_pending() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Current body view, rendered through the error boundary.
    pub fn view(&mut self) -> View {
        self.boundary.reset_keys(self.orchestrator.reset_key());
        self.boundary.render(self.orchestrator.state())
    }

    fn key_changed(&mut self) {
        if self.orchestrator.set_key(&self.form.submitted) {
            self.animation_tick = 0;
        }
    }
}
