//! Error boundary around a rendering child.
//!
//! A child implements [`Component`] and reports a failure by returning
//! `Err` from `render`. The boundary records the first failure, notifies the
//! handlers registered with [`ErrorBoundary::on_error`] and renders
//! [`View::Fallback`] until its [`ResetKey`] changes. The reset key pairs
//! the input key with the request generation, so every new attempt (a new
//! key, a return to an earlier key, or a retry) gets a fresh boundary.

mod intent;
mod reducer;
mod state;

pub use intent::BoundaryIntent;
pub use reducer::BoundaryReducer;
pub use state::{BoundaryState, ResetKey};

use crate::fetch::RequestState;
use crate::lookup::LookupError;
use crate::ui::mvi::Reducer;
use crate::view::{select_view, View};

/// Something the boundary can render.
pub trait Component {
    fn render(&self) -> Result<View, LookupError>;
}

impl Component for RequestState {
    fn render(&self) -> Result<View, LookupError> {
        select_view(self)
    }
}

type ErrorHandler = Box<dyn Fn(&LookupError) + Send>;

#[derive(Default)]
pub struct ErrorBoundary {
    state: BoundaryState,
    handlers: Vec<ErrorHandler>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler called once per caught error.
    pub fn on_error<F>(&mut self, handler: F)
    where
        F: Fn(&LookupError) + Send + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Reinitialise when `key` differs from the key seen last.
    pub fn reset_keys(&mut self, key: ResetKey) {
        self.dispatch(BoundaryIntent::ResetKey { key });
    }

    /// Render `child`, substituting the fallback on failure.
    pub fn render<C: Component + ?Sized>(&mut self, child: &C) -> View {
        if let Some(error) = self.state.error() {
            return View::fallback(error);
        }

        match child.render() {
            Ok(view) => view,
            Err(error) => {
                for handler in &self.handlers {
                    handler(&error);
                }
                let view = View::fallback(&error);
                self.dispatch(BoundaryIntent::Catch { error });
                view
            }
        }
    }

    fn dispatch(&mut self, intent: BoundaryIntent) {
        self.state = BoundaryReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
