use crate::config::Config;
use crate::lookup::Lookup;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run the interactive screen until the user quits.
///
/// Must be awaited on a current-thread runtime: lookups, input and redraws
/// all share one thread.
pub async fn run(
    config: &Config,
    lookup: Arc<dyn Lookup>,
    initial_name: Option<String>,
) -> anyhow::Result<()> {
    let (completions_tx, completions_rx) = mpsc::unbounded_channel();
    let mut app = App::new(lookup, completions_tx);
    if let Some(name) = initial_name {
        app.prefill(&name);
    }

    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(config.ui.tick_rate(), completions_rx);
    tracing::info!(backend = app.backend_name(), "UI started");

    loop {
        let view = app.view();
        terminal.draw(|frame| draw(frame, &app, &view))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Tick) => app.on_tick(),
            // Layout is recomputed from the frame size on the next draw.
            Some(AppEvent::Resize(_, _)) => {}
            Some(AppEvent::Lookup(completion)) => app.on_completion(completion),
            None => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
