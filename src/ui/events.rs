use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::fetch::{CompletionReceiver, FetchCompletion};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A lookup finished (possibly for a superseded key).
    Lookup(FetchCompletion),
}

/// Multiplexes terminal input, the animation tick and lookup completions
/// onto the single-threaded event loop.
pub struct EventHandler {
    terminal: EventStream,
    tick: Interval,
    completions: CompletionReceiver,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, completions: CompletionReceiver) -> Self {
        let mut tick = interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            terminal: EventStream::new(),
            tick,
            completions,
        }
    }

    /// Wait for the next event. `None` once terminal input has ended.
    pub async fn next(&mut self) -> Option<AppEvent> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Some(AppEvent::Tick),
                Some(completion) = self.completions.recv() => {
                    return Some(AppEvent::Lookup(completion));
                }
                event = self.terminal.next() => match event {
                    Some(Ok(Event::Key(key))) => return Some(AppEvent::Key(key)),
                    Some(Ok(Event::Resize(cols, rows))) => return Some(AppEvent::Resize(cols, rows)),
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "Terminal event stream failed");
                        return None;
                    }
                    None => return None,
                },
            }
        }
    }
}
