use crossterm::event::{poll, Event, KeyEvent};
use tokio::time::Duration;

use crate::constants::TICK_INTERVAL_MS;

/// Polls the terminal for input, falling back to ticks when idle.
///
/// Ticks drive everything time-based: background action draining and
/// toast expiry.
pub struct EventHandler {
    tick_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }

    /// Duration of one idle tick.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) => {
                    return Ok(EventType::Key(key));
                }
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_interval).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
