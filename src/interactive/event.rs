use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::logging::log_error;

pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Polls the terminal on a background thread and forwards key presses and ticks.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || loop {
            let event = match event::poll(Duration::from_millis(tick_rate_ms)) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                    Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                    Ok(_) => None,
                    Err(e) => {
                        log_error(&format!("Failed to read terminal event: {}", e));
                        None
                    }
                },
                Ok(false) => Some(Event::Tick),
                Err(e) => {
                    log_error(&format!("Failed to poll terminal: {}", e));
                    Some(Event::Tick)
                }
            };

            if let Some(event) = event {
                if sender.send(event).is_err() {
                    break;
                }
            }
        });

        Self { receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
