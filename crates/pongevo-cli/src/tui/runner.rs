use std::time::Duration;

use crossterm::event::Event;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Terminal runtime for [`App`]s.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Runtime ticking `rate` times per second.
    pub fn with_tick_rate(rate: f64) -> Self {
        Self {
            events: EventLoop::new(Duration::from_secs_f64(1.0 / rate)),
        }
    }

    /// Runs `app` until it asks to exit.
    ///
    /// Input is polled until the next tick deadline, then the app is updated and redrawn.
    /// Resizes redraw immediately.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            terminal.draw(|f| app.draw(f))?;
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update();
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&event);
                        if matches!(event, Event::Resize(..)) {
                            terminal.draw(|f| app.draw(f))?;
                        }
                    }
                }
            }
            Ok(())
        })
    }
}
