use crossterm::event::Event;
use ratatui::Frame;

/// An interactive screen driven by [`Tui::run`](super::Tui::run).
pub trait App {
    fn should_exit(&self) -> bool;

    /// Handles key input, resizes and other terminal events.
    fn handle_event(&mut self, event: &Event);

    /// Advances the application by one tick.
    fn update(&mut self);

    fn draw(&self, frame: &mut Frame);
}
