use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// The tick deadline has passed.
    Tick,
    /// Terminal input that arrived before the deadline.
    Crossterm(CrosstermEvent),
}
