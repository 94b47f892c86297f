pub use self::{arena_display::*, fitness_chart::*, scoreboard_display::*};

mod arena_display;
mod fitness_chart;
mod scoreboard_display;

mod color {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const NET: Style = fg_bg(color::GRAY, color::BLACK);
    pub const LEFT_PADDLE: Style = fg_bg(color::CYAN, color::BLACK);
    pub const RIGHT_PADDLE: Style = fg_bg(color::MAGENTA, color::BLACK);
    pub const BALL: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const HELP: Style = Style::new().fg(color::GRAY);
    pub const PAUSED_BORDER: Style = fg_bg(color::YELLOW, color::BLACK);

    pub const BEST_FITNESS: Style = Style::new().fg(color::CYAN);
    pub const SMOOTHED_FITNESS: Style = Style::new().fg(color::YELLOW);
    pub const MEAN_FITNESS: Style = Style::new().fg(color::GREEN);
}
