use pongevo_engine::{Game, PaddleSide, Rect as GameRect};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use crate::ui::widgets::style;

/// Draws a [`Game`] scaled to fill the widget area.
#[derive(Debug)]
pub struct ArenaDisplay<'a> {
    game: &'a Game,
    block: Option<Block<'a>>,
}

impl<'a> ArenaDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game, block: None }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() {
            return;
        }
        buf.set_style(inner, style::DEFAULT);

        let config = self.game.config();
        let surface = Surface {
            area: inner,
            width: config.width,
            height: config.height,
        };

        let net_x = surface.column(config.width / 2);
        for y in (inner.top()..inner.bottom()).step_by(2) {
            if let Some(cell) = buf.cell_mut((net_x, y)) {
                cell.set_symbol("┊").set_style(style::NET);
            }
        }

        for side in PaddleSide::ALL {
            let paddle_style = match side {
                PaddleSide::Left => style::LEFT_PADDLE,
                PaddleSide::Right => style::RIGHT_PADDLE,
            };
            surface.fill(buf, self.game.paddle(side).rect(), "█", paddle_style);
        }
        surface.fill(buf, self.game.ball().rect(), "●", style::BALL);
    }
}

/// Maps game coordinates onto terminal cells.
#[derive(Debug, Clone, Copy)]
struct Surface {
    area: Rect,
    width: i32,
    height: i32,
}

impl Surface {
    fn column(&self, x: i32) -> u16 {
        self.area.x + scale(x, self.width, self.area.width)
    }

    fn row(&self, y: i32) -> u16 {
        self.area.y + scale(y, self.height, self.area.height)
    }

    /// Paints every cell covered by `rect`, at least one cell even for tiny entities.
    fn fill(&self, buf: &mut Buffer, rect: &GameRect, symbol: &str, style: Style) {
        let (left, right) = (self.column(rect.left()), self.column(rect.right() - 1));
        let (top, bottom) = (self.row(rect.top()), self.row(rect.bottom() - 1));
        for y in top..=bottom {
            for x in left..=right {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

/// Cell index of `value` when `extent` game units span `cells` cells, clamped to the last cell.
fn scale(value: i32, extent: i32, cells: u16) -> u16 {
    if extent <= 0 || cells == 0 {
        return 0;
    }
    let value = i64::from(value.clamp(0, extent - 1));
    let scaled = value * i64::from(cells) / i64::from(extent);
    u16::try_from(scaled).map_or(cells - 1, |cell| cell.min(cells - 1))
}

#[cfg(test)]
mod tests {
    use pongevo_engine::{Ball, GameConfig, MatchSeed, Velocity};

    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(scale(0, 700, 70), 0);
        assert_eq!(scale(15, 700, 70), 1);
        assert_eq!(scale(699, 700, 70), 69);
        assert_eq!(scale(700, 700, 70), 69);
        assert_eq!(scale(-30, 700, 70), 0);
        assert_eq!(scale(10, 700, 0), 0);
    }

    fn game() -> Game {
        let mut game = Game::with_seed(GameConfig::default(), MatchSeed::from_u64(0));
        game.set_ball(Ball::new(GameRect::new(300, 50, 30, 30), Velocity::new(7, 7)));
        game
    }

    #[test]
    fn test_render_scales_entities() {
        // 10 game units per column, 20 per row
        let area = Rect::new(0, 0, 70, 25);
        let mut buf = Buffer::empty(area);
        ArenaDisplay::new(&game()).render(area, &mut buf);

        // left paddle: x 10..20, y 180..320
        assert_eq!(buf[(1, 9)].symbol(), "█");
        assert_eq!(buf[(1, 15)].symbol(), "█");
        assert_ne!(buf[(1, 16)].symbol(), "█");
        // right paddle: x 680..690
        assert_eq!(buf[(68, 12)].symbol(), "█");
        // ball: x 300..330, y 50..80
        assert_eq!(buf[(30, 2)].symbol(), "●");
        assert_eq!(buf[(32, 3)].symbol(), "●");
        assert_ne!(buf[(33, 3)].symbol(), "●");
    }

    #[test]
    fn test_render_inside_block() {
        let area = Rect::new(0, 0, 72, 27);
        let mut buf = Buffer::empty(area);
        ArenaDisplay::new(&game())
            .block(Block::bordered())
            .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(2, 10)].symbol(), "█");
    }

    #[test]
    fn test_render_in_empty_area() {
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        ArenaDisplay::new(&game())
            .block(Block::bordered())
            .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }
}
