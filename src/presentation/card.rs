use crate::domain::EntryDirection;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Where a card sits inside the area it is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    /// A short strip along the top right corner.
    Toast,
}

impl Placement {
    /// Sheets sit against the edge they slide in from.
    pub fn for_direction(direction: EntryDirection) -> Self {
        match direction {
            EntryDirection::None => Placement::Center,
            EntryDirection::Top => Placement::Top,
            EntryDirection::Bottom => Placement::Bottom,
            EntryDirection::Left => Placement::Left,
            EntryDirection::Right => Placement::Right,
        }
    }

    pub fn frame(self, area: Rect) -> Rect {
        match self {
            Placement::Center => Rect {
                x: area.x + area.width / 5,
                y: area.y + area.height / 4,
                width: area.width * 3 / 5,
                height: area.height / 2,
            },
            Placement::Top => Rect {
                height: area.height / 3,
                ..area
            },
            Placement::Bottom => Rect {
                y: area.y + area.height - area.height / 3,
                height: area.height / 3,
                ..area
            },
            Placement::Left => Rect {
                width: area.width / 3,
                ..area
            },
            Placement::Right => Rect {
                x: area.x + area.width - area.width / 3,
                width: area.width / 3,
                ..area
            },
            Placement::Toast => {
                let width = area.width.min(40);
                Rect {
                    x: area.x + area.width - width,
                    y: area.y,
                    width,
                    height: area.height.min(3),
                }
            }
        }
    }
}

/// Boxed text panel used as layer content by the demo.
#[derive(Debug, Clone)]
pub struct Card {
    title: String,
    body: String,
    placement: Placement,
    accent: Color,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            placement: Placement::Center,
            accent: Color::Cyan,
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for Card {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = self.placement.frame(area);
        Clear.render(frame, buf);
        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title)
                    .style(Style::default().fg(self.accent)),
            )
            .style(Style::default().fg(Color::White))
            .render(frame, buf);
    }
}
