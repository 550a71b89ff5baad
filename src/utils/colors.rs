//! Terminal palettes for the light and dark themes.

use ansi_term::{Colour, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub bar_fill: Style,
    pub bar_empty: Style,
    pub met: Style,
    pub not_met: Style,
    pub muted: Style,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            title: Colour::Blue.bold(),
            label: Style::new().fg(Colour::Black),
            value: Colour::Blue.bold(),
            bar_fill: Style::new().fg(Colour::Blue),
            bar_empty: Style::new().fg(Colour::Fixed(250)),
            met: Style::new().fg(Colour::Green),
            not_met: Style::new().fg(Colour::Red),
            muted: Style::new().fg(Colour::Fixed(244)),
        }
    }

    pub fn dark() -> Self {
        Self {
            title: Colour::Cyan.bold(),
            label: Style::new().fg(Colour::Fixed(255)),
            value: Colour::Cyan.bold(),
            bar_fill: Style::new().fg(Colour::Cyan),
            bar_empty: Style::new().fg(Colour::Fixed(238)),
            met: Style::new().fg(Colour::Fixed(120)),
            not_met: Style::new().fg(Colour::Fixed(210)),
            muted: Style::new().fg(Colour::Fixed(245)),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}
