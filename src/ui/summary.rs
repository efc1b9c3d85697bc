use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::display_text;
use crate::theme::Palette;

pub fn render_summary(frame: &mut Frame, area: Rect, summary: Option<&str>, palette: &Palette) {
    let paragraph = Paragraph::new(display_text(summary))
        .style(palette.base)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Summary")
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(paragraph, area);
}
