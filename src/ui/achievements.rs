use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::PLACEHOLDER;
use crate::theme::Palette;

pub fn achievement_lines(achievements: &[String]) -> Vec<String> {
    if achievements.is_empty() {
        return vec![PLACEHOLDER.to_string()];
    }
    achievements.iter().map(|item| format!("• {item}")).collect()
}

pub fn render_achievements(frame: &mut Frame, area: Rect, achievements: &[String], palette: &Palette) {
    let lines = achievement_lines(achievements)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, palette.base)))
        .collect::<Vec<_>>();
    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Achievements")
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(paragraph, area);
}
