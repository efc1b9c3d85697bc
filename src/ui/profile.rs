use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{PlayerData, display_number, display_text};
use crate::state::Thumbnail;
use crate::theme::Palette;

pub const NO_IMAGE: &str = "no image";

/// Label/value pairs shown under the player's name.
pub fn profile_fields(data: &PlayerData, thumbnail: &Thumbnail) -> Vec<(&'static str, String)> {
    let profile = &data.player_profile;
    let info = &data.player_info;
    let teams = if profile.origin.teams.is_empty() {
        display_text(None)
    } else {
        profile.origin.teams.join(", ")
    };

    vec![
        ("Age (Jan 2025)", display_number(profile.age_as_of_jan_2025)),
        ("Role", display_text(info.role.as_deref())),
        ("Batting Style", display_text(info.batting_handedness.as_deref())),
        ("Bowling Style", display_text(info.bowling_style.as_deref())),
        ("Country", display_text(profile.origin.country.as_deref())),
        ("State", display_text(profile.origin.state.as_deref())),
        ("Teams", teams),
        ("Photo", photo_label(data, thumbnail)),
    ]
}

pub fn photo_label(data: &PlayerData, thumbnail: &Thumbnail) -> String {
    if let Some(url) = data
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        return url.to_string();
    }
    match thumbnail {
        Thumbnail::Found(url) => url.clone(),
        Thumbnail::Pending => "looking up…".to_string(),
        Thumbnail::Idle | Thumbnail::Missing => NO_IMAGE.to_string(),
    }
}

pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    data: &PlayerData,
    thumbnail: &Thumbnail,
    palette: &Palette,
) {
    let profile = &data.player_profile;
    let mut lines = vec![Line::from(Span::styled(
        display_text(profile.name.as_deref()),
        palette.heading,
    ))];
    if let Some(alias) = profile
        .also_known_as
        .as_deref()
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
    {
        lines.push(Line::from(Span::styled(format!("aka {alias}"), palette.accent)));
    }
    lines.push(Line::from(""));

    for (label, value) in profile_fields(data, thumbnail) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), palette.accent),
            Span::styled(value, palette.base),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Background", palette.heading)));
    lines.push(Line::from(Span::styled(
        display_text(profile.background.as_deref()),
        palette.base,
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Profile")
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(paragraph, area);
}
