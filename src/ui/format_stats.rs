use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Tabs, Wrap};

use crate::model::{
    BattingSummary, BowlingSummary, FieldingSummary, FormatStats, OpponentStats,
    best_bowling_wickets, display_number, display_text, high_score_runs,
};
use crate::theme::Palette;

pub const BATTING_OPPONENT_HEADER: [&str; 7] = [
    "Opponent",
    "Matches",
    "Runs",
    "Average",
    "50s",
    "100s",
    "High Score",
];

pub const BOWLING_OPPONENT_HEADER: [&str; 6] = [
    "Opponent",
    "Matches",
    "Wickets",
    "Average",
    "Best",
    "Economy",
];

const CHART_WIDTH: u16 = 30;

pub fn batting_lines(batting: &BattingSummary) -> Vec<String> {
    vec![
        format!(
            "Matches: {}, Innings: {}, Runs: {}",
            display_number(batting.matches),
            display_number(batting.innings),
            display_number(batting.runs)
        ),
        format!(
            "Average: {}, Strike Rate: {}",
            display_number(batting.average),
            display_number(batting.strike_rate)
        ),
        format!(
            "50s: {}, 100s: {}, High Score: {}",
            display_number(batting.fifties),
            display_number(batting.hundreds),
            display_text(batting.high_score.as_deref())
        ),
    ]
}

pub fn bowling_lines(bowling: &BowlingSummary) -> Vec<String> {
    vec![
        format!(
            "Matches: {}, Innings Bowled: {}, Wickets: {}",
            display_number(bowling.matches),
            display_number(bowling.innings_bowled),
            display_number(bowling.wickets)
        ),
        format!(
            "Average: {}, Economy: {}",
            display_number(bowling.average),
            display_number(bowling.economy)
        ),
        format!(
            "Best: {}, 4W: {}, 5W: {}",
            display_text(bowling.best.as_deref()),
            display_number(bowling.four_wicket_hauls),
            display_number(bowling.five_wicket_hauls)
        ),
    ]
}

pub fn fielding_line(fielding: &FieldingSummary) -> String {
    format!(
        "Catches: {}, Stumpings: {}, Run Outs: {}",
        display_number(fielding.catches),
        display_number(fielding.stumpings),
        display_number(fielding.run_outs)
    )
}

pub fn batting_opponent_rows(rows: &[OpponentStats]) -> Vec<[String; 7]> {
    rows.iter()
        .map(|row| {
            [
                display_text(row.opponent.as_deref()),
                display_number(row.matches),
                display_number(row.runs),
                display_number(row.average),
                display_number(row.fifties),
                display_number(row.hundreds),
                display_text(row.high_score.as_deref()),
            ]
        })
        .collect()
}

pub fn bowling_opponent_rows(rows: &[OpponentStats]) -> Vec<[String; 6]> {
    rows.iter()
        .map(|row| {
            [
                display_text(row.opponent.as_deref()),
                display_number(row.matches),
                display_number(row.wickets),
                display_number(row.average),
                display_text(row.best.as_deref()),
                display_number(row.economy),
            ]
        })
        .collect()
}

/// High score per opponent, for the batting chart.
pub fn batting_chart_points(rows: &[OpponentStats]) -> Vec<(String, u64)> {
    rows.iter()
        .map(|row| {
            (
                display_text(row.opponent.as_deref()),
                high_score_runs(row.high_score.as_deref().unwrap_or_default()),
            )
        })
        .collect()
}

/// Wickets in the best figures per opponent, for the bowling chart.
pub fn bowling_chart_points(rows: &[OpponentStats]) -> Vec<(String, u64)> {
    rows.iter()
        .map(|row| {
            (
                display_text(row.opponent.as_deref()),
                best_bowling_wickets(row.best.as_deref().unwrap_or_default()),
            )
        })
        .collect()
}

pub fn render_format_stats(
    frame: &mut Frame,
    area: Rect,
    format_names: &[String],
    selected: usize,
    current: Option<(String, &FormatStats)>,
    scroll: u16,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let tabs = Tabs::new(format_names.iter().map(|name| Line::from(name.clone())))
        .select(selected)
        .style(palette.base)
        .highlight_style(palette.highlight)
        .divider("|")
        .block(
            Block::default()
                .title("Stats by Format (←/→)")
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(tabs, chunks[0]);

    let Some((name, stats)) = current else {
        let empty = Paragraph::new("No format statistics").style(palette.muted);
        frame.render_widget(empty, chunks[1]);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    render_summaries(frame, columns[0], &name, stats, palette);

    let sides = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let batting_rows = batting_opponent_rows(&stats.batting_vs_opponents)
        .into_iter()
        .map(|cells| cells.to_vec())
        .collect::<Vec<_>>();
    render_opponent_section(
        frame,
        sides[0],
        OpponentSection {
            title: "Batting vs Opponents",
            chart_title: "High Score",
            header: &BATTING_OPPONENT_HEADER,
            widths: &[
                Constraint::Min(12),
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(10),
            ],
            rows: batting_rows,
            points: batting_chart_points(&stats.batting_vs_opponents),
            color: palette.batting,
        },
        scroll,
        palette,
    );

    let bowling_rows = bowling_opponent_rows(&stats.bowling_vs_opponents)
        .into_iter()
        .map(|cells| cells.to_vec())
        .collect::<Vec<_>>();
    render_opponent_section(
        frame,
        sides[1],
        OpponentSection {
            title: "Bowling vs Opponents",
            chart_title: "Best (wkts)",
            header: &BOWLING_OPPONENT_HEADER,
            widths: &[
                Constraint::Min(12),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(7),
            ],
            rows: bowling_rows,
            points: bowling_chart_points(&stats.bowling_vs_opponents),
            color: palette.bowling,
        },
        scroll,
        palette,
    );
}

fn render_summaries(frame: &mut Frame, area: Rect, name: &str, stats: &FormatStats, palette: &Palette) {
    let mut lines = vec![Line::from(Span::styled("Batting", palette.heading))];
    lines.extend(
        batting_lines(&stats.batting)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, palette.base))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Bowling", palette.heading)));
    lines.extend(
        bowling_lines(&stats.bowling)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, palette.base))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Fielding", palette.heading)));
    lines.push(Line::from(Span::styled(
        fielding_line(&stats.fielding),
        palette.base,
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!("{name} Stats"))
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(paragraph, area);
}

struct OpponentSection<'a> {
    title: &'a str,
    chart_title: &'a str,
    header: &'a [&'a str],
    widths: &'a [Constraint],
    rows: Vec<Vec<String>>,
    points: Vec<(String, u64)>,
    color: Color,
}

fn render_opponent_section(
    frame: &mut Frame,
    area: Rect,
    section: OpponentSection<'_>,
    scroll: u16,
    palette: &Palette,
) {
    let block = Block::default()
        .title(section.title)
        .borders(Borders::ALL)
        .border_style(palette.border);

    if section.rows.is_empty() {
        let empty = Paragraph::new("No opponent breakdown")
            .style(palette.muted)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(CHART_WIDTH)])
        .split(inner);

    let skip = (scroll as usize).min(section.rows.len().saturating_sub(1));
    let header = Row::new(section.header.iter().map(|h| h.to_string()))
        .style(palette.accent.add_modifier(Modifier::BOLD));
    let rows = section
        .rows
        .into_iter()
        .skip(skip)
        .enumerate()
        .map(|(idx, cells)| {
            let style = if idx % 2 == 0 { palette.base } else { palette.muted };
            Row::new(cells).style(style)
        });
    let table = Table::new(rows, section.widths.to_vec())
        .header(header)
        .style(palette.base);
    frame.render_widget(table, cols[0]);

    let chart_points = section.points.into_iter().skip(skip).collect::<Vec<_>>();
    let chart = opponent_bar_chart(section.chart_title, &chart_points, section.color, palette);
    frame.render_widget(chart, cols[1]);
}

fn opponent_bar_chart<'a>(
    title: &'a str,
    points: &[(String, u64)],
    color: Color,
    palette: &Palette,
) -> BarChart<'a> {
    let bars = points
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(short_label(label)))
                .text_value(value.to_string())
                .style(Style::default().fg(color))
        })
        .collect::<Vec<_>>();
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    BarChart::default()
        .block(Block::default().title(title).style(palette.muted))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max)
        .value_style(palette.base)
}

fn short_label(label: &str) -> String {
    label.chars().take(6).collect()
}
