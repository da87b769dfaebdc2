use chrono::Utc;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::standings::top_clubs;
use crate::model::{Board, ClubGroup, GolferEntry, LoadState, format_time_ago, score_cell};
use crate::tv::app::App;
use crate::view::score::{TableRow, player_table_rows};

const NAME_WIDTH: usize = 28;

fn header_text(state: &LoadState) -> String {
    match state.board() {
        Some(board) => {
            let date = board.event.event_date.as_deref().unwrap_or("");
            format!("ALLIANCE LIVE | {} {}", board.event.title(), date)
        }
        None => "ALLIANCE LIVE".to_string(),
    }
}

fn footer_text(app: &App) -> String {
    let keys = match &app.engine {
        Some(engine) if engine.is_scrolling() => "Space Pause | Esc Exit TV | q Quit",
        Some(_) => "Space Play | Wheel Scroll | Esc Exit TV | q Quit",
        None => "t TV view | \u{2191}/\u{2193} PgUp/PgDn Scroll | q Quit",
    };
    match app.state.board() {
        Some(board) => format!(
            "{keys} | Last refresh: {}",
            format_time_ago(Utc::now() - board.refreshed_at)
        ),
        None => keys.to_string(),
    }
}

fn player_line(player: &GolferEntry) -> Line<'static> {
    let mut badges = String::new();
    if player.is_pro {
        badges.push_str(" PRO");
    }
    if player.is_senior {
        badges.push_str(" SNR");
    }
    if player.is_nit {
        badges.push_str(" NIT");
    }
    let name = format!("{}{badges}", player.name);
    let style = if player.has_scores {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("  {name:<NAME_WIDTH$}"), style),
        Span::styled(
            format!(
                "{:>5}{:>5}",
                score_cell(player.front_nine, player.has_scores),
                score_cell(player.back_nine, player.has_scores)
            ),
            style,
        ),
        Span::styled(
            format!("{:>7}", score_cell(player.total, player.has_scores)),
            style.add_modifier(Modifier::BOLD),
        ),
    ])
}

/// One club card as terminal lines: title, column header, rows, spacer.
#[must_use]
pub fn club_lines(group: &ClubGroup, top_four_divider: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} ({}/{})",
                group.club_name, group.players_with_scores, group.total_players
            ),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {:<NAME_WIDTH$}{:>5}{:>5}{:>7}", "PLAYER", "F9", "B9", "TOTAL"),
            Style::default().fg(Color::Gray),
        )),
    ];
    for row in player_table_rows(group, top_four_divider) {
        lines.push(match row {
            TableRow::Player(player) => player_line(player),
            TableRow::TopFourDivider => Line::from(Span::styled(
                format!("  {}", "-".repeat(NAME_WIDTH + 17)),
                Style::default().fg(Color::Yellow),
            )),
            TableRow::NitDivider => Line::from(Span::styled(
                format!("  {} Not in team", "=".repeat(NAME_WIDTH)),
                Style::default().fg(Color::Magenta),
            )),
        });
    }
    lines.push(Line::default());
    lines
}

/// Scrollable body of the board: every club card in board order.
#[must_use]
pub fn board_lines(board: &Board, top_four_divider: bool) -> Vec<Line<'static>> {
    if board.clubs.is_empty() {
        return vec![Line::from("No tee times or scores yet")];
    }
    board
        .clubs
        .iter()
        .flat_map(|club| club_lines(club, top_four_divider))
        .collect()
}

fn top_clubs_line(board: &Board) -> Line<'static> {
    let top = top_clubs(&board.standings);
    if top.is_empty() {
        return Line::from("No clubs have posted scores yet");
    }
    let mut spans = vec![Span::styled(
        "TOP CLUBS ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for standing in top {
        spans.push(Span::styled(
            format!(" {} ", standing.position_label()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(
            " {} {} ({}) ",
            standing.club_name, standing.total_points, standing.total_back9
        )));
    }
    Line::from(spans)
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

pub fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let footer = Paragraph::new(footer_text(app)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    let (strip, body) = match (&app.state, app.state.board()) {
        (LoadState::Loading, _) => (Line::from("Loading tournament data..."), Vec::new()),
        (state, Some(board)) => {
            let strip = match state.failure() {
                Some(failure) => Line::from(Span::styled(
                    failure.user_message(),
                    Style::default().fg(Color::Red),
                )),
                None => top_clubs_line(board),
            };
            (strip, board_lines(board, app.engine.is_some()))
        }
        (state, None) => {
            let message = state
                .failure()
                .map_or("Unable to load tournament data", |f| f.user_message());
            (
                Line::from(Span::styled(message, Style::default().fg(Color::Red))),
                Vec::new(),
            )
        }
    };
    frame.render_widget(
        Paragraph::new(strip).block(Block::default().borders(Borders::BOTTOM)),
        chunks[1],
    );

    render_body(frame, chunks[2], app, body);
}

fn render_body(frame: &mut Frame, area: Rect, app: &mut App, body: Vec<Line<'static>>) {
    let content_rows = body.len();
    let viewport = usize::from(area.height);

    let now_ms = app.now_ms();
    #[allow(clippy::cast_precision_loss)]
    let (content_height, container_height) = (content_rows as f64, viewport as f64);

    let (lines, first_row) = match app.engine.as_mut() {
        Some(engine) => {
            // Nothing worth measuring until the first board arrives.
            if content_rows > 0 && (engine.wants_measurement(now_ms) || engine.is_ready()) {
                engine.measure(content_height, container_height);
            }
            engine.frame(now_ms);
            let lines = if engine.copies() > 1 {
                let mut doubled = body.clone();
                doubled.extend(body);
                doubled
            } else {
                body
            };
            (lines, engine.first_visible_row())
        }
        None => {
            app.list_max = content_rows.saturating_sub(viewport);
            app.list_offset = app.list_offset.min(app.list_max);
            (body, app.list_offset)
        }
    };

    let paragraph = Paragraph::new(lines).scroll((to_u16(first_row), 0));
    frame.render_widget(paragraph, area);
}
