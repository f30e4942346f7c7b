//! Stateless rendering of the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Position, SessionView, Side, TurnState};

use super::app::App;

/// Renders the board, status, difficulty and scores.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.game().view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Scores
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &view, app.cursor());

    let status = Paragraph::new(status_line(&view))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let scores = Paragraph::new(format!(
        "X wins: {}   O wins: {}   Draws: {}   Difficulty: {}",
        view.scores.x_wins(),
        view.scores.o_wins(),
        view.scores.draws(),
        view.difficulty,
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scores, chunks[3]);

    let help = Paragraph::new(
        "arrows/1-9 move · enter play · d difficulty · r restart · n new game · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn status_line(view: &SessionView) -> String {
    match view.state {
        TurnState::AwaitingHuman => "Your move (X)".to_string(),
        TurnState::AwaitingComputer => "O is thinking...".to_string(),
        TurnState::RoundOver => format!("{}  Press r to play again.", view.message),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        draw_row(frame, rows[chunk], view, cursor, row * 3);
        if chunk < 4 {
            draw_separator(frame, rows[chunk + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for offset in 0..3 {
        draw_cell(frame, cols[offset * 2], view, cursor, start + offset);
        if offset < 2 {
            draw_separator_vertical(frame, cols[offset * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, idx: usize) {
    let (symbol, base_style) = match view.cells[idx] {
        None => (format!("{}", idx + 1), Style::default().fg(Color::DarkGray)),
        Some(Side::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Side::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor.to_index() == idx && view.state == TurnState::AwaitingHuman {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in its 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
