//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use super::board::{Board, board_rows};
use crate::core::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Screen regions, shared with mouse hit-testing
struct Regions {
    header: Rect,
    board: Rect,
    legend: Rect,
    messages: Rect,
    status: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Legend / error
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        board: chunks[1],
        legend: chunks[2],
        messages: chunks[3],
        status: chunks[4],
    }
}

fn board_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Board ")
}

/// Where the tiles are drawn for a screen of size `area`
#[must_use]
pub fn board_area(area: Rect) -> Rect {
    board_block().inner(regions(area).board)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let regions = regions(f.area());

    render_header(f, app, regions.header);
    render_board(f, app, regions.board);
    render_legend(f, app, regions.legend);
    render_messages(f, app, regions.messages);
    render_status(f, app, regions.status);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🧟 ZOMBORDLE · {}", app.setup.puzzle.label()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = board_block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = board_rows(&app.state, &app.input);
    f.render_widget(Board::new(&rows), inner);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.state.status() {
        GameStatus::Won => (
            "🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit".to_string(),
            Color::Green,
        ),
        GameStatus::Lost => (
            format!(
                "The word was {} | Press 'n' for new game or 'q' to quit",
                app.state.correct_word.to_uppercase()
            ),
            Color::Red,
        ),
        GameStatus::Playing if !app.state.error.is_empty() => {
            (format!("{} | {}", app.guess_legend(), app.state.error), Color::Red)
        }
        GameStatus::Playing => (app.guess_legend(), Color::Yellow),
    };

    let legend = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if app.state.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Esc: Leave row | Ctrl+N: Restart | Ctrl+C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
