//! Board tiles
//!
//! Pure mapping from guesses to tiles, plus the ratatui widgets that draw
//! them. Nothing in here holds state or reacts to events.

use crate::core::{GameStatus, GuessState, TileState};
use crate::input::TiledInput;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const TILE_WIDTH: u16 = 5;
pub const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;

/// One letter cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
    pub focused: bool,
}

impl Tile {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            letter: None,
            state: TileState::Empty,
            focused: false,
        }
    }

    fn colors(self) -> (Color, Color) {
        match self.state {
            TileState::Correct => (Color::Green, Color::Black),
            TileState::Present => (Color::Yellow, Color::Black),
            TileState::Absent => (Color::DarkGray, Color::White),
            TileState::Pending | TileState::Empty => (Color::Reset, Color::White),
        }
    }
}

impl Widget for Tile {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (bg, fg) = self.colors();
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else if self.state == TileState::Pending {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        block.render(area, buf);

        let letter = self
            .letter
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default();
        Paragraph::new(letter)
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
            .render(inner, buf);
    }
}

/// Pad `guess` with blanks to `length` and make one tile per position
///
/// With `states`, tiles take the scored state; otherwise typed letters are
/// `Pending` and blanks are `Empty`.
#[must_use]
pub fn tile_row(guess: &str, length: usize, states: Option<&[TileState]>) -> Vec<Tile> {
    let mut letters = guess.chars();
    (0..length)
        .map(|i| {
            let letter = letters.next().filter(|c| !c.is_whitespace());
            let state = match (states.and_then(|s| s.get(i)), letter) {
                (Some(&state), _) => state,
                (None, Some(_)) => TileState::Pending,
                (None, None) => TileState::Empty,
            };
            Tile {
                letter,
                state,
                focused: false,
            }
        })
        .collect()
}

/// Every row on the board: submitted guesses, the row being typed, then
/// empty rows up to the attempt limit
#[must_use]
pub fn board_rows(state: &GuessState, input: &TiledInput) -> Vec<Vec<Tile>> {
    let length = state.word_length();
    let mut rows: Vec<Vec<Tile>> = state
        .guesses
        .iter()
        .zip(state.scored_guesses())
        .map(|(guess, scored)| tile_row(guess, length, Some(&scored)))
        .collect();

    if state.status() == GameStatus::Playing {
        let mut current = tile_row(&input.value(), length, None);
        if let Some(tile) = input.focused().and_then(|i| current.get_mut(i)) {
            tile.focused = true;
        }
        rows.push(current);
    }

    while rows.len() < state.max_attempts {
        rows.push(vec![Tile::empty(); length]);
    }

    rows
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st
#[must_use]
pub fn ordinal_suffix(n: usize) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Grid geometry for `rows` rows of `length` tiles centered in `area`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    area: Rect,
    origin_x: u16,
    origin_y: u16,
}

impl BoardGeometry {
    #[must_use]
    pub fn new(area: Rect, length: usize, rows: usize) -> Self {
        let width = (length as u16).saturating_mul(TILE_WIDTH + TILE_GAP).saturating_sub(TILE_GAP);
        let height = (rows as u16).saturating_mul(TILE_HEIGHT);
        Self {
            area,
            origin_x: area.x + area.width.saturating_sub(width) / 2,
            origin_y: area.y + area.height.saturating_sub(height) / 2,
        }
    }

    /// Rectangle for tile (`row`, `col`), clipped to the board area
    #[must_use]
    pub fn tile_rect(&self, row: usize, col: usize) -> Rect {
        let x = self.origin_x.saturating_add((col as u16).saturating_mul(TILE_WIDTH + TILE_GAP));
        let y = self.origin_y.saturating_add((row as u16).saturating_mul(TILE_HEIGHT));
        Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(self.area)
    }

    /// Column of the tile under (`x`, `y`) in `row`, if any
    #[must_use]
    pub fn column_at(&self, row: usize, length: usize, x: u16, y: u16) -> Option<usize> {
        (0..length).find(|&col| {
            let rect = self.tile_rect(row, col);
            !rect.is_empty()
                && x >= rect.x
                && x < rect.x + rect.width
                && y >= rect.y
                && y < rect.y + rect.height
        })
    }
}

/// The whole grid of tiles
pub struct Board<'a> {
    rows: &'a [Vec<Tile>],
}

impl<'a> Board<'a> {
    #[must_use]
    pub const fn new(rows: &'a [Vec<Tile>]) -> Self {
        Self { rows }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let length = self.rows.first().map_or(0, Vec::len);
        let geometry = BoardGeometry::new(area, length, self.rows.len());

        for (r, row) in self.rows.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                let rect = geometry.tile_rect(r, c);
                if rect.width == TILE_WIDTH && rect.height == TILE_HEIGHT {
                    tile.render(rect, buf);
                }
            }
        }
    }
}
