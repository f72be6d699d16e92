//! UI rendering using ratatui
//!
//! One screen: header (level, score, goal), the letter grid beside the
//! found-word list, the word being built, feedback and key hints. A level
//! complete banner or the win screen is drawn over it when relevant.

use crate::app::{App, FeedbackKind};
use crate::game::grid::{Coord, SpecialTile};
use crate::game::round::RoundPhase;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Width of one rendered tile, in columns
const TILE_WIDTH: u16 = 4;

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.round().phase() == RoundPhase::CampaignComplete {
        render_win(frame, area, app);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with level, score, goal
            Constraint::Min(9),    // Board + found words
            Constraint::Length(1), // Current word
            Constraint::Length(1), // Feedback line
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_main(frame, layout[1], app);
    render_current_word(frame, layout[2], app);
    render_feedback(frame, layout[3], app);
    render_footer(frame, layout[4]);

    if app.round().phase() == RoundPhase::LevelComplete {
        render_level_complete(frame, layout[1], app);
    }
}

/// Render the header: title, level, score against goal
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Title
            Constraint::Min(10),    // Level
            Constraint::Length(20), // Score / goal
        ])
        .split(inner);

    let title = Paragraph::new("WORDGRID")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let progression = app.round().progression();
    let level = Paragraph::new(format!("Level {}", progression.level()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(level, header_layout[1]);

    let score_color = if progression.check_goal_reached() {
        Color::Green
    } else {
        Color::Magenta
    };
    let score = Paragraph::new(format_progress(progression.score(), progression.goal()))
        .style(Style::default().fg(score_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score, header_layout[2]);
}

/// Board on the left, found words on the right
fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(TILE_WIDTH * 5 + 4), // Board
            Constraint::Length(24),              // Found words
        ])
        .split(area);

    render_board(frame, horizontal_layout[0], app);
    render_found_words(frame, horizontal_layout[1], app);
}

fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.reveal_hidden { "Board (revealed)" } else { "Board" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    let Some(board) = app.round().board() else {
        frame.render_widget(block, area);
        return;
    };

    let found = app.found_hidden_coords();
    let revealed = app.revealed_coords();
    let selection = app.round().selection();

    let mut lines: Vec<Line> = Vec::new();
    for (y, row) in board.grid.rows().enumerate() {
        let spans: Vec<Span> = row
            .iter()
            .enumerate()
            .map(|(x, tile)| {
                let coord = Coord::new(x, y);
                let gold = tile.special == SpecialTile::Gold;
                let text = if gold {
                    format!(" {}* ", tile.letter)
                } else {
                    format!(" {}  ", tile.letter)
                };

                let mut style = Style::default().fg(Color::White);
                if gold {
                    style = style.fg(Color::Yellow).bold();
                }
                if revealed.contains(&coord) {
                    style = style.fg(Color::Magenta);
                }
                if found.contains(&coord) {
                    style = style.fg(Color::Green).bold();
                }
                if selection.contains(coord) {
                    style = style.bg(Color::Blue);
                }
                if coord == app.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(text, style)
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    frame.render_widget(grid, area);
}

/// Words credited this level, newest first
fn render_found_words(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.round().board();
    let items: Vec<ListItem> = app
        .round()
        .progression()
        .found_words()
        .iter()
        .rev()
        .map(|word| {
            let hidden = board.is_some_and(|b| b.is_hidden_word(word));
            let style = if hidden {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(word.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Found"),
    );
    frame.render_widget(list, area);
}

/// The word spelled by the current selection
fn render_current_word(frame: &mut Frame, area: Rect, app: &App) {
    let word = app.round().selection().current_word();
    let input = Paragraph::new(format!("> {}_", word)).style(Style::default().fg(Color::White));
    frame.render_widget(input, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(feedback_color(app.feedback_kind)));
    frame.render_widget(feedback, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(vec![
        Line::from("Arrows move  Space select  Backspace undo  Enter submit"),
        Line::from("Tab rotate  F2 reveal  Esc clear/quit  q quit"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}

/// Banner over the board once the goal is reached
fn render_level_complete(frame: &mut Frame, area: Rect, app: &App) {
    let progression = app.round().progression();
    let banner = centered(area, 34, 5);
    frame.render_widget(Clear, banner);

    let text = vec![
        Line::from(format!("Level {} complete!", progression.level())).bold(),
        Line::from(format_level_score(progression.score(), app.best_score)),
        Line::from("Press Enter to continue"),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, banner);
}

/// Shown when there is no next level
fn render_win(frame: &mut Frame, area: Rect, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(2), // Title
            Constraint::Length(1), // Levels cleared
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("You Win!")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[1]);

    let cleared = app.round().progression().level().saturating_sub(1);
    let summary = Paragraph::new(format!("Levels cleared: {}", cleared))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(summary, main_layout[2]);

    let instructions = Paragraph::new("Press q or Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, main_layout[4]);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn format_progress(score: u32, goal: u32) -> String {
    format!("Score: {} / {}", score, goal)
}

fn format_level_score(score: u32, best: Option<u32>) -> String {
    match best {
        Some(best) => format!("Score {}  Best {}", score, best),
        None => format!("Score {}", score),
    }
}

fn feedback_color(kind: FeedbackKind) -> Color {
    match kind {
        FeedbackKind::Info => Color::White,
        FeedbackKind::Good => Color::Green,
        FeedbackKind::Hidden => Color::Magenta,
        FeedbackKind::Bad => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(0, 10), "Score: 0 / 10");
        assert_eq!(format_progress(12, 10), "Score: 12 / 10");
    }

    #[test]
    fn test_format_level_score() {
        assert_eq!(format_level_score(18, None), "Score 18");
        assert_eq!(format_level_score(18, Some(25)), "Score 18  Best 25");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
        // Clamped when the area is smaller than requested
        assert_eq!(centered(Rect::new(2, 3, 6, 2), 10, 4), Rect::new(2, 3, 6, 2));
    }

    #[test]
    fn test_feedback_colors_differ() {
        assert_ne!(feedback_color(FeedbackKind::Good), feedback_color(FeedbackKind::Bad));
        assert_eq!(feedback_color(FeedbackKind::Hidden), Color::Magenta);
    }
}
