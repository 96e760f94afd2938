//! Stateless rendering of a [`GameView`].

mod board;

use keytac_engine::{EndReason, GameView, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use board::{draw_board, marker_color};

/// Title shown at the top of every frame.
pub const TITLE: &str = "### TIC-TAC-TOE ###";

/// Key help shown under the title while the game runs.
pub const INSTRUCTIONS: &str = "Arrow keys: move  |  Space: place marker  |  Q: quit";

const EXIT_HINT: &str = "Press any key to exit";

const TIE_ART: [&str; 5] = [
    " _____ ___ _____ ",
    "|_   _|_ _| ____|",
    "  | |  | ||  _|  ",
    "  | |  | || |___ ",
    "  |_| |___|_____|",
];

/// Renders one frame.
pub fn draw(frame: &mut Frame, view: &GameView<'_>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Instructions
            Constraint::Min(11),    // Board
            Constraint::Length(9),  // Status
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let help = if view.lifecycle.is_over() {
        EXIT_HINT
    } else {
        INSTRUCTIONS
    };
    let instructions = Paragraph::new(help)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, chunks[1]);

    let cursor = (!view.lifecycle.is_over()).then(|| view.cursor.cell());
    draw_board(frame, chunks[2], view.board, cursor);

    match view.lifecycle.end_reason() {
        None => draw_status(frame, chunks[3], view),
        Some(reason) => draw_banner(frame, chunks[3], reason),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            player_indicator(Player::X, view.turn),
            Span::raw("      "),
            player_indicator(Player::O, view.turn),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("Move {}", view.move_count + 1),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(notice) = view.notice {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Both players are always shown; the one to move blinks.
fn player_indicator(player: Player, turn: Player) -> Span<'static> {
    let label = format!("Player {}", player);
    let style = Style::default().fg(marker_color(player));
    if player == turn {
        Span::styled(
            format!("> {} <", label),
            style.add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        )
    } else {
        Span::styled(format!("  {}  ", label), style)
    }
}

fn draw_banner(frame: &mut Frame, area: Rect, reason: EndReason) {
    let highlight = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);

    let lines: Vec<Line> = match reason {
        EndReason::Winner(player) => vec![
            Line::default(),
            Line::default(),
            Line::from(Span::styled(format!("### Player {} wins ###", player), highlight)),
        ],
        EndReason::Tie => TIE_ART
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Yellow))))
            .chain(std::iter::once(Line::from(Span::styled(
                "### It's a tie. ###",
                highlight,
            ))))
            .collect(),
        // Quitting stops the screen without a final frame.
        EndReason::Quit => Vec::new(),
    };

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use keytac_engine::{Cell, Controller, Directive, GameState, InputEvent, Playable};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 26;

    fn render(view: &GameView<'_>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| draw(frame, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(WIDTH as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Steers to `index` (row-major) from anywhere, then selects.
    fn play(controller: &mut Controller, index: usize) -> Directive {
        let target = Cell::ALL[index];
        for _ in 0..2 {
            controller.handle_input(InputEvent::Move(keytac_engine::Direction::Up));
            controller.handle_input(InputEvent::Move(keytac_engine::Direction::Left));
        }
        for _ in 0..target.row() {
            controller.handle_input(InputEvent::Move(keytac_engine::Direction::Down));
        }
        for _ in 0..target.col() {
            controller.handle_input(InputEvent::Move(keytac_engine::Direction::Right));
        }
        controller.handle_input(InputEvent::Select)
    }

    fn new_controller() -> Controller {
        Controller::new(GameState::with_first_player(Player::X))
    }

    #[test]
    fn test_fresh_game_frame() {
        let controller = new_controller();
        let buffer = render(&controller.view());
        let screen = text(&buffer);

        assert!(screen.contains(TITLE));
        assert!(screen.contains(INSTRUCTIONS));
        assert!(screen.contains("> Player X <"));
        assert!(screen.contains("Player O"));
        assert!(screen.contains("Move 1"));
    }

    #[test]
    fn test_cursor_is_highlighted_and_active_player_blinks() {
        let controller = new_controller();
        let buffer = render(&controller.view());

        assert!(buffer.content().iter().any(|cell| cell.bg == Color::White));
        assert!(
            buffer
                .content()
                .iter()
                .any(|cell| cell.modifier.contains(Modifier::SLOW_BLINK))
        );
    }

    #[test]
    fn test_placed_marker_is_drawn() {
        let mut controller = new_controller();
        assert_eq!(play(&mut controller, 4), Directive::Redraw);
        let screen = text(&render(&controller.view()));

        assert!(
            screen
                .lines()
                .any(|line| line.contains('│') && line.contains('X'))
        );
        assert!(screen.contains("> Player O <"));
        assert!(screen.contains("Move 2"));
    }

    #[test]
    fn test_invalid_move_notice() {
        let mut controller = new_controller();
        play(&mut controller, 4);
        assert_eq!(
            controller.handle_input(InputEvent::Select),
            Directive::InvalidMove
        );
        let screen = text(&render(&controller.view()));
        assert!(screen.contains("is already occupied"));
    }

    #[test]
    fn test_win_banner() {
        let mut controller = new_controller();
        for index in [0, 3, 1, 4] {
            assert_eq!(play(&mut controller, index), Directive::Redraw);
        }
        assert_eq!(play(&mut controller, 2), Directive::Finish);

        let buffer = render(&controller.view());
        let screen = text(&buffer);
        assert!(screen.contains("### Player X wins ###"));
        assert!(screen.contains(EXIT_HINT));
        assert!(!screen.contains(INSTRUCTIONS));
        assert!(!buffer.content().iter().any(|cell| cell.bg == Color::White));
    }

    #[test]
    fn test_tie_banner() {
        let mut controller = new_controller();
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        for index in &moves[..8] {
            assert_eq!(play(&mut controller, *index), Directive::Redraw);
        }
        assert_eq!(play(&mut controller, moves[8]), Directive::Finish);

        let screen = text(&render(&controller.view()));
        assert!(screen.contains("### It's a tie. ###"));
        assert!(screen.contains(TIE_ART[1]));
    }

    #[test]
    fn test_quit_frame_has_empty_banner() {
        let mut controller = new_controller();
        assert_eq!(controller.handle_input(InputEvent::Quit), Directive::Stop);

        let screen = text(&render(&controller.view()));
        assert!(screen.contains(TITLE));
        assert!(!screen.contains("wins"));
        assert!(!screen.contains("tie"));
        assert!(!screen.contains("Player O"));
    }
}
