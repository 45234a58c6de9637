use crate::game::{Board, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a player's pieces.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Framed board with column numbers above and a cursor marker below.
/// Numbers of columns missing from `open` are dimmed.
pub fn board_lines(board: &Board, open: &[usize], selected_column: usize) -> Vec<Line<'static>> {
    let columns = board.columns();
    let inner = "═".repeat(columns * 3 + 1);
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers, padded to line up with "  ║"
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else if open.contains(&col) {
            col_line.push(Span::raw(label));
        } else {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in board.iter_rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for cell in row {
            let (symbol, color) = match cell {
                None => (" . ", Color::DarkGray),
                Some(player) => (" \u{25cf} ", player_color(*player)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
