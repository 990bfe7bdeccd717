use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keystroke summary shown in the footer line.
pub const HELP_LINE: &str = "space run/pause | r reset | 0-6 0-6 add source | g random source | \
     z/x left sensor wire/inv | n/m right sensor wire/inv | k/l wheel inv | q quit";

/// Draws one frame: HUD line, field grid, help footer.
pub fn draw_ui(f: &mut Frame, grid_lines: Vec<String>, hud_info: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(0),    // Field
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let hud = Paragraph::new(Span::styled(
        hud_info,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    let text: Vec<Line> = grid_lines
        .into_iter()
        .map(|s| Line::from(Span::raw(s)))
        .collect();
    let field = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(field, chunks[1]);

    let help = Paragraph::new(Span::styled(
        HELP_LINE,
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(help, chunks[2]);
}
