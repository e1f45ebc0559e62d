use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use resume_parser_core::ResultPanel;
use resume_parser_core::render::RESULT_HEADING;

use crate::app::App;
use crate::view::spinner_char;

/// Render the extracted-information panel.
pub fn render_in(f: &mut Frame, app: &App, panel: &ResultPanel, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" {RESULT_HEADING} "));

    let paragraph = match panel {
        ResultPanel::Loading { message } => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {message}", spinner_char(app.tick)),
                Style::default().fg(theme.spinner),
            )),
        ])
        .alignment(Alignment::Center),
        ResultPanel::Fields(rows) => {
            let lines: Vec<Line> = rows
                .iter()
                .map(|row| {
                    let value_style = if row.is_missing() {
                        Style::default().fg(theme.dim)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    Line::from(vec![
                        Span::styled(
                            format!(" {:<17}", row.label),
                            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(row.value.as_str(), value_style),
                    ])
                })
                .collect();
            Paragraph::new(lines)
        }
        ResultPanel::Empty { title, subtitle } => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                *title,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*subtitle, Style::default().fg(theme.dim))),
        ])
        .alignment(Alignment::Center),
    };

    f.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
