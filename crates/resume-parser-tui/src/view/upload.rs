use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use resume_parser_core::RenderModel;
use resume_parser_core::render::{PreviewView, UPLOAD_HEADING};

use crate::app::{App, InputMode};
use crate::view::{format_size, spinner_char, truncate};

/// Render the upload panel: drop zone, preview toggle and panel, submit button.
pub fn render_in(f: &mut Frame, app: &App, model: &RenderModel, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" {UPLOAD_HEADING} "));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(5), // drop zone
        Constraint::Length(1), // preview toggle
        Constraint::Min(0),    // preview
        Constraint::Length(1), // submit
    ])
    .split(inner);

    // Drop zone
    let zone = &model.drop_zone;
    let width = chunks[0].width.saturating_sub(4) as usize;
    let label_style = if zone.has_selection {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let mut lines = vec![Line::from(Span::styled(truncate(&zone.label, width), label_style))];
    if app.input_mode == InputMode::DropPath {
        lines.push(Line::from(vec![
            Span::styled("Drop path: ", Style::default().fg(theme.drag)),
            Span::styled(
                format!("{}_", truncate(&app.drop_buffer, width.saturating_sub(12))),
                Style::default().fg(theme.text),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(zone.hint, Style::default().fg(theme.dim))));
    }
    let drop_zone = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.drop_zone_style(zone.drag_active, zone.has_selection)),
        );
    f.render_widget(drop_zone, chunks[0]);

    // Preview toggle
    if let Some(toggle) = &model.preview_toggle {
        let marker = if toggle.expanded { "\u{25BE}" } else { "\u{25B8}" };
        let line = Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(theme.accent)),
            Span::styled(
                toggle.label,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (p)", Style::default().fg(theme.dim)),
        ]);
        f.render_widget(Paragraph::new(line), chunks[1]);
    }

    if let Some(preview) = &model.preview {
        render_preview(f, app, preview, chunks[2]);
    }

    // Submit button
    let submit = &model.submit;
    let label = if submit.busy {
        format!(" {} {} ", spinner_char(app.tick), submit.label)
    } else {
        format!(" {} ", submit.label)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        label,
        theme.button_style(submit.enabled),
    )))
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[3]);
}

fn render_preview(f: &mut Frame, app: &App, preview: &PreviewView, area: Rect) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                preview.file_name.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} \u{b7} {}", preview.media_type, format_size(preview.size_bytes)),
                Style::default().fg(theme.dim),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(preview.fallback, Style::default().fg(theme.text))),
        Line::from(Span::styled(
            preview.url.as_str(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled("y: copy link", Style::default().fg(theme.dim))),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    f.render_widget(paragraph, area);
}
