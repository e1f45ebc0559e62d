use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::App;

/// Render the file picker screen.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let picker = &app.file_picker;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // current dir
        Constraint::Min(5),    // file list
        Constraint::Length(2), // current selection
        Constraint::Length(1), // footer
    ])
    .split(f.area());

    let header = Line::from(vec![
        Span::styled(" Files ", theme.header_style()),
        Span::styled(
            " > Select a resume (.pdf)",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let dir_line = Line::from(vec![
        Span::styled(" \u{1F4C1} ", Style::default().fg(theme.accent)),
        Span::styled(
            picker.current_dir.display().to_string(),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(dir_line), chunks[1]);

    // File list
    let visible_height = chunks[2].height.saturating_sub(2) as usize; // borders
    let scroll_offset = if picker.cursor >= visible_height {
        picker.cursor - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let (icon, style) = if entry.is_dir {
                ("\u{1F4C1} ", Style::default().fg(theme.accent))
            } else {
                ("\u{1F4C4} ", Style::default().fg(theme.text))
            };
            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(entry.name.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Files "),
        )
        .highlight_style(theme.highlight_style());

    let mut state = ListState::default();
    state.select(Some(picker.cursor.saturating_sub(scroll_offset)));
    f.render_stateful_widget(list, chunks[2], &mut state);

    let current = match app.workflow.selection() {
        Some(sel) => Line::from(vec![
            Span::styled(
                "  Selected: ",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled(sel.document.name.as_str(), Style::default().fg(theme.text)),
        ]),
        None => Line::from(Span::styled(
            "  No resume selected",
            Style::default().fg(theme.dim),
        )),
    };
    let summary = Paragraph::new(current).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style()),
    );
    f.render_widget(summary, chunks[3]);

    let footer = Line::from(Span::styled(
        " j/k:navigate  Enter:open dir / select PDF  Esc:back  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), chunks[4]);
}
