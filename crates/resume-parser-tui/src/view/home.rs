use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use resume_parser_core::present;
use resume_parser_core::render::{FOOTER, SUBTITLE, TITLE};

use crate::app::App;

const MAX_BANNER_ROWS: u16 = 4;

/// Render the main screen: header, upload and result panels, error banner
/// and footer.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let model = present(&app.workflow);

    // Icon prefix takes three columns.
    let banner_rows = model.error_banner.as_deref().map_or(1, |message| {
        crate::view::wrapped_rows(message, f.area().width.saturating_sub(3), MAX_BANNER_ROWS)
    });

    let chunks = Layout::vertical([
        Constraint::Length(1),           // header
        Constraint::Min(10),             // panels
        Constraint::Length(banner_rows), // error banner
        Constraint::Length(1),           // footer
    ])
    .split(f.area());

    let header = Line::from(vec![
        Span::styled(format!(" {TITLE} "), theme.header_style()),
        Span::styled(format!("  {SUBTITLE}"), Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let panels = if chunks[1].width >= 90 {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1])
    } else {
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1])
    };
    crate::view::upload::render_in(f, app, &model, panels[0]);
    crate::view::result::render_in(f, app, &model.result, panels[1]);

    if let Some(message) = &model.error_banner {
        let banner = Line::from(vec![
            Span::styled(" \u{2716} ", theme.error_style()),
            Span::styled(message.as_str(), theme.error_style()),
        ]);
        f.render_widget(Paragraph::new(banner).wrap(Wrap { trim: true }), chunks[2]);
    }

    let hints = " o:browse  d:drop path  p:preview  Enter:extract  x:clear  y:copy link  ?:help  q:quit";
    let mut footer = vec![Span::styled(hints, theme.footer_style())];
    if let Some(notice) = &app.notice {
        footer.push(Span::styled(
            format!("   {notice}"),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ));
    } else {
        footer.push(Span::styled(format!("   {FOOTER}"), theme.footer_style()));
    }
    f.render_widget(Paragraph::new(Line::from(footer)), chunks[3]);
}
