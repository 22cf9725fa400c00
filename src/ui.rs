use beehelp_core::{Role, Turn};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

const PLACEHOLDER: &str = "Enter a message";
const SUBMIT_LABEL: &str = " ↑ ";
const SUBMIT_WIDTH: u16 = 3;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, transcript, composer (grows with its content), footer
    let input_height = app.input_rows() as u16 + 2;
    let [header_area, body_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(input_height),
        Constraint::Length(1),
    ])
    .areas(area);

    // Store chat dimensions for scroll calculations (inner size minus borders)
    app.chat_height = body_area.height.saturating_sub(2);
    app.chat_width = body_area.width.saturating_sub(2);
    if app.follow_bottom {
        app.scroll_to_bottom();
        app.follow_bottom = false;
    } else {
        app.clamp_scroll();
    }

    render_header(frame, header_area);

    if app.session.is_empty() {
        app.chat_area = None;
        render_greeting(app, frame, body_area);
    } else {
        app.chat_area = Some(body_area);
        render_messages(app, frame, body_area);
    }

    render_composer(app, frame, input_area);
    render_footer(app, frame, footer_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" BeeHelp ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn render_greeting(app: &App, frame: &mut Frame, area: Rect) {
    let all_lines = app.greeting.lines();

    // Reserve room for every line so the block doesn't shift as lines appear
    let [_, center, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(all_lines.len() as u16 * 2),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, text) in all_lines
        .iter()
        .take(app.greeting_visible_lines())
        .enumerate()
    {
        let style = if i == 0 {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(text.to_string(), style)));
        lines.push(Line::default());
    }

    let greeting = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(greeting, center);
}

/// Message list lines: a role label, the content exactly as typed, and a blank spacer per turn
pub fn message_lines(turns: &[Turn]) -> Vec<Line<'static>> {
    let user_style = Style::default().fg(Color::White).bg(Color::Blue);
    let assistant_style = Style::default().fg(Color::Black).bg(Color::Gray);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for turn in turns {
        match turn.role() {
            Role::User => {
                lines.push(
                    Line::from(Span::styled(
                        "You",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ))
                    .right_aligned(),
                );
                for line in turn.content().split('\n') {
                    lines.push(
                        Line::from(Span::styled(line.to_string(), user_style)).right_aligned(),
                    );
                }
            }
            Role::Assistant => {
                lines.push(Line::from(Span::styled(
                    "BeeHelp",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                for line in turn.content().split('\n') {
                    lines.push(Line::from(Span::styled(line.to_string(), assistant_style)));
                }
            }
        }
        lines.push(Line::default());
    }
    lines
}

fn render_messages(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", app.greeting.title));

    let chat = Paragraph::new(Text::from(message_lines(app.session.turns())))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));

    frame.render_widget(chat, area);
}

fn render_composer(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Message ")
        .title_bottom(Line::from(" Submit ").right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width <= SUBMIT_WIDTH + 1 || inner.height == 0 {
        app.submit_area = None;
        return;
    }

    // Submit button sits in the bottom-right corner, text takes the rest
    let submit_area = Rect::new(
        inner.x + inner.width - SUBMIT_WIDTH,
        inner.y + inner.height - 1,
        SUBMIT_WIDTH,
        1,
    );
    let text_area = Rect::new(inner.x, inner.y, inner.width - SUBMIT_WIDTH - 1, inner.height);
    app.submit_area = Some(submit_area);

    let button_style = if app.session.can_submit() {
        Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(SUBMIT_LABEL).style(button_style), submit_area);

    // Scroll offsets that keep the cursor visible
    let (row, col) = app.cursor_row_col();
    let row_offset = (row + 1).saturating_sub(text_area.height as usize);
    let col_offset = (col + 1).saturating_sub(text_area.width as usize);

    let input = if app.pending().is_empty() {
        Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        let lines: Vec<Line> = app.pending().split('\n').map(Line::from).collect();
        Paragraph::new(Text::from(lines))
            .style(Style::default().fg(Color::Cyan))
            .scroll((row_offset as u16, col_offset as u16))
    };
    frame.render_widget(input, text_area);

    frame.set_cursor_position((
        text_area.x + (col - col_offset) as u16,
        text_area.y + (row - row_offset) as u16,
    ));
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = Style::default().bg(Color::Blue).fg(Color::White);

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints = vec![
        Span::styled(" Enter ", key_style),
        Span::styled(" send ", label_style),
        Span::styled(" Shift+Enter ", key_style),
        Span::styled(" newline ", label_style),
    ];
    if !app.session.is_empty() {
        hints.extend(vec![
            Span::styled(" PgUp/PgDn ", key_style),
            Span::styled(" scroll ", label_style),
        ]);
    }
    hints.extend(vec![
        Span::styled(" Esc ", key_style),
        Span::styled(" quit ", label_style),
    ]);

    let footer_content = Line::from(
        vec![
            Span::styled(" CHAT ", mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}
