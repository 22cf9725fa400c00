use beehelp_core::{Greeting, Session, SubmitTrigger, TriggerOutcome};
use ratatui::{
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::ui;

/// Maximum rows the composer grows to before it scrolls
pub const MAX_INPUT_LINES: usize = 5;

/// Ticks between greeting lines appearing
const GREETING_REVEAL_TICKS: u16 = 2;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub struct App {
    pub should_quit: bool,
    pub session: Session,
    pub greeting: Greeting,

    // Composer cursor, as a char index into the pending text
    pub cursor: usize,

    // Message list state
    pub chat_scroll: u16,
    pub chat_height: u16, // inner height, set during render
    pub chat_width: u16,  // inner width, set during render
    pub follow_bottom: bool, // snap to the newest turn on the next render

    // Greeting animation
    pub ticks: u16,

    // Areas for mouse hit-testing (updated during render)
    pub chat_area: Option<Rect>,
    pub submit_area: Option<Rect>,
}

impl App {
    pub fn new(session: Session, greeting: Greeting) -> Self {
        Self {
            should_quit: false,
            session,
            greeting,
            cursor: 0,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            follow_bottom: false,
            ticks: 0,
            chat_area: None,
            submit_area: None,
        }
    }

    pub fn pending(&self) -> &str {
        self.session.pending()
    }

    // Composer editing. Each edit hands the whole new value to the session.
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.session.pending().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor);
        text.insert(byte_pos, c);
        self.session.set_pending(text);
        self.cursor += 1;
    }

    /// Inserts pasted text at the cursor. Line endings become `\n` so a paste
    /// never reaches the submit path.
    pub fn insert_str(&mut self, pasted: &str) {
        let pasted = pasted.replace("\r\n", "\n").replace('\r', "\n");
        let mut text = self.session.pending().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor);
        text.insert_str(byte_pos, &pasted);
        self.session.set_pending(text);
        self.cursor += pasted.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let mut text = self.session.pending().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor);
        text.remove(byte_pos);
        self.session.set_pending(text);
    }

    pub fn delete(&mut self) {
        let mut text = self.session.pending().to_string();
        if self.cursor < text.chars().count() {
            let byte_pos = char_to_byte_index(&text, self.cursor);
            text.remove(byte_pos);
            self.session.set_pending(text);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.pending().chars().count();
        self.cursor = (self.cursor + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.pending().chars().count();
    }

    /// Cursor as (row, display column) within the pending text
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for c in self.pending().chars().take(self.cursor) {
            if c == '\n' {
                row += 1;
                col = 0;
            } else {
                col += c.width().unwrap_or(0);
            }
        }
        (row, col)
    }

    /// Rows the composer needs, capped at MAX_INPUT_LINES
    pub fn input_rows(&self) -> usize {
        self.pending().split('\n').count().clamp(1, MAX_INPUT_LINES)
    }

    /// Routes a submit trigger through the session and applies the outcome to the view.
    pub fn trigger(&mut self, trigger: SubmitTrigger) {
        match self.session.trigger(trigger) {
            TriggerOutcome::Submitted(submission) => {
                tracing::info!(
                    turns = self.session.transcript().len(),
                    reply_len = submission.assistant_turn.content().len(),
                    "message sent"
                );
                self.cursor = 0;
                self.scroll_to_bottom();
                self.follow_bottom = true;
            }
            TriggerOutcome::Ignored => {}
            TriggerOutcome::Passthrough => self.insert_char('\n'),
        }
    }

    pub fn tick(&mut self) {
        if self.session.is_empty() {
            self.ticks = self.ticks.saturating_add(1);
        }
    }

    /// How many greeting lines have been revealed so far
    pub fn greeting_visible_lines(&self) -> usize {
        (self.ticks / GREETING_REVEAL_TICKS) as usize + 1
    }

    // Message list scrolling
    fn wrap_width(&self) -> usize {
        if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        }
    }

    /// Rendered line count of the message list, wrapped the same way it is drawn
    pub fn chat_line_count(&self) -> u16 {
        let lines = ui::message_lines(self.session.turns());
        let count = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .line_count(self.wrap_width() as u16);
        u16::try_from(count).unwrap_or(u16::MAX)
    }

    fn max_chat_scroll(&self) -> u16 {
        let visible_height = if self.chat_height > 0 { self.chat_height } else { 20 };
        self.chat_line_count().saturating_sub(visible_height)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_add(lines).min(self.max_chat_scroll());
    }

    pub fn scroll_page_up(&mut self) {
        let page = (self.chat_height / 2).max(1);
        self.scroll_up(page);
    }

    pub fn scroll_page_down(&mut self) {
        let page = (self.chat_height / 2).max(1);
        self.scroll_down(page);
    }

    /// Pulls the scroll offset back in range after the view shrinks
    pub fn clamp_scroll(&mut self) {
        self.chat_scroll = self.chat_scroll.min(self.max_chat_scroll());
    }

    /// Keep the newest turn in view
    pub fn scroll_to_bottom(&mut self) {
        self.chat_scroll = self.max_chat_scroll();
    }
}
