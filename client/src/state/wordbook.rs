//! Wordbook review session state.
//!
//! DESIGN
//! ======
//! The wordbook page is a thin conversation with the wordbook bot. Each
//! command/reply pair is folded into this session so the page can show the
//! current card, the latest stats and a short transcript without re-parsing.

#[cfg(test)]
#[path = "wordbook_test.rs"]
mod wordbook_test;

use crate::net::types::wordbook::{WordCard, WordbookStats};
use crate::util::wordbook_parse::{Command, Reply};

/// Transcript entries kept for display.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exchange {
    pub command: String,
    pub reply: Reply,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordbookSession {
    pub current: Option<WordCard>,
    pub stats: Option<WordbookStats>,
    pub nothing_due: bool,
    pub notice: Option<String>,
    pub remembered: u32,
    pub forgotten: u32,
    pub history: Vec<Exchange>,
}

impl WordbookSession {
    /// Fold one command and its classified reply into the session.
    pub fn apply(&mut self, command: &Command, reply: Reply) {
        match command {
            Command::Remember(_) => {
                self.remembered += 1;
                self.current = None;
            }
            Command::Forget(_) => {
                self.forgotten += 1;
                self.current = None;
            }
            _ => {}
        }

        self.notice = None;
        match &reply {
            Reply::Card(card) => {
                self.current = Some(card.clone());
                self.nothing_due = false;
            }
            Reply::Stats(stats) => self.stats = Some(stats.clone()),
            Reply::NothingDue => {
                self.current = None;
                self.nothing_due = true;
            }
            Reply::Added { word } => self.notice = Some(format!("Added \"{word}\"")),
            Reply::Message(text) => self.notice = Some(text.clone()),
        }

        self.history.push(Exchange { command: command.message(), reply });
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    /// Word on the card being reviewed.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.word.as_str())
    }
}
