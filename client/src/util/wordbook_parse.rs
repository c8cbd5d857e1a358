//! Interpretation of the wordbook service's chat replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wordbook backend is a chat bot: every command goes out as
//! `{"message": ...}` and comes back as free text meant for people, in English
//! or Chinese, often decorated with bullets, emoji and `**bold**` labels. This
//! module turns those replies into typed cards and stats where it can and
//! leaves everything else as a plain message.

#[cfg(test)]
#[path = "wordbook_parse_test.rs"]
mod wordbook_parse_test;

use crate::net::types::wordbook::{WordCard, WordbookStats};

/// Outbound chat command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Review,
    Stats,
    Add(String),
    Remember(String),
    Forget(String),
}

impl Command {
    /// Text sent to the chat endpoint.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Review => "review".to_owned(),
            Self::Stats => "stats".to_owned(),
            Self::Add(word) => format!("add {word}"),
            Self::Remember(word) => format!("remember {word}"),
            Self::Forget(word) => format!("forget {word}"),
        }
    }

    /// Parse typed input such as `add serendipity`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };
        let word = || (!rest.is_empty()).then(|| rest.to_owned());
        match verb.to_lowercase().as_str() {
            "review" if rest.is_empty() => Some(Self::Review),
            "stats" if rest.is_empty() => Some(Self::Stats),
            "add" => word().map(Self::Add),
            "remember" => word().map(Self::Remember),
            "forget" => word().map(Self::Forget),
            _ => None,
        }
    }
}

/// A classified reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Card(WordCard),
    Stats(WordbookStats),
    NothingDue,
    Added { word: String },
    Message(String),
}

const NOTHING_DUE: &[&str] = &[
    "no words due",
    "no word due",
    "nothing to review",
    "nothing due",
    "没有需要复习",
    "没有待复习",
    "暂无需要复习",
    "暂无待复习",
];

const ADDED_ZH: &[&str] = &["已添加", "已加入", "添加成功"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Word,
    Phonetic,
    Meaning,
    Example,
    ReviewCount,
    NextReview,
    Total,
    Due,
    Learned,
    Streak,
}

fn field(label: &str) -> Option<Field> {
    let field = match label {
        "word" | "单词" | "词" => Field::Word,
        "phonetic" | "pronunciation" | "音标" => Field::Phonetic,
        "meaning" | "definition" | "释义" | "意思" | "词义" => Field::Meaning,
        "example" | "例句" => Field::Example,
        "reviews" | "review count" | "复习次数" => Field::ReviewCount,
        "next review" | "next" | "下次复习" => Field::NextReview,
        "total" | "total words" | "总数" | "词汇量" | "总词数" => Field::Total,
        "due" | "due today" | "待复习" | "今日待复习" => Field::Due,
        "learned" | "mastered" | "已掌握" => Field::Learned,
        "streak" | "streak days" | "连续" | "连续天数" | "连续打卡" => Field::Streak,
        _ => return None,
    };
    Some(field)
}

/// Split a decorated line into `(label, value)`.
///
/// Leading bullets, numbering and emoji are dropped, `**` / `__` emphasis is
/// removed, and both `:` and `：` separate the label from its value. The label
/// is lowercased; lines without a non-empty value yield `None`.
#[must_use]
pub fn split_label(line: &str) -> Option<(String, String)> {
    let cleaned = line.replace("**", "").replace("__", "");
    let mut rest = cleaned.trim_start_matches(|c: char| !c.is_alphanumeric());
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(after) = rest[digits..].strip_prefix(['.', ')', '、']) {
            rest = after.trim_start_matches(|c: char| !c.is_alphanumeric());
        }
    }
    let (label, value) = rest.split_once([':', '：'])?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some((label.trim().to_lowercase(), value.to_owned()))
}

fn fields(text: &str) -> Vec<(Field, String)> {
    text.lines()
        .filter_map(split_label)
        .filter_map(|(label, value)| field(&label).map(|f| (f, value)))
        .collect()
}

/// First run of ASCII digits in `value`, e.g. `12` in `12 words`.
fn leading_number(value: &str) -> Option<u32> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let digits: String = value[start..].chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Parse a review card. Both a word and a meaning are required.
#[must_use]
pub fn parse_card(text: &str) -> Option<WordCard> {
    let mut card = WordCard::default();
    for (field, value) in fields(text) {
        match field {
            Field::Word => card.word = value,
            Field::Phonetic => card.phonetic = Some(value),
            Field::Meaning => card.meaning = value,
            Field::Example => card.example = Some(value),
            Field::ReviewCount => card.review_count = leading_number(&value),
            Field::NextReview => card.next_review = Some(value),
            _ => {}
        }
    }
    (!card.word.is_empty() && !card.meaning.is_empty()).then_some(card)
}

/// Parse a stats reply. A total is required; missing counters read as zero.
#[must_use]
pub fn parse_stats(text: &str) -> Option<WordbookStats> {
    let mut stats = WordbookStats::default();
    let mut saw_total = false;
    for (field, value) in fields(text) {
        let Some(n) = leading_number(&value) else {
            continue;
        };
        match field {
            Field::Total => {
                stats.total = n;
                saw_total = true;
            }
            Field::Due => stats.due_today = n,
            Field::Learned => stats.learned = n,
            Field::Streak => stats.streak_days = Some(n),
            _ => {}
        }
    }
    saw_total.then_some(stats)
}

/// Text between the first pair of quotes, if any.
fn quoted(text: &str) -> Option<String> {
    const PAIRS: &[(char, char)] = &[('"', '"'), ('“', '”'), ('「', '」'), ('『', '』'), ('\'', '\''), ('`', '`')];
    PAIRS.iter().find_map(|&(open, close)| {
        let start = text.find(open)? + open.len_utf8();
        let len = text[start..].find(close)?;
        let inner = text[start..start + len].trim();
        (!inner.is_empty()).then(|| inner.to_owned())
    })
}

/// Byte offset of `word` in `line` as a whole ASCII-case-insensitive word.
fn find_word(line: &str, word: &str) -> Option<usize> {
    let lower = line.to_ascii_lowercase();
    let is_word_char = |c: char| c.is_alphanumeric() || c == '-';
    lower.match_indices(word).map(|(at, _)| at).find(|&at| {
        let before = lower[..at].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after = lower[at + word.len()..].chars().next().map_or(true, |c| !is_word_char(c));
        before && after
    })
}

/// Whether `line` reports a newly added word. A labelled card line such as
/// `Word: padded` never does.
fn announces_added(line: &str) -> bool {
    if split_label(line).is_some_and(|(label, _)| field(&label).is_some()) {
        return false;
    }
    find_word(line, "added").is_some() || ADDED_ZH.iter().any(|m| line.contains(m))
}

/// Word following an English "added", e.g. `Added serendipity to ...`.
fn word_after_added(line: &str) -> Option<String> {
    let at = find_word(line, "added")? + "added".len();
    line.get(at..)?
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .find(|w| !w.is_empty() && !w.eq_ignore_ascii_case("word"))
        .map(str::to_owned)
}

/// Classify a chat reply.
#[must_use]
pub fn classify_reply(text: &str) -> Reply {
    let lower = text.to_lowercase();
    if NOTHING_DUE.iter().any(|p| lower.contains(p)) {
        return Reply::NothingDue;
    }

    let first_line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or_default();
    if announces_added(first_line) {
        let word = parse_card(text)
            .map(|c| c.word)
            .or_else(|| quoted(first_line))
            .or_else(|| word_after_added(first_line));
        if let Some(word) = word {
            return Reply::Added { word };
        }
    }

    if let Some(card) = parse_card(text) {
        return Reply::Card(card);
    }
    if let Some(stats) = parse_stats(text) {
        return Reply::Stats(stats);
    }
    Reply::Message(text.trim().to_owned())
}
