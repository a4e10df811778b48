use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One-based book number, 1 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BookIndex(u8);

impl BookIndex {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 7;

    pub fn new(book: u8) -> ChartResult<Self> {
        if !(Self::FIRST..=Self::LAST).contains(&book) {
            return Err(ChartError::InvalidData(format!(
                "book index must be in {}..={}, got {book}",
                Self::FIRST,
                Self::LAST
            )));
        }
        Ok(Self(book))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = BookIndex> {
        (Self::FIRST..=Self::LAST).map(BookIndex)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0.checked_sub(1)?).ok()
    }
}

impl TryFrom<u8> for BookIndex {
    type Error = ChartError;

    fn try_from(value: u8) -> ChartResult<Self> {
        Self::new(value)
    }
}

impl From<BookIndex> for u8 {
    fn from(value: BookIndex) -> Self {
        value.0
    }
}

impl fmt::Display for BookIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spell category. Parsing is case-insensitive; unknown labels are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpellType {
    Charm,
    Curse,
    Hex,
    Jinx,
    Spell,
    Transfiguration,
    CounterCharm,
    Healing,
    Other(String),
}

impl SpellType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Charm => "Charm",
            Self::Curse => "Curse",
            Self::Hex => "Hex",
            Self::Jinx => "Jinx",
            Self::Spell => "Spell",
            Self::Transfiguration => "Transfiguration",
            Self::CounterCharm => "Counter-charm",
            Self::Healing => "Healing",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for SpellType {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "charm" => Self::Charm,
            "curse" => Self::Curse,
            "hex" => Self::Hex,
            "jinx" => Self::Jinx,
            "spell" => Self::Spell,
            "transfiguration" => Self::Transfiguration,
            "counter-charm" | "countercharm" | "counter charm" | "counter-spell" => {
                Self::CounterCharm
            }
            "healing" | "healing spell" => Self::Healing,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for SpellType {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<SpellType> for String {
    fn from(value: SpellType) -> Self {
        match value {
            SpellType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SpellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mentions of one spell within one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub spell: String,
    #[serde(rename = "type")]
    pub kind: SpellType,
    #[serde(default)]
    pub effect: String,
    pub mentions: u32,
}

impl SpellRecord {
    #[must_use]
    pub fn new(
        spell: impl Into<String>,
        kind: impl Into<SpellType>,
        effect: impl Into<String>,
        mentions: u32,
    ) -> Self {
        Self {
            spell: spell.into(),
            kind: kind.into(),
            effect: effect.into(),
            mentions,
        }
    }
}

/// One spell with its mentions summed over every book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueSpellRecord {
    pub spell: String,
    #[serde(rename = "type")]
    pub kind: SpellType,
    pub effect: String,
    pub mentions: u64,
}

impl From<&SpellRecord> for UniqueSpellRecord {
    fn from(record: &SpellRecord) -> Self {
        Self {
            spell: record.spell.clone(),
            kind: record.kind.clone(),
            effect: record.effect.clone(),
            mentions: u64::from(record.mentions),
        }
    }
}

/// Per-book spell lists, keyed by book in ascending order.
///
/// Deserializes from the article's static JSON shape, `{"1": [...], ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellCatalog {
    books: BTreeMap<BookIndex, Vec<SpellRecord>>,
}

impl SpellCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid spell catalog json: {err}")))
    }

    #[must_use]
    pub fn with_book(mut self, book: BookIndex, records: Vec<SpellRecord>) -> Self {
        self.insert_book(book, records);
        self
    }

    pub fn insert_book(&mut self, book: BookIndex, records: Vec<SpellRecord>) {
        self.books.insert(book, records);
    }

    /// Records for `book`; empty when the book has no data.
    #[must_use]
    pub fn book(&self, book: BookIndex) -> &[SpellRecord] {
        self.books
            .get(&book)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn books(&self) -> impl Iterator<Item = (BookIndex, &[SpellRecord])> {
        self.books
            .iter()
            .map(|(book, records)| (*book, records.as_slice()))
    }

    #[must_use]
    pub fn has_content(&self, book: BookIndex) -> bool {
        !self.book(book).is_empty()
    }
}

/// Display titles per book.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookTitles {
    titles: BTreeMap<BookIndex, String>,
}

impl BookTitles {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid book titles json: {err}")))
    }

    /// Titles of the seven-book series the article covers.
    #[must_use]
    pub fn series() -> Self {
        const TITLES: [&str; 7] = [
            "Philosopher's Stone",
            "Chamber of Secrets",
            "Prisoner of Azkaban",
            "Goblet of Fire",
            "Order of the Phoenix",
            "Half-Blood Prince",
            "Deathly Hallows",
        ];
        Self {
            titles: BookIndex::all()
                .zip(TITLES)
                .map(|(book, title)| (book, title.to_owned()))
                .collect(),
        }
    }

    pub fn insert(&mut self, book: BookIndex, title: impl Into<String>) {
        self.titles.insert(book, title.into());
    }

    #[must_use]
    pub fn title(&self, book: BookIndex) -> Option<&str> {
        self.titles.get(&book).map(String::as_str)
    }
}
