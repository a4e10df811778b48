use serde::{Deserialize, Serialize};

use crate::render::Color;
use crate::spells::{SpellType, UniqueSpellRecord};

pub const SELECTED_OPACITY: f64 = 1.0;
pub const UNSELECTED_OPACITY: f64 = 0.4;
pub const TITLE_WITH_MENTIONS_OPACITY: f64 = 1.0;
pub const TITLE_WITHOUT_MENTIONS_OPACITY: f64 = 0.1;

pub const LIGHT_TEXT: Color = Color::rgb(1.0, 1.0, 1.0);
pub const DARK_TEXT: Color = Color::rgb(0.0, 0.0, 0.0);

/// Visual attributes of one entry in the spell list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleAttributes {
    pub opacity: f64,
    pub background: Option<Color>,
    pub text_color: Color,
}

/// Highlight color for a spell category.
#[must_use]
pub fn spell_type_color(kind: &SpellType) -> Color {
    match kind {
        SpellType::Charm => Color::rgb(0.965, 0.851, 0.459),
        SpellType::Curse => Color::rgb(0.804, 0.235, 0.235),
        SpellType::Hex => Color::rgb(0.557, 0.298, 0.667),
        SpellType::Jinx => Color::rgb(0.851, 0.451, 0.208),
        SpellType::Spell => Color::rgb(0.290, 0.533, 0.725),
        SpellType::Transfiguration => Color::rgb(0.255, 0.624, 0.478),
        SpellType::CounterCharm => Color::rgb(0.420, 0.600, 0.800),
        SpellType::Healing => Color::rgb(0.408, 0.745, 0.490),
        SpellType::Other(_) => Color::rgb(0.502, 0.502, 0.502),
    }
}

/// Resolves how a spell list entry is drawn for the current selection.
///
/// The selected entry is fully opaque on its category color; charms get
/// dark text on their light background. Everything else is dimmed.
#[must_use]
pub fn resolve_spell_style(record: &UniqueSpellRecord, selected: Option<&str>) -> StyleAttributes {
    let is_selected = selected == Some(record.spell.as_str());
    if !is_selected {
        return StyleAttributes {
            opacity: UNSELECTED_OPACITY,
            background: None,
            text_color: LIGHT_TEXT,
        };
    }

    StyleAttributes {
        opacity: SELECTED_OPACITY,
        background: Some(spell_type_color(&record.kind)),
        text_color: if record.kind == SpellType::Charm {
            DARK_TEXT
        } else {
            LIGHT_TEXT
        },
    }
}

/// Book titles fade out when the selected spell never appears in the book.
#[must_use]
pub fn book_title_opacity(mentions: u32) -> f64 {
    if mentions != 0 {
        TITLE_WITH_MENTIONS_OPACITY
    } else {
        TITLE_WITHOUT_MENTIONS_OPACITY
    }
}
