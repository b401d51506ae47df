//! Word lists grouped into playable units, plus the small library the
//! surrounding app edits between sessions.
//!
//! A running session never borrows from the library: it is built from a
//! [`GameUnit::snapshot`] so later edits do not leak into a round in progress.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// One vocabulary entry (target-language text, its translation and an emoji).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordItem {
    pub id: String,
    pub word: String,
    pub english: String,
    pub emoji: String,
    /// Reference to a recorded pronunciation (URL or storage key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_audio: Option<String>,
}

impl WordItem {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        english: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            english: english.into(),
            emoji: emoji.into(),
            sound_audio: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUnit {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub words: Vec<WordItem>,
}

impl GameUnit {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            color: color.into(),
            words: Vec::new(),
        }
    }

    /// A unit needs at least one word before a session can start on it.
    pub fn is_playable(&self) -> bool {
        !self.words.is_empty()
    }

    /// Word ids must be unique within a unit.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for w in &self.words {
            if !seen.insert(w.id.as_str()) {
                return Err(GameError::DuplicateId(w.id.clone()));
            }
        }
        Ok(())
    }

    pub fn word(&self, word_id: &str) -> Option<&WordItem> {
        self.words.iter().find(|w| w.id == word_id)
    }

    fn word_position(&self, word_id: &str) -> Result<usize> {
        self.words
            .iter()
            .position(|w| w.id == word_id)
            .ok_or_else(|| GameError::UnknownWord {
                unit_id: self.id.clone(),
                word_id: word_id.to_string(),
            })
    }

    /// Independent copy handed to a game session.
    pub fn snapshot(&self) -> GameUnit {
        self.clone()
    }
}

/// Ordered collection of units, editable while no session holds them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLibrary {
    units: Vec<GameUnit>,
}

impl UnitLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[GameUnit] {
        &self.units
    }

    pub fn playable_units(&self) -> impl Iterator<Item = &GameUnit> {
        self.units.iter().filter(|u| u.is_playable())
    }

    pub fn unit(&self, unit_id: &str) -> Option<&GameUnit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn unit_mut(&mut self, unit_id: &str) -> Result<&mut GameUnit> {
        self.units
            .iter_mut()
            .find(|u| u.id == unit_id)
            .ok_or_else(|| GameError::UnknownUnit(unit_id.to_string()))
    }

    pub fn add_unit(&mut self, unit: GameUnit) -> Result<()> {
        if self.unit(&unit.id).is_some() {
            return Err(GameError::DuplicateId(unit.id));
        }
        unit.validate()?;
        log::debug!("unit '{}' added with {} words", unit.id, unit.words.len());
        self.units.push(unit);
        Ok(())
    }

    pub fn remove_unit(&mut self, unit_id: &str) -> Result<GameUnit> {
        let idx = self
            .units
            .iter()
            .position(|u| u.id == unit_id)
            .ok_or_else(|| GameError::UnknownUnit(unit_id.to_string()))?;
        Ok(self.units.remove(idx))
    }

    pub fn add_word(&mut self, unit_id: &str, word: WordItem) -> Result<()> {
        let unit = self.unit_mut(unit_id)?;
        if unit.word(&word.id).is_some() {
            return Err(GameError::DuplicateId(word.id));
        }
        unit.words.push(word);
        Ok(())
    }

    /// Replace an existing word (matched by id) in place, keeping its position.
    pub fn update_word(&mut self, unit_id: &str, word: WordItem) -> Result<()> {
        let unit = self.unit_mut(unit_id)?;
        let idx = unit.word_position(&word.id)?;
        unit.words[idx] = word;
        Ok(())
    }

    pub fn remove_word(&mut self, unit_id: &str, word_id: &str) -> Result<WordItem> {
        let unit = self.unit_mut(unit_id)?;
        let idx = unit.word_position(word_id)?;
        Ok(unit.words.remove(idx))
    }

    /// Move the word at `from` so it ends up at index `to`.
    pub fn move_word(&mut self, unit_id: &str, from: usize, to: usize) -> Result<()> {
        let unit = self.unit_mut(unit_id)?;
        let len = unit.words.len();
        for index in [from, to] {
            if index >= len {
                return Err(GameError::IndexOutOfRange { index, len });
            }
        }
        let word = unit.words.remove(from);
        unit.words.insert(to, word);
        Ok(())
    }

    pub fn set_sound_audio(
        &mut self,
        unit_id: &str,
        word_id: &str,
        audio: Option<String>,
    ) -> Result<()> {
        let unit = self.unit_mut(unit_id)?;
        let idx = unit.word_position(word_id)?;
        unit.words[idx].sound_audio = audio;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: UnitLibrary = serde_json::from_str(json)?;
        // Re-insert through add_unit so duplicate ids are rejected on import too.
        let mut lib = UnitLibrary::new();
        for unit in parsed.units {
            lib.add_unit(unit)?;
        }
        Ok(lib)
    }
}

/// Build the built-in starter unit from [`crate::STARTER_WORDS`].
pub fn starter_unit() -> GameUnit {
    let mut unit = GameUnit::new("starter", "Fruit & Animals", "🍎", "#ff8a65");
    unit.words = crate::STARTER_WORDS
        .iter()
        .enumerate()
        .map(|(i, (word, english, emoji))| WordItem::new(format!("w{i}"), *word, *english, *emoji))
        .collect();
    unit
}
