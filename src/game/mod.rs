//! Jump-quiz gameplay: one session per unit run.
//!
//! The browser drives everything through [`GameSession::tick`] once per video
//! frame, passing the detected persons and a millisecond timestamp. Feedback
//! delays are plain deadlines checked on each tick, so a session that is exited
//! (or simply dropped) can never receive a late transition.
//!
//! Phase flow:
//! - `playing` -> `feedback_correct` -> `playing` on the next word, or `finished`
//! - `playing` -> `feedback_wrong` -> `playing` on the same word and options

pub mod collision;
pub mod layout;
pub mod options;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::content::{GameUnit, WordItem};
use crate::error::{GameError, Result};
use crate::landmarks::Person;

use collision::{HeadPosition, Selection, detect, track_heads};
use layout::{ZoneCenter, zone_center};
use options::generate_options;

pub const MAX_PLAYERS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    FeedbackCorrect,
    FeedbackWrong,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "player", rename_all = "snake_case")]
pub enum Winner {
    Player(usize),
    Tie,
}

/// Final result reported when the last word has been answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub scores: Vec<u32>,
    pub winner: Winner,
}

impl Outcome {
    fn from_scores(scores: &[u32]) -> Self {
        let best = scores.iter().copied().max().unwrap_or(0);
        let leaders: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] == best).collect();
        let winner = match leaders.as_slice() {
            [only] => Winner::Player(*only),
            _ => Winner::Tie,
        };
        Self {
            scores: scores.to_vec(),
            winner,
        }
    }
}

/// Discrete notifications for the presentation layer (sounds, confetti...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GameEvent {
    Correct {
        player_index: usize,
        option_id: String,
        zone: ZoneCenter,
    },
    Wrong {
        player_index: usize,
        option_id: String,
        zone: ZoneCenter,
    },
    /// Wrong-answer feedback ended; same word, same options.
    Retry { word_index: usize },
    RoundAdvanced { word_index: usize },
    Finished { outcome: Outcome },
    /// Session torn down; the caller should return to unit selection.
    Exited,
}

/// Everything one call to [`GameSession::tick`] produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Per player head (avatar) position; `None` while the player is not visible.
    pub heads: Vec<Option<HeadPosition>>,
}

impl TickReport {
    pub fn any_player_visible(&self) -> bool {
        self.heads.iter().any(Option::is_some)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Deferred {
    NextWord,
    Retry,
}

#[derive(Clone, Copy, Debug)]
struct PendingTransition {
    due_ms: f64,
    action: Deferred,
}

/// One option as the presentation layer draws it: the word plus its zone
/// center for each player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionView {
    pub word: WordItem,
    pub zones: Vec<ZoneCenter>,
}

/// Serializable picture of the session for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub unit_id: String,
    pub phase: Phase,
    pub num_players: usize,
    pub word_index: usize,
    pub total_words: usize,
    pub target: WordItem,
    pub options: Vec<OptionView>,
    pub scores: Vec<u32>,
    pub winning_player: Option<usize>,
    pub wrong_option_id: Option<String>,
    pub outcome: Option<Outcome>,
    pub closed: bool,
}

/// Running game over a snapshot of one unit.
#[derive(Clone, Debug)]
pub struct GameSession {
    unit: GameUnit,
    num_players: usize,
    config: GameConfig,
    phase: Phase,
    word_index: usize,
    options: Vec<WordItem>,
    scores: Vec<u32>,
    winning_player: Option<usize>,
    wrong_option: Option<String>,
    pending: Option<PendingTransition>,
    outcome: Option<Outcome>,
    closed: bool,
}

impl GameSession {
    /// Start a session on `unit` (taken by value, so later library edits are
    /// not observed). Fails for empty units, repeated word ids or unsupported
    /// player counts.
    pub fn new<R: Rng + ?Sized>(
        unit: GameUnit,
        num_players: usize,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self> {
        if !unit.is_playable() {
            return Err(GameError::EmptyUnit { unit_id: unit.id });
        }
        if !(1..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::UnsupportedPlayerCount(num_players));
        }
        unit.validate()?;
        let options = generate_options(&unit.words, &unit.words[0], rng);
        log::info!(
            "session started: unit '{}', {} words, {} player(s)",
            unit.id,
            unit.words.len(),
            num_players
        );
        Ok(Self {
            unit,
            num_players,
            config,
            phase: Phase::Playing,
            word_index: 0,
            options,
            scores: vec![0; num_players],
            winning_player: None,
            wrong_option: None,
            pending: None,
            outcome: None,
            closed: false,
        })
    }

    pub fn unit(&self) -> &GameUnit {
        &self.unit
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn target(&self) -> &WordItem {
        &self.unit.words[self.word_index]
    }

    pub fn options(&self) -> &[WordItem] {
        &self.options
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn winning_player(&self) -> Option<usize> {
        self.winning_player
    }

    pub fn wrong_option(&self) -> Option<&str> {
        self.wrong_option.as_deref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Zone centers of the current options as laid out for `player_index`.
    pub fn zones_for(&self, player_index: usize) -> Vec<ZoneCenter> {
        (0..self.options.len())
            .map(|i| {
                zone_center(
                    self.num_players,
                    player_index,
                    i,
                    self.options.len(),
                    self.config.zone_center_y,
                )
            })
            .collect()
    }

    /// Advance the session to `now_ms` and test the frame's persons.
    ///
    /// Due feedback transitions fire first; hit testing then runs only while
    /// the phase is `playing`.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        persons: &[Person],
        now_ms: f64,
        rng: &mut R,
    ) -> TickReport {
        if self.closed {
            return TickReport::default();
        }
        let mut report = TickReport {
            events: self.fire_due(now_ms, rng).into_iter().collect(),
            heads: track_heads(persons, self.num_players, &self.config),
        };
        if self.phase == Phase::Playing {
            let hits = detect(&report.heads, &self.options, &self.config);
            if let Some(selection) = self.pick_selection(hits) {
                report.events.extend(self.select(&selection, now_ms));
            }
        }
        report
    }

    /// Fire a scheduled transition whose deadline has passed, if any.
    /// Used directly while the landmark source is still loading.
    pub fn fire_due<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Option<GameEvent> {
        if self.closed {
            return None;
        }
        let pending = self.pending.filter(|p| now_ms >= p.due_ms)?;
        self.pending = None;
        Some(match pending.action {
            Deferred::Retry => {
                self.phase = Phase::Playing;
                self.wrong_option = None;
                GameEvent::Retry {
                    word_index: self.word_index,
                }
            }
            Deferred::NextWord => self.advance(rng),
        })
    }

    /// Of the simultaneous hits in one frame, a correct answer wins over a
    /// wrong one; otherwise the lowest player index goes first.
    fn pick_selection(&self, mut hits: Vec<Selection>) -> Option<Selection> {
        let target_id = &self.target().id;
        let correct = hits.iter().position(|s| &s.option_id == target_id);
        match correct {
            Some(idx) => Some(hits.swap_remove(idx)),
            None => hits.into_iter().next(),
        }
    }

    /// Apply one selection. Anything arriving outside `playing` (late frames,
    /// duplicates) or naming an option that is not on screen is ignored.
    pub fn select(&mut self, selection: &Selection, now_ms: f64) -> Option<GameEvent> {
        if self.closed || self.phase != Phase::Playing {
            return None;
        }
        if selection.player_index >= self.num_players
            || !self.options.iter().any(|o| o.id == selection.option_id)
        {
            return None;
        }

        if selection.option_id == self.target().id {
            self.phase = Phase::FeedbackCorrect;
            self.winning_player = Some(selection.player_index);
            self.scores[selection.player_index] += 1;
            self.pending = Some(PendingTransition {
                due_ms: now_ms + self.config.correct_delay_ms,
                action: Deferred::NextWord,
            });
            log::info!(
                "player {} answered '{}' correctly (score {})",
                selection.player_index + 1,
                self.target().word,
                self.scores[selection.player_index]
            );
            Some(GameEvent::Correct {
                player_index: selection.player_index,
                option_id: selection.option_id.clone(),
                zone: selection.zone,
            })
        } else {
            self.phase = Phase::FeedbackWrong;
            self.wrong_option = Some(selection.option_id.clone());
            self.pending = Some(PendingTransition {
                due_ms: now_ms + self.config.wrong_delay_ms,
                action: Deferred::Retry,
            });
            log::debug!(
                "player {} picked '{}', expected '{}'",
                selection.player_index + 1,
                selection.option_id,
                self.target().id
            );
            Some(GameEvent::Wrong {
                player_index: selection.player_index,
                option_id: selection.option_id.clone(),
                zone: selection.zone,
            })
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameEvent {
        self.winning_player = None;
        if self.word_index + 1 >= self.unit.words.len() {
            let outcome = Outcome::from_scores(&self.scores);
            log::info!("session finished: {:?}", outcome);
            self.phase = Phase::Finished;
            self.outcome = Some(outcome.clone());
            return GameEvent::Finished { outcome };
        }
        self.word_index += 1;
        self.options = generate_options(&self.unit.words, self.target(), rng);
        self.phase = Phase::Playing;
        log::debug!("advanced to word {}", self.word_index);
        GameEvent::RoundAdvanced {
            word_index: self.word_index,
        }
    }

    /// Tear the session down: scores and progress go back to their initial
    /// values, pending feedback is dropped and further ticks do nothing.
    pub fn exit(&mut self) -> GameEvent {
        self.phase = Phase::Playing;
        self.word_index = 0;
        self.options.clear();
        self.scores.iter_mut().for_each(|s| *s = 0);
        self.winning_player = None;
        self.wrong_option = None;
        self.pending = None;
        self.outcome = None;
        self.closed = true;
        log::info!("session on unit '{}' exited", self.unit.id);
        GameEvent::Exited
    }

    /// Reopen an exited (or finished) session from the first word.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.exit();
        self.options = generate_options(&self.unit.words, &self.unit.words[0], rng);
        self.closed = false;
    }

    pub fn snapshot(&self) -> SessionView {
        let per_player: Vec<Vec<ZoneCenter>> =
            (0..self.num_players).map(|p| self.zones_for(p)).collect();
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, word)| OptionView {
                word: word.clone(),
                zones: per_player.iter().map(|zones| zones[i]).collect(),
            })
            .collect();
        SessionView {
            unit_id: self.unit.id.clone(),
            phase: self.phase,
            num_players: self.num_players,
            word_index: self.word_index,
            total_words: self.unit.words.len(),
            target: self.target().clone(),
            options,
            scores: self.scores.clone(),
            winning_player: self.winning_player,
            wrong_option_id: self.wrong_option.clone(),
            outcome: self.outcome.clone(),
            closed: self.closed,
        }
    }
}
