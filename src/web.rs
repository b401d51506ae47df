//! Browser surface. JS owns the camera, the pose model and all drawing; it
//! hands each frame's landmarks in as JSON and renders from the JSON reports
//! and snapshots handed back.
//!
//! Frame JSON is an array of persons, each an array of landmarks
//! (`[[{"x":..,"y":..,"z":..,"visibility":..}, ...], ...]`, nose first).

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::GameConfig;
use crate::content::{GameUnit, starter_unit};
use crate::error::Result;
use crate::game::GameSession;
use crate::landmarks::Person;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn parse_frame(frame_json: &str) -> Result<Vec<Person>> {
    if frame_json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(frame_json)?)
}

/// One game running in the page.
#[wasm_bindgen]
pub struct JumpGame {
    session: GameSession,
    rng: StdRng,
    tracker_ready: bool,
}

impl JumpGame {
    fn build(unit_json: &str, num_players: usize, config: GameConfig, rng: StdRng) -> Result<Self> {
        let unit: GameUnit = serde_json::from_str(unit_json)?;
        let mut rng = rng;
        let session = GameSession::new(unit, num_players, config, &mut rng)?;
        Ok(Self {
            session,
            rng,
            tracker_ready: true,
        })
    }

    fn tick_frame(&mut self, frame_json: &str, now_ms: f64) -> Result<String> {
        let report = if self.tracker_ready {
            let persons = parse_frame(frame_json)?;
            self.session.tick(&persons, now_ms, &mut self.rng)
        } else {
            // Model still loading: keep feedback timers running, skip hit testing.
            crate::game::TickReport {
                events: self.session.fire_due(now_ms, &mut self.rng).into_iter().collect(),
                heads: vec![None; self.session.num_players()],
            }
        };
        Ok(serde_json::to_string(&report)?)
    }

    fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.session.snapshot())?)
    }

    fn exit_json(&mut self) -> Result<String> {
        Ok(serde_json::to_string(&self.session.exit())?)
    }
}

#[wasm_bindgen]
impl JumpGame {
    /// Start a game on a unit (JSON snapshot) with default tuning.
    #[wasm_bindgen(constructor)]
    pub fn new(unit_json: &str, num_players: usize) -> std::result::Result<JumpGame, JsValue> {
        Self::build(unit_json, num_players, GameConfig::default(), StdRng::from_entropy())
            .map_err(to_js)
    }

    /// Like `new`, with tuning overrides given as (partial) config JSON.
    pub fn with_config(
        unit_json: &str,
        num_players: usize,
        config_json: &str,
    ) -> std::result::Result<JumpGame, JsValue> {
        let config: GameConfig = serde_json::from_str(config_json).map_err(to_js)?;
        Self::build(unit_json, num_players, config, StdRng::from_entropy()).map_err(to_js)
    }

    /// Feed one frame; returns the tick report as JSON.
    pub fn tick(&mut self, frame_json: &str, now_ms: f64) -> std::result::Result<String, JsValue> {
        self.tick_frame(frame_json, now_ms).map_err(to_js)
    }

    /// `tick` stamped with `performance.now()`.
    pub fn tick_now(&mut self, frame_json: &str) -> std::result::Result<String, JsValue> {
        self.tick_frame(frame_json, performance_now()).map_err(to_js)
    }

    pub fn snapshot(&self) -> std::result::Result<String, JsValue> {
        self.snapshot_json().map_err(to_js)
    }

    /// Leave the game; returns the exit event JSON.
    pub fn exit(&mut self) -> std::result::Result<String, JsValue> {
        self.exit_json().map_err(to_js)
    }

    pub fn restart(&mut self) {
        self.session.restart(&mut self.rng);
    }

    #[wasm_bindgen(getter)]
    pub fn tracker_ready(&self) -> bool {
        self.tracker_ready
    }

    #[wasm_bindgen(setter)]
    pub fn set_tracker_ready(&mut self, ready: bool) {
        self.tracker_ready = ready;
    }
}

/// Built-in unit as JSON, for the unit picker's first run.
#[wasm_bindgen]
pub fn starter_unit_json() -> std::result::Result<String, JsValue> {
    serde_json::to_string(&starter_unit()).map_err(to_js)
}
