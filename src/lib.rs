//! Word Jump core crate.
//!
//! Camera-driven vocabulary quiz: the player's nose landmark (from an external
//! pose model) places an avatar above their head, and jumping the avatar into
//! one of three hit zones selects a word. The gameplay core is plain Rust and
//! runs natively under `cargo test`; the `web` module wraps it for the browser.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod landmarks;
pub mod web;

pub use config::GameConfig;
pub use content::{GameUnit, UnitLibrary, WordItem, starter_unit};
pub use error::{GameError, Result};
pub use game::collision::{HeadPosition, Selection};
pub use game::layout::ZoneCenter;
pub use game::{GameEvent, GameSession, Outcome, Phase, SessionView, TickReport, Winner};
pub use landmarks::{Landmark, Person, sort_players};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).ok();
}

// -----------------------------------------------------------------------------
// Starter content: (word, english, emoji). Used for the built-in unit shown
// before the user has created any of their own.
// -----------------------------------------------------------------------------

pub const STARTER_WORDS: &[(&str, &str, &str)] = &[
    ("苹果", "apple", "🍎"), ("香蕉", "banana", "🍌"), ("葡萄", "grape", "🍇"),
    ("西瓜", "watermelon", "🍉"), ("草莓", "strawberry", "🍓"), ("橙子", "orange", "🍊"),
    ("猫", "cat", "🐱"), ("狗", "dog", "🐶"), ("鱼", "fish", "🐟"),
    ("鸟", "bird", "🐦"), ("兔子", "rabbit", "🐰"), ("熊猫", "panda", "🐼"),
];
