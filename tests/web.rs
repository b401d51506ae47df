// Browser-side checks of the JS surface. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use word_jump::web::{JumpGame, starter_unit_json};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn starter_game_ticks_from_json() {
    let unit = starter_unit_json().unwrap();
    let mut game = JumpGame::new(&unit, 2).unwrap();
    let report = game.tick_now("[]").unwrap();
    assert!(report.contains("\"heads\":[null,null]"));
    assert!(game.snapshot().unwrap().contains("\"phase\":\"playing\""));
}

#[wasm_bindgen_test]
fn empty_unit_is_rejected() {
    let unit = r#"{"id":"e","title":"Empty","icon":"📭","color":"grey","words":[]}"#;
    assert!(JumpGame::new(unit, 1).is_err());
}

#[wasm_bindgen_test]
fn exit_returns_event() {
    let mut game = JumpGame::new(&starter_unit_json().unwrap(), 1).unwrap();
    assert_eq!(game.exit().unwrap(), r#"{"type":"exited"}"#);
    game.set_tracker_ready(false);
    assert!(!game.tracker_ready());
}
