//! Gameplay tunables. Distances are in normalized screen units ([0,1] on
//! both axes), delays in milliseconds on the same clock passed to `tick`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Collision radius around each zone center (single player).
    pub hit_radius: f64,
    /// Radius multiplier in two-player mode, where zones sit closer together.
    pub versus_radius_factor: f64,
    /// Upward offset from the nose to the avatar drawn above the head.
    pub head_offset_y: f64,
    /// Nose visibility must be strictly above this to count as tracked.
    pub min_visibility: f64,
    pub zone_center_y: f64,
    pub correct_delay_ms: f64,
    pub wrong_delay_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hit_radius: 0.1,
            versus_radius_factor: 0.8,
            head_offset_y: 0.12,
            min_visibility: 0.5,
            zone_center_y: 0.3,
            correct_delay_ms: 2000.0,
            wrong_delay_ms: 1000.0,
        }
    }
}

impl GameConfig {
    /// Effective collision threshold for the given number of players.
    pub fn hit_threshold(&self, num_players: usize) -> f64 {
        if num_players >= 2 {
            self.hit_radius * self.versus_radius_factor
        } else {
            self.hit_radius
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versus_threshold_is_scaled_down() {
        let cfg = GameConfig::default();
        assert!((cfg.hit_threshold(1) - 0.1).abs() < 1e-12);
        assert!((cfg.hit_threshold(2) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"hitRadius":0.2}"#).unwrap();
        assert!((cfg.hit_radius - 0.2).abs() < 1e-12);
        assert_eq!(cfg.correct_delay_ms, 2000.0);
        assert_eq!(cfg.wrong_delay_ms, 1000.0);
    }
}
