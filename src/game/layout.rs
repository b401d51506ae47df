//! Screen placement of the option hit zones.
//!
//! Single player: three fixed columns. Versus: each player owns half the
//! screen (P1 left, P2 right) and gets its own three columns inside it.

use serde::{Deserialize, Serialize};

/// Fixed column centers for the usual three options in single-player mode.
const SINGLE_COLUMNS: [f64; 3] = [0.2, 0.5, 0.8];

/// Zone center in normalized screen space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneCenter {
    pub x: f64,
    pub y: f64,
}

impl ZoneCenter {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }
}

/// Center of the zone for `option_index` as seen by `player_index`.
///
/// Counts other than three options (short units) are spaced evenly across the
/// available width.
pub fn zone_center(
    num_players: usize,
    player_index: usize,
    option_index: usize,
    total_options: usize,
    center_y: f64,
) -> ZoneCenter {
    let total = total_options.max(1);
    let slot = (2 * option_index + 1) as f64 / (2 * total) as f64;
    let x = if num_players >= 2 {
        let half_start = if player_index == 0 { 0.0 } else { 0.5 };
        half_start + slot * 0.5
    } else if total == SINGLE_COLUMNS.len() && option_index < total {
        SINGLE_COLUMNS[option_index]
    } else {
        slot
    };
    ZoneCenter { x, y: center_y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_player_uses_fixed_columns() {
        let xs: Vec<f64> = (0..3).map(|i| zone_center(1, 0, i, 3, 0.3).x).collect();
        assert_eq!(xs, [0.2, 0.5, 0.8]);
        assert!(close(zone_center(1, 0, 1, 3, 0.3).y, 0.3));
    }

    #[test]
    fn versus_splits_screen_in_halves() {
        let p1: Vec<f64> = (0..3).map(|i| zone_center(2, 0, i, 3, 0.3).x).collect();
        let p2: Vec<f64> = (0..3).map(|i| zone_center(2, 1, i, 3, 0.3).x).collect();
        for (got, want) in p1.iter().zip([1.0 / 12.0, 3.0 / 12.0, 5.0 / 12.0]) {
            assert!(close(*got, want), "{got} != {want}");
        }
        for (got, want) in p2.iter().zip([7.0 / 12.0, 9.0 / 12.0, 11.0 / 12.0]) {
            assert!(close(*got, want), "{got} != {want}");
        }
    }

    #[test]
    fn short_option_lists_are_spaced_evenly() {
        assert!(close(zone_center(1, 0, 0, 1, 0.3).x, 0.5));
        assert!(close(zone_center(1, 0, 0, 2, 0.3).x, 0.25));
        assert!(close(zone_center(1, 0, 1, 2, 0.3).x, 0.75));
    }

    #[test]
    fn distance_is_euclidean() {
        let c = ZoneCenter { x: 0.5, y: 0.3 };
        assert!(close(c.distance_to(0.8, 0.7), 0.5));
    }
}
