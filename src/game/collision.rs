//! Head-vs-zone hit testing for one frame.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::layout::{ZoneCenter, zone_center};
use crate::config::GameConfig;
use crate::content::WordItem;
use crate::landmarks::{Landmark, Person, nose, sort_players};

/// Point tested against the zones: the avatar drawn above a player's head,
/// in mirrored screen space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadPosition {
    pub x: f64,
    pub y: f64,
}

/// A player's head entered an option's zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub option_id: String,
    pub player_index: usize,
    pub zone: ZoneCenter,
}

/// Avatar position for a person, or `None` when the nose is missing or not
/// visible enough to trust.
pub fn head_position(person: &[Landmark], cfg: &GameConfig) -> Option<HeadPosition> {
    let n = nose(person)?;
    if n.visibility <= cfg.min_visibility {
        return None;
    }
    Some(HeadPosition {
        x: 1.0 - n.x,
        y: n.y - cfg.head_offset_y,
    })
}

/// Head position of each active player, P1 first. Players beyond the
/// detected persons (or not confidently tracked) are `None`.
pub fn track_heads(
    persons: &[Person],
    num_players: usize,
    cfg: &GameConfig,
) -> Vec<Option<HeadPosition>> {
    let sorted = sort_players(persons);
    (0..num_players)
        .map(|i| sorted.get(i).and_then(|p| head_position(p, cfg)))
        .collect()
}

/// Test every tracked player against every displayed option.
///
/// Yields at most one selection per player, in player order: the nearest zone
/// strictly inside the threshold. All players are evaluated before the caller
/// applies anything, so two players landing in the same frame both get reported.
pub fn detect(
    heads: &[Option<HeadPosition>],
    options: &[WordItem],
    cfg: &GameConfig,
) -> Vec<Selection> {
    let num_players = heads.len();
    let threshold = cfg.hit_threshold(num_players);
    let mut selections = Vec::new();

    for (player_index, head) in heads.iter().enumerate() {
        let Some(head) = head else { continue };

        let nearest = options
            .iter()
            .enumerate()
            .map(|(option_index, option)| {
                let zone = zone_center(
                    num_players,
                    player_index,
                    option_index,
                    options.len(),
                    cfg.zone_center_y,
                );
                (option, zone, zone.distance_to(head.x, head.y))
            })
            .filter(|&(_, _, dist)| dist < threshold)
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

        if let Some((option, zone, _)) = nearest {
            selections.push(Selection {
                option_id: option.id.clone(),
                player_index,
                zone,
            });
        }
    }
    selections
}
