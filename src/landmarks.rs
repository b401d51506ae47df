//! Pose landmarks as delivered by the external pose model, and the sorter
//! that keeps player identity (P1 on the left) stable across frames.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Index of the nose in each person's landmark list.
pub const NOSE: usize = 0;

/// Horizontal position assumed for a person whose nose is missing.
const UNKNOWN_NOSE_X: f64 = 0.5;

/// Single tracked keypoint. Coordinates are normalized to the camera frame
/// (x grows to the right of the *unmirrored* image).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }
}

/// All landmarks detected for one person in one frame.
pub type Person = Vec<Landmark>;

pub fn nose(person: &[Landmark]) -> Option<&Landmark> {
    person.get(NOSE)
}

/// Mirrored on-screen x of a person's nose, `0.5` when the nose is absent.
fn screen_x(person: &[Landmark]) -> f64 {
    1.0 - nose(person).map_or(UNKNOWN_NOSE_X, |n| n.x)
}

/// Order persons left-to-right as they appear on the mirrored screen.
///
/// The sort is stable, so ties keep their input order and repeated calls on the
/// same frame always give the same result. The input is left untouched.
pub fn sort_players(persons: &[Person]) -> Vec<&Person> {
    let mut sorted: Vec<&Person> = persons.iter().collect();
    sorted.sort_by(|a, b| {
        screen_x(a)
            .partial_cmp(&screen_x(b))
            .unwrap_or(Ordering::Equal)
    });
    sorted
}
