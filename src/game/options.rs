//! Per-round option sets: the target plus up to two random distractors.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::WordItem;

/// Distractors shown next to the target when the unit has enough words.
pub const DISTRACTORS: usize = 2;

/// Pick up to [`DISTRACTORS`] other words and shuffle them together with the
/// target. Units with fewer than three words simply get fewer options.
pub fn generate_options<R: Rng + ?Sized>(
    words: &[WordItem],
    target: &WordItem,
    rng: &mut R,
) -> Vec<WordItem> {
    let pool: Vec<&WordItem> = words.iter().filter(|w| w.id != target.id).collect();
    let mut options: Vec<WordItem> = pool
        .choose_multiple(rng, DISTRACTORS)
        .map(|w| (*w).clone())
        .collect();
    options.push(target.clone());
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(n: usize) -> Vec<WordItem> {
        (0..n)
            .map(|i| WordItem::new(format!("w{i}"), format!("词{i}"), format!("word {i}"), "⭐"))
            .collect()
    }

    #[test]
    fn exactly_one_target_among_three() {
        let all = words(6);
        let mut rng = StdRng::seed_from_u64(7);
        for target in &all {
            let opts = generate_options(&all, target, &mut rng);
            assert_eq!(opts.len(), 3);
            assert_eq!(opts.iter().filter(|o| o.id == target.id).count(), 1);
            let mut ids: Vec<_> = opts.iter().map(|o| o.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 3, "options must be distinct");
        }
    }

    #[test]
    fn short_units_degrade_to_fewer_options() {
        let one = words(1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_options(&one, &one[0], &mut rng), one);

        let two = words(2);
        let opts = generate_options(&two, &two[1], &mut rng);
        assert_eq!(opts.len(), 2);
        assert!(opts.iter().any(|o| o.id == "w0"));
        assert!(opts.iter().any(|o| o.id == "w1"));
    }

    #[test]
    fn same_seed_gives_same_options() {
        let all = words(8);
        let a = generate_options(&all, &all[3], &mut StdRng::seed_from_u64(42));
        let b = generate_options(&all, &all[3], &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
