use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use word_jump::game::options::generate_options;
use word_jump::{
    GameConfig, GameSession, GameUnit, Landmark, Person, Phase, Selection, WordItem, ZoneCenter,
    sort_players,
};

fn unit(n: usize) -> GameUnit {
    let mut u = GameUnit::new("p", "Props", "🧪", "teal");
    u.words = (0..n)
        .map(|i| WordItem::new(format!("w{i}"), format!("词{i}"), format!("word {i}"), "⭐"))
        .collect();
    u
}

fn selection(option_id: &str, player_index: usize) -> Selection {
    Selection {
        option_id: option_id.to_string(),
        player_index,
        zone: ZoneCenter { x: 0.5, y: 0.3 },
    }
}

/// Random step applied to a session: pick option `n` (mod options) as player
/// `p`, or let `dt` milliseconds pass.
#[derive(Debug, Clone)]
enum Step {
    Pick { option: usize, player: usize },
    Wait { dt: f64 },
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0_usize..3, 0_usize..2).prop_map(|(option, player)| Step::Pick { option, player }),
        (0.0_f64..3000.0).prop_map(|dt| Step::Wait { dt }),
    ]
}

proptest! {
    #[test]
    fn pt_options_hold_target_exactly_once(n in 1_usize..12, target in 0_usize..12, seed in any::<u64>()) {
        let u = unit(n);
        let target = &u.words[target % n];
        let opts = generate_options(&u.words, target, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(opts.iter().filter(|o| o.id == target.id).count(), 1);
        prop_assert_eq!(opts.len(), n.min(3));
    }

    #[test]
    fn pt_session_invariants_hold(
        n in 1_usize..6,
        players in 1_usize..=2,
        steps in prop::collection::vec(step(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = GameSession::new(unit(n), players, GameConfig::default(), &mut rng).unwrap();
        let mut now = 0.0;
        for st in steps {
            let before_scores = s.scores().to_vec();
            let before_index = s.word_index();
            let before_phase = s.phase();
            let before_options = s.options().to_vec();
            let target = s.target().id.clone();

            match st {
                Step::Wait { dt } => {
                    now += dt;
                    s.tick(&[], now, &mut rng);
                    prop_assert!(s.word_index() >= before_index);
                }
                Step::Pick { option, player } => {
                    let id = s.options()[option % s.options().len()].id.clone();
                    let ev = s.select(&selection(&id, player), now);
                    prop_assert_eq!(s.word_index(), before_index);
                    if before_phase != Phase::Playing || player >= players {
                        prop_assert!(ev.is_none());
                        prop_assert_eq!(s.scores(), before_scores.as_slice());
                    } else if id == target {
                        let gained: u32 = s.scores().iter().sum::<u32>() - before_scores.iter().sum::<u32>();
                        prop_assert_eq!(gained, 1);
                        prop_assert_eq!(s.scores()[player], before_scores[player] + 1);
                    } else {
                        prop_assert_eq!(s.scores(), before_scores.as_slice());
                        prop_assert_eq!(s.options(), before_options.as_slice());
                        prop_assert_eq!(&s.target().id, &target);
                    }
                }
            }

            if s.phase() == Phase::Playing {
                prop_assert!(s.word_index() < n);
                prop_assert_eq!(s.options().iter().filter(|o| o.id == s.target().id).count(), 1);
            }
        }
    }

    #[test]
    fn pt_sorting_is_idempotent(xs in prop::collection::vec(0.0_f64..1.0, 0..6)) {
        let persons: Vec<Person> = xs.iter().map(|&x| vec![Landmark::new(x, 0.5, 0.0, 1.0)]).collect();
        let once: Vec<Person> = sort_players(&persons).into_iter().cloned().collect();
        let twice: Vec<Person> = sort_players(&once).into_iter().cloned().collect();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(sort_players(&persons), sort_players(&persons));
        for pair in once.windows(2) {
            prop_assert!(1.0 - pair[0][0].x <= 1.0 - pair[1][0].x);
        }
    }
}
