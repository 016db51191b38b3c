//! Random rolls behind attack waves: stat tier, target city, spawn cell.
//!
//! All rolls draw from the game's single `ChaCha8Rng`, so a seed fully
//! determines every wave.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use salvo_core::constants::MAX_PROCESS_LEVEL;
use salvo_core::types::Position;

/// Pressure index 0..=4 from game progress and remaining enemy strength.
pub fn process_level(turn: u32, enemy_hitpoint: i32) -> usize {
    let from_hitpoint = (enemy_hitpoint.max(0) / 200).min(4) as usize;
    let from_turn = (turn / 100).min(4) as usize;
    (from_hitpoint + from_turn) / 2
}

/// Pick a stat tier. Every tier weighs 1.0 except the current process level,
/// which weighs 2.0.
pub fn pick_tier<R: Rng>(rng: &mut R, level: usize) -> usize {
    let level = level.min(MAX_PROCESS_LEVEL);
    let mut weights = [1.0_f64; MAX_PROCESS_LEVEL + 1];
    weights[level] += 1.0;
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => level,
    }
}

/// Whether a randomly drawn city is accepted as a target.
///
/// Strong cities are almost always accepted, weakened ones are rejected more
/// often. Destroyed cities are never targetable.
pub fn accept_target<R: Rng>(rng: &mut R, hitpoint: i32) -> bool {
    match hitpoint {
        hp if hp <= 0 => false,
        hp if hp > 1000 => true,
        hp if hp > 700 => !rng.gen_ratio(1, 8),
        hp if hp > 400 => !rng.gen_ratio(1, 4),
        hp if hp > 200 => !rng.gen_ratio(1, 3),
        _ => !rng.gen_ratio(1, 2),
    }
}

/// Uniform cell on one of the four board edges.
pub fn edge_position<R: Rng>(rng: &mut R, size: Position) -> Position {
    let height = size.y.max(1);
    let width = size.x.max(1);
    match rng.gen_range(0..4) {
        0 => Position::new(0, rng.gen_range(0..width)),
        1 => Position::new(height - 1, rng.gen_range(0..width)),
        2 => Position::new(rng.gen_range(0..height), 0),
        _ => Position::new(rng.gen_range(0..height), width - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn process_level_bounds() {
        assert_eq!(process_level(0, 0), 0);
        assert_eq!(process_level(0, 1000), 2);
        assert_eq!(process_level(1000, 5000), 4);
        assert_eq!(process_level(250, 400), 2);
        assert_eq!(process_level(0, -50), 0);
    }

    #[test]
    fn pick_tier_favors_process_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0u32; 5];
        for _ in 0..12_000 {
            counts[pick_tier(&mut rng, 3)] += 1;
        }
        // tier 3 has weight 2/6, the others 1/6
        assert!(counts[3] > 3_500, "counts: {counts:?}");
        for (i, &c) in counts.iter().enumerate() {
            if i != 3 {
                assert!(c > 1_600 && c < 2_400, "counts: {counts:?}");
            }
        }
    }

    #[test]
    fn dead_cities_never_accepted() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(!accept_target(&mut rng, 0));
            assert!(!accept_target(&mut rng, -10));
        }
    }

    #[test]
    fn strong_cities_always_accepted() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(accept_target(&mut rng, 1500));
        }
    }

    #[test]
    fn weak_cities_sometimes_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let accepted = (0..4000).filter(|_| accept_target(&mut rng, 150)).count();
        assert!(accepted > 1700 && accepted < 2300, "accepted {accepted}");
    }

    #[test]
    fn edge_positions_lie_on_the_border() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let size = Position::new(20, 40);
        for _ in 0..500 {
            let p = edge_position(&mut rng, size);
            assert!(p.within(&size));
            assert!(p.y == 0 || p.y == 19 || p.x == 0 || p.x == 39);
        }
    }
}
