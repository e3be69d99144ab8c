use rand::Rng;

use crate::config::constant::BRA_EPSILON;

/// Draws an index in `[0, n)` biased toward zero via a geometric-like
/// transform of a uniform draw. Beta near 1 ("greedy") collapses the draw
/// to index 0 almost deterministically; smaller beta broadens exploration.
///
/// Precondition: `n > 0` and `beta` lies in `(0, 1)` — callers must not
/// invoke this on an empty candidate list (see the Mapper and PJS loop
/// guards, which both check non-emptiness before drawing).
pub fn bra(n: usize, beta: f64, rng: &mut impl Rng) -> usize {
    debug_assert!(n > 0, "BRA called with an empty candidate list");
    debug_assert!(
        beta > 0.0 && beta < 1.0,
        "beta must lie in (0, 1), got {beta}"
    );

    let u: f64 = rng.gen_range(BRA_EPSILON..1.0);
    let k = (u.ln() / (1.0 - beta).ln()).floor() as i64;
    k.rem_euclid(n as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn greedy_beta_overwhelmingly_picks_index_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws = 10_000;
        let zeros = (0..draws).filter(|_| bra(10, 0.9999, &mut rng) == 0).count();
        assert!(
            zeros as f64 / draws as f64 >= 0.999,
            "expected >=99.9% zeros, got {zeros}/{draws}"
        );
    }

    #[test]
    fn always_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let idx = bra(5, 0.3, &mut rng);
            assert!(idx < 5);
        }
    }

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let seq_a: Vec<usize> = (0..20).map(|_| bra(7, 0.5, &mut a)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| bra(7, 0.5, &mut b)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
