//! Weight vector operators used by the genetic algorithm.
//!
//! - **Initialization**: [`random`] draws each weight uniformly from `[-init, init]`
//! - **Crossover**: [`blx_alpha`] blends two parents gene by gene
//! - **Mutation**: [`mutate`] adds Gaussian noise to a random subset of genes
//!
//! Network weights are signed, so every operator clamps to the symmetric range
//! `[-max_weight, max_weight]` rather than to a simplex.

use rand::Rng;
use rand_distr::Normal;

/// Builds a weight vector by applying `f` to each index.
///
/// ```
/// use pongevo_training::weights;
///
/// let ramp = weights::from_fn(|i| i as f32 * 0.5, 4);
/// assert_eq!(ramp, vec![0.0, 0.5, 1.0, 1.5]);
/// ```
pub fn from_fn<F>(f: F, len: usize) -> Vec<f32>
where
    F: FnMut(usize) -> f32,
{
    (0..len).map(f).collect()
}

/// Random weight vector, each weight uniform in `[-init_weight, init_weight]`.
pub fn random<R>(rng: &mut R, init_weight: f32, len: usize) -> Vec<f32>
where
    R: Rng + ?Sized,
{
    from_fn(|_| rng.random_range(-init_weight..=init_weight), len)
}

/// BLX-α crossover.
///
/// For each position with parent genes `x1` and `x2`, the child gene is drawn uniformly from
/// `[min - α·d, max + α·d]` where `d = |x1 - x2|`, then clamped to `[-max_weight, max_weight]`.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn blx_alpha<R>(p1: &[f32], p2: &[f32], alpha: f32, max_weight: f32, rng: &mut R) -> Vec<f32>
where
    R: Rng + ?Sized,
{
    assert_eq!(p1.len(), p2.len());
    p1.iter()
        .zip(p2)
        .map(|(&x1, &x2)| {
            let min = f32::min(x1, x2);
            let max = f32::max(x1, x2);
            let d = max - min;
            rng.random_range(min - alpha * d..=max + alpha * d)
                .clamp(-max_weight, max_weight)
        })
        .collect()
}

/// Gaussian mutation in place.
///
/// Each weight is perturbed with probability `rate` by a sample of `noise`, then clamped to
/// `[-max_weight, max_weight]`.
pub fn mutate<R>(
    weights: &mut [f32],
    noise: &Normal<f32>,
    max_weight: f32,
    rate: f32,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    for w in weights {
        if rng.random_bool(rate.into()) {
            *w = (*w + rng.sample(noise)).clamp(-max_weight, max_weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(0);
        let weights = random(&mut rng, 0.5, 1000);
        assert_eq!(weights.len(), 1000);
        assert!(weights.iter().all(|w| (-0.5..=0.5).contains(w)));
        assert!(weights.iter().any(|w| *w < 0.0));
        assert!(weights.iter().any(|w| *w > 0.0));
    }

    #[test]
    fn test_blx_alpha_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let p1 = [0.0, -1.0, 2.0, 5.0];
        let p2 = [1.0, -1.0, 4.0, 9.0];
        for _ in 0..200 {
            let child = blx_alpha(&p1, &p2, 0.5, 6.0, &mut rng);
            assert!((-0.5..=1.5).contains(&child[0]));
            // identical parents leave no room to explore
            assert_eq!(child[1], -1.0);
            assert!((1.0..=5.0).contains(&child[2]));
            assert!((3.0..=6.0).contains(&child[3]));
        }
    }

    #[test]
    fn test_mutate_rate_bounds() {
        let mut rng = Pcg32::seed_from_u64(2);
        let noise = Normal::new(0.0, 1.0).unwrap();

        let mut weights = vec![0.25; 50];
        mutate(&mut weights, &noise, 10.0, 0.0, &mut rng);
        assert!(weights.iter().all(|w| *w == 0.25));

        mutate(&mut weights, &noise, 10.0, 1.0, &mut rng);
        assert!(weights.iter().all(|w| *w != 0.25));
    }

    #[test]
    fn test_mutate_clamps() {
        let mut rng = Pcg32::seed_from_u64(3);
        let noise = Normal::new(0.0, 100.0).unwrap();
        let mut weights = vec![0.0; 100];
        mutate(&mut weights, &noise, 2.0, 1.0, &mut rng);
        assert!(weights.iter().all(|w| (-2.0..=2.0).contains(w)));
        assert!(weights.iter().any(|w| w.abs() == 2.0));
    }
}
