use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator when `seed` is set, OS entropy otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draws `n` values from Normal(mean, sd²) with the Box–Muller transform.
///
/// Each output consumes two uniforms `u1, u2` in `[0, 1)`. A `u1` of exactly
/// zero gives a non-finite value and is left as is.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, n: usize, mean: f64, sd: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let u1: f64 = rng.random();
        let u2: f64 = rng.random();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        out.push(mean + sd * z);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_sample.rs"]
mod tests;
