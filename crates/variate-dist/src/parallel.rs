//! Parallel bulk sampling
//!
//! Each chunk of the output is drawn from its own [`Xoshiro128Plus`] seeded
//! from the caller's seed and the chunk index. Chunk boundaries do not depend
//! on the thread pool, so a given `(n, seed)` always yields the same vector.

use crate::traits::Distribution;
use rayon::prelude::*;
use tracing::instrument;
use variate_core::{Result, Xoshiro128Plus};

/// Variates per chunk.
pub const CHUNK_SIZE: usize = 4096;

/// Odd multiplier spreading consecutive chunk indices over the seed space.
const SEED_STRIDE: u32 = 0x9E37_79B9;

fn chunk_rng(seed: u32, chunk: usize) -> Xoshiro128Plus {
    Xoshiro128Plus::from_seed_u32(seed ^ (chunk as u32).wrapping_add(1).wrapping_mul(SEED_STRIDE))
}

/// Draw `n` variates from `dist` across the rayon pool.
#[instrument(skip(dist))]
pub fn sample_par<D>(dist: &D, n: usize, seed: u32) -> Result<Vec<f64>>
where
    D: Distribution + ?Sized,
{
    let chunks = n.div_ceil(CHUNK_SIZE);
    let parts = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let len = CHUNK_SIZE.min(n - chunk * CHUNK_SIZE);
            let mut rng = chunk_rng(seed, chunk);
            dist.sample_n(&mut rng, len)
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;
    Ok(parts.concat())
}
