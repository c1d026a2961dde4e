//! Uniform and normal random numbers drawn from a per-thread generator.
//!
//! Every thread lazily creates its own `StdRng` the first time it asks for a
//! number. The seed mixes the wall clock with a hash of the thread id, so two
//! threads started at the same instant still walk different sequences. Runs
//! are not reproducible unless the thread is reseeded with [`seed_thread`] or
//! the caller passes its own generator to one of the `*_with` variants.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Normal, StandardNormal};

use crate::math::matrix::Matrix;

thread_local! {
    static GENERATOR: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(clock_seed()));
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    nanos.wrapping_add(hasher.finish())
}

/// Replaces the calling thread's generator with one seeded from `seed`.
///
/// Other threads are unaffected.
pub fn seed_thread(seed: u64) {
    GENERATOR.with(|generator| *generator.borrow_mut() = StdRng::seed_from_u64(seed));
}

/// Lends the calling thread's generator to `f`.
///
/// `f` must not call back into the thread-local samplers of this module; use
/// the `*_with` variants on the lent generator instead.
pub fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    GENERATOR.with(|generator| f(&mut generator.borrow_mut()))
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Integer uniformly distributed on the closed interval `[min, max]`.
///
/// # Panics
/// Panics if `min > max`.
pub fn uniform_int<T>(min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
{
    with_rng(|rng| uniform_int_with(rng, min, max))
}

pub fn uniform_int_with<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    assert!(min <= max, "uniform_int: lower bound exceeds upper bound");
    rng.gen_range(min..=max)
}

/// Real uniformly distributed on the half-open interval `[min, max)`.
///
/// The degenerate interval `min == max` yields `min`.
///
/// # Panics
/// Panics if `min > max`, if either bound is not finite, or if `max - min`
/// overflows.
pub fn uniform_real<F>(min: F, max: F) -> F
where
    F: Float + SampleUniform + Debug,
{
    with_rng(|rng| uniform_real_with(rng, min, max))
}

pub fn uniform_real_with<F, R>(rng: &mut R, min: F, max: F) -> F
where
    F: Float + SampleUniform + Debug,
    R: Rng + ?Sized,
{
    assert!(
        min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite(),
        "uniform_real: invalid interval [{:?}, {:?})",
        min,
        max
    );
    if min == max {
        return min;
    }
    Uniform::new(min, max).sample(rng)
}

/// Real drawn from the normal distribution N(`mu`, `sigma`²).
///
/// # Panics
/// Panics if `sigma` is negative or not finite.
pub fn normal_real<F>(mu: F, sigma: F) -> F
where
    F: Float + Debug,
    StandardNormal: Distribution<F>,
{
    with_rng(|rng| normal_real_with(rng, mu, sigma))
}

pub fn normal_real_with<F, R>(rng: &mut R, mu: F, sigma: F) -> F
where
    F: Float + Debug,
    StandardNormal: Distribution<F>,
    R: Rng + ?Sized,
{
    normal(mu, sigma).sample(rng)
}

fn normal<F>(mu: F, sigma: F) -> Normal<F>
where
    F: Float + Debug,
    StandardNormal: Distribution<F>,
{
    assert!(sigma.is_finite(), "normal_real: sigma must be finite, got {:?}", sigma);
    Normal::new(mu, sigma).unwrap_or_else(|e| {
        panic!("normal_real: invalid parameters (mu={:?}, sigma={:?}): {}", mu, sigma, e)
    })
}

// ---------------------------------------------------------------------------
// Grids
// ---------------------------------------------------------------------------

/// `height × width` grid of independent uniform reals in `[min, max)`,
/// filled row by row. Grid cells are `f64`, like every other matrix here.
pub fn uniform_grid(width: usize, height: usize, min: f64, max: f64) -> Matrix {
    with_rng(|rng| uniform_grid_with(rng, width, height, min, max))
}

pub fn uniform_grid_with<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    min: f64,
    max: f64,
) -> Matrix {
    let mut res = Matrix::zeros(height, width);
    for row in res.data.iter_mut() {
        for cell in row.iter_mut() {
            *cell = uniform_real_with(rng, min, max);
        }
    }
    res
}

/// `height × width` grid of independent N(`mu`, `sigma`²) reals, filled row
/// by row.
pub fn normal_grid(width: usize, height: usize, mu: f64, sigma: f64) -> Matrix {
    with_rng(|rng| normal_grid_with(rng, width, height, mu, sigma))
}

pub fn normal_grid_with<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    mu: f64,
    sigma: f64,
) -> Matrix {
    let distribution = normal(mu, sigma);
    let mut res = Matrix::zeros(height, width);
    for row in res.data.iter_mut() {
        for cell in row.iter_mut() {
            *cell = distribution.sample(rng);
        }
    }
    res
}
