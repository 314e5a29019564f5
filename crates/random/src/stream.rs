use std::f64::consts::PI;

const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;
const SCHRAGE_Q: i64 = 127_773;
const SCHRAGE_R: i64 = 2_836;

const TABLE_SIZE: usize = 32;
const WARM_UP: usize = 40;
const TABLE_DIVISOR: i64 = 67_108_865;
const SCALE: f64 = 2.147_483_647e9;

/// Substituted for exact zeros so that draws can be passed to `ln`.
const TINY: f64 = 1e-99;

/// The legacy benchmark uniform generator.
///
/// A Park–Miller minimal standard generator (multiplier `16807`, modulus
/// `2³¹ - 1`, evaluated with Schrage's factorisation) whose output is passed
/// through a 32-entry Bays–Durham shuffle table. Draws lie in `(0, 1)`.
///
/// The stream is cheap to create and carries all of its state, so
/// independent streams never interfere.
#[derive(Debug, Clone)]
pub struct LehmerStream {
    state: i64,
    last: i64,
    table: [i64; TABLE_SIZE],
}

impl LehmerStream {
    /// Creates a stream from `seed`.
    ///
    /// Negative seeds are replaced by their absolute value and zero by one.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut state = seed.checked_abs().unwrap_or(i64::MAX).max(1);
        let mut table = [0; TABLE_SIZE];
        for i in (0..WARM_UP).rev() {
            state = advance(state);
            if i < TABLE_SIZE {
                table[i] = state;
            }
        }

        Self {
            state,
            last: table[0],
            table,
        }
    }

    /// Returns the next uniform draw in `(0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.state = advance(self.state);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let slot = (self.last / TABLE_DIVISOR) as usize;
        self.last = self.table[slot];
        self.table[slot] = self.state;

        #[allow(clippy::cast_precision_loss)]
        let draw = self.last as f64 / SCALE;
        if draw == 0.0 { TINY } else { draw }
    }
}

impl Iterator for LehmerStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_uniform())
    }
}

fn advance(state: i64) -> i64 {
    let quotient = state / SCHRAGE_Q;
    let next = MULTIPLIER * (state - quotient * SCHRAGE_Q) - SCHRAGE_R * quotient;
    if next < 0 { next + MODULUS } else { next }
}

/// Returns `n` uniform draws in `(0, 1)` from a fresh stream seeded with `seed`.
#[must_use]
pub fn uniform(n: usize, seed: i64) -> Vec<f64> {
    LehmerStream::new(seed).take(n).collect()
}

/// Returns `n` standard normal draws.
///
/// Uses the Box–Muller transform on `2n` uniform draws: the first `n` set the
/// radius and the last `n` set the angle.
#[must_use]
pub fn gaussian(n: usize, seed: i64) -> Vec<f64> {
    let draws = uniform(2 * n, seed);
    let (radii, angles) = draws.split_at(n);
    radii
        .iter()
        .zip(angles)
        .map(|(&u, &v)| {
            let g = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
            if g == 0.0 { TINY } else { g }
        })
        .collect()
}
