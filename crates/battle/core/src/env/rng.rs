//! Random sources for combat rolls.
//!
//! Every roll in an encounter (damage variance, critical checks, status
//! application, flee/steal checks, opponent selection and AI choices) is drawn
//! from one [`RngSource`]. The default source is [`PcgRng`], whose whole state
//! is a single `u64` stored in the encounter snapshot, so a resumed encounter
//! continues the exact same sequence without re-rolling anything.
//!
//! # Determinism
//!
//! Given the same seed, a `PcgRng` produces the same sequence on every
//! platform: the generator only uses wrapping integer arithmetic and the float
//! conversions are exact.

/// Source of randomness for the formula library and resolver.
///
/// Implementations only need to provide `next_u32`; the provided helpers
/// derive every other roll from it.
pub trait RngSource {
    /// Returns the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0.0, 1.0)`.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform value in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// Bernoulli trial with probability `p` (clamped to `[0, 1]`).
    ///
    /// `p <= 0` never succeeds and `p >= 1` always succeeds.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }

    /// Percentage roll: succeeds with probability `percent / 100`.
    fn percent(&mut self, percent: f64) -> bool {
        self.chance(percent / 100.0)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() requires a non-empty range");
        let picked = (self.unit() * len as f64) as usize;
        picked.min(len.saturating_sub(1))
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: same seed always produces the same sequence
/// - **Small state**: 64 bits, persisted inside `EncounterState`
/// - **Fast**: single multiply + xorshift + rotate
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed, mixing it so nearby seeds diverge.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: compute_seed(seed, 0),
        }
    }

    /// Restores a generator from a persisted state word.
    pub const fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Current state word (what a snapshot persists).
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Compute a well-mixed seed from a base seed and a stream discriminator.
///
/// Use different `stream` values to derive independent generators from one
/// base seed (e.g. one per encounter in a run).
pub fn compute_seed(base_seed: u64, stream: u64) -> u64 {
    let mut hash = base_seed;
    hash ^= stream.wrapping_mul(0x9e3779b97f4a7c15);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Replays a fixed list of raw values, then repeats `fallback` forever.
///
/// Useful to force outcomes: `ScriptedRng::constant(0)` makes every
/// `chance(p > 0)` succeed and every uniform roll return its lower bound;
/// `ScriptedRng::constant(u32::MAX)` does the opposite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
    fallback: u32,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>, fallback: u32) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
            fallback,
        }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(Vec::new(), value)
    }

    /// Raw value whose `unit()` is as close as possible to `fraction`.
    pub fn raw_for(fraction: f64) -> u32 {
        (fraction.clamp(0.0, 1.0) * 4_294_967_295.0) as u32
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values.get(self.cursor).copied().unwrap_or(self.fallback);
        self.cursor += 1;
        value
    }
}
