//! Deterministic RNG helpers.
//!
//! Xorshift128 with a fixed bootstrap state, plus the reducer that turns two output
//! words into a `[0, 1)` fraction. This is **not** cryptographic.

/// Marsaglia's reference seed for Xorshift128.
pub const BOOTSTRAP_STATE: XorshiftState =
    XorshiftState([123_456_789, 362_436_069, 521_288_629, 88_675_123]);

const SIGNIFICANT_BITS: u32 = 31;

/// Bits dropped from the high word so `hi * 2^31 + lo` stays exact in an `f64`.
const DROP_BITS: u32 = 1 + SIGNIFICANT_BITS - (f64::MANTISSA_DIGITS - SIGNIFICANT_BITS);

const MAX_SAFE_INTEGER: u64 = (1 << f64::MANTISSA_DIGITS) - 1;

/// Source of uniform draws in `[0, 1)`.
pub trait UnitRng {
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `min..=max`.
    fn next_in(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        (self.next_unit() * span).floor() as usize + min
    }
}

impl<F: FnMut() -> f64> UnitRng for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Four-word Xorshift128 state. Mixing returns a new value rather than mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorshiftState(pub [u32; 4]);

impl Default for XorshiftState {
    fn default() -> Self {
        BOOTSTRAP_STATE
    }
}

impl XorshiftState {
    /// One Xorshift128 step. Returns the output word and the next state.
    pub fn mix(self) -> (u32, Self) {
        let [x, y, z, w] = self.0;
        let t = x ^ (x << 11);
        let w1 = (w ^ (w >> 19)) ^ (t ^ (t >> 8));
        (w1, Self([y, z, w, w1]))
    }
}

/// Combine the high 22 bits of `a` and the low 31 bits of `b` into a fraction in `[0, 1)`.
pub fn reduce(a: u32, b: u32) -> f64 {
    let hi = u64::from(a >> DROP_BITS);
    let lo = u64::from(b >> 1);
    if hi == (1 << (32 - DROP_BITS)) - 1 && lo == (1 << SIGNIFICANT_BITS) - 1 {
        return 0.0;
    }
    let z = (hi << SIGNIFICANT_BITS) | lo;
    z as f64 / MAX_SAFE_INTEGER as f64
}

/// Seeded Xorshift128 generator. Two mixes are consumed per draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift128Rng {
    state: XorshiftState,
}

impl Xorshift128Rng {
    /// The seed is truncated to 32 bits and its magnitude written into the third word
    /// of the once-mixed bootstrap state.
    pub fn from_seed(seed: i64) -> Self {
        let (_, mut state) = BOOTSTRAP_STATE.mix();
        state.0[2] = (seed as i32).unsigned_abs();
        Self { state }
    }

    pub fn state(&self) -> XorshiftState {
        self.state
    }
}

impl UnitRng for Xorshift128Rng {
    fn next_unit(&mut self) -> f64 {
        let (x, mid) = self.state.mix();
        let (y, next) = mid.mix();
        self.state = next;
        reduce(x, y)
    }
}
