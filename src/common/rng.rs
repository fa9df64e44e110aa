//! Random number generation for resampling.
//!
//! The resampler never draws from a process-global generator: every entry
//! point takes `&mut impl Rng`, so concurrent calls are safe without locking
//! and tests can pin a seed for exact reproducibility.

/// Minimal random number generator interface for resampling.
///
/// Blanket-implemented for every [`rand::RngCore`] type, so `StdRng`,
/// `thread_rng()` and [`SimpleRng`] all thread through the same
/// `&mut impl Rng` parameter.
pub trait Rng {
    /// Generate the next u64 value
    fn next_u64(&mut self) -> u64;

    /// Generate a random f64 in `[0, 1)`.
    ///
    /// Uses the upper 53 bits of the next u64; the result is always strictly
    /// below 1.0, which the systematic sweep's half-open offset relies on.
    fn rand(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }

    /// Generate a random f64 from the standard normal distribution N(0, 1)
    /// using the Box-Muller transform.
    fn randn(&mut self) -> f64 {
        let u1 = self.rand();
        let u2 = self.rand();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

impl<R: rand::RngCore + ?Sized> Rng for R {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(self)
    }
}

/// Simple deterministic random number generator using xorshift64.
///
/// Minimal, fast, and good enough quality for pivot selection and offset
/// draws. Two instances with the same seed produce identical sequences,
/// giving fully reproducible resampling runs.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new SimpleRng with the given seed.
    /// If seed is 0, uses 1 instead to avoid the degenerate all-zero state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Create a new SimpleRng seeded from the thread-local entropy source.
    ///
    /// Used by callers that do not need reproducibility; each call gets an
    /// independent stream.
    pub fn from_entropy() -> Self {
        Self::new(rand::RngCore::next_u64(&mut rand::thread_rng()))
    }
}

// Implement rand::RngCore so SimpleRng integrates with the rand ecosystem
// (and picks up the crate-local Rng trait through the blanket impl).
impl rand::RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        rand::RngCore::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut i = 0;
        while i < dest.len() {
            let bytes = rand::RngCore::next_u64(self).to_le_bytes();
            let to_copy = (dest.len() - i).min(8);
            dest[i..i + to_copy].copy_from_slice(&bytes[..to_copy]);
            i += to_copy;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
