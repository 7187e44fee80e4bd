use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;
use rug::{Integer, Rational};

/// Seeded source of exact random values.
///
/// Every draw is reproducible from the 32-byte seed, which keeps randomized
/// tests deterministic.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Returns a value uniform in [0, max).
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64) -> u64 {
        assert!(max > 0, "invalid argument max: max = 0");
        let mask: u64 = u64::MAX >> (max - 1).leading_zeros().min(63);
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Returns a value uniform in [-bound, bound].
    #[inline(always)]
    pub fn next_i64b(&mut self, bound: u64) -> i64 {
        let x: u64 = self.next_u64n(2 * bound + 1);
        x as i64 - bound as i64
    }

    #[inline(always)]
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Returns a signed integer with up to `limbs` 64-bit limbs.
    pub fn next_integer(&mut self, limbs: usize) -> Integer {
        let mut x: Integer = Integer::new();
        for _ in 0..limbs {
            x <<= 64u32;
            x += self.next_u64();
        }
        if self.next_bool() { -x } else { x }
    }

    /// Returns a rational `num / den` with `|num| <= num_bound` and `1 <= den <= den_bound`.
    pub fn next_rational(&mut self, num_bound: u64, den_bound: u64) -> Rational {
        let num: i64 = self.next_i64b(num_bound);
        let den: u64 = self.next_u64n(den_bound) + 1;
        Rational::from((Integer::from(num), Integer::from(den)))
    }

    /// Returns `(mantissa, exp)` describing the dyadic rational `mantissa / 2^exp`,
    /// with `|mantissa| <= mantissa_bound` and `exp < exp_bound`.
    pub fn next_dyadic_parts(&mut self, mantissa_bound: u64, exp_bound: u32) -> (Integer, u32) {
        let mantissa: i64 = self.next_i64b(mantissa_bound);
        let exp: u32 = self.next_u64n(exp_bound as u64) as u32;
        (Integer::from(mantissa), exp)
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
