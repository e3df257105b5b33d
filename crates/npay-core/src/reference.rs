//! Transaction reference generation.
//!
//! References are drawn uniformly from a 62 symbol alphanumeric alphabet using a
//! cryptographically secure source. Because 62 is not a power of two, each symbol index is
//! drawn by rejection sampling: read just enough random bits to cover `0..=61` and discard
//! draws that land outside the range.

use std::fmt::Display;

use rand::{TryCryptoRng, rngs::OsRng};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Symbols a reference is made of.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_REFERENCE_LENGTH: usize = 30;

/// Draws allowed per symbol before the source is considered broken.
///
/// A healthy source fails a single draw with probability 2/64, so reaching this bound means
/// the source is not producing random output.
pub const MAX_DRAW_ATTEMPTS: usize = 64;

/// An opaque token tagging one payment attempt.
///
/// Uniqueness is probabilistic only; callers that need global uniqueness must check
/// generated references against the ones they have stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReference(String);

impl TransactionReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TransactionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TransactionReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionReference {
    fn from(value: String) -> Self {
        TransactionReference(value)
    }
}

impl From<&str> for TransactionReference {
    fn from(value: &str) -> Self {
        TransactionReference(value.to_string())
    }
}

/// Generates transaction references from a secure random source.
///
/// ```
/// use npay_core::reference::TokenGenerator;
///
/// let reference = TokenGenerator::new().generate(30).unwrap();
/// assert_eq!(reference.as_str().len(), 30);
/// assert!(reference.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone)]
pub struct TokenGenerator<R = OsRng> {
    source: R,
}

impl TokenGenerator<OsRng> {
    /// A generator backed by the operating system's entropy source.
    pub fn new() -> Self {
        TokenGenerator { source: OsRng }
    }
}

impl Default for TokenGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TryCryptoRng> TokenGenerator<R> {
    pub fn with_source(source: R) -> Self {
        TokenGenerator { source }
    }

    /// Generates a reference of exactly `length` symbols.
    pub fn generate(&mut self, length: usize) -> Result<TransactionReference> {
        let mut token = String::with_capacity(length);
        for _ in 0..length {
            let index = self.uniform_index(ALPHABET.len())?;
            token.push(char::from(ALPHABET[index]));
        }
        Ok(TransactionReference(token))
    }

    /// Generates a reference of [`DEFAULT_REFERENCE_LENGTH`] symbols.
    pub fn generate_default(&mut self) -> Result<TransactionReference> {
        self.generate(DEFAULT_REFERENCE_LENGTH)
    }

    /// Uniform index in `0..upper` by rejection sampling.
    fn uniform_index(&mut self, upper: usize) -> Result<usize> {
        let range = upper.saturating_sub(1);
        if range == 0 {
            return Ok(0);
        }

        let bits = usize::BITS - range.leading_zeros();
        let bytes = bits.div_ceil(8) as usize;
        let mask = usize::MAX >> (usize::BITS - bits);

        let mut buf = [0u8; size_of::<usize>()];
        for _ in 0..MAX_DRAW_ATTEMPTS {
            self.source
                .try_fill_bytes(&mut buf[..bytes])
                .map_err(|err| Error::RandomSource(err.to_string()))?;

            let draw = buf[..bytes]
                .iter()
                .fold(0usize, |acc, byte| (acc << 8) | usize::from(*byte))
                & mask;
            if draw <= range {
                return Ok(draw);
            }
        }

        Err(Error::RandomSource(format!(
            "no value within 0..={range} after {MAX_DRAW_ATTEMPTS} draws"
        )))
    }
}

#[cfg(test)]
mod tests {
    use rand::{CryptoRng, RngCore, SeedableRng, TryRngCore, rngs::StdRng};

    use super::*;

    /// A source whose reads always fail.
    struct ExhaustedSource;

    impl TryRngCore for ExhaustedSource {
        type Error = std::io::Error;

        fn try_next_u32(&mut self) -> std::result::Result<u32, Self::Error> {
            Err(std::io::Error::other("entropy pool exhausted"))
        }

        fn try_next_u64(&mut self) -> std::result::Result<u64, Self::Error> {
            Err(std::io::Error::other("entropy pool exhausted"))
        }

        fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> std::result::Result<(), Self::Error> {
            Err(std::io::Error::other("entropy pool exhausted"))
        }
    }

    impl TryCryptoRng for ExhaustedSource {}

    /// A source stuck on all-ones, which always masks to an out-of-range index.
    struct StuckSource;

    impl RngCore for StuckSource {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0xFF);
        }
    }

    impl CryptoRng for StuckSource {}

    /// A source replaying a fixed byte sequence.
    struct ScriptedSource(std::vec::IntoIter<u8>);

    impl RngCore for ScriptedSource {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst {
                *byte = self.0.next().expect("script exhausted");
            }
        }
    }

    impl CryptoRng for ScriptedSource {}

    fn is_alphabet(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 62);
        assert!(ALPHABET.iter().all(|b| is_alphabet(char::from(*b))));
    }

    #[test]
    fn test_generate_exact_length_from_alphabet() {
        let mut generator = TokenGenerator::new();
        for length in [1, 2, 7, 30, 64, 257] {
            let reference = generator.generate(length).unwrap();
            assert_eq!(reference.as_str().chars().count(), length);
            assert!(reference.as_str().chars().all(is_alphabet));
        }
    }

    #[test]
    fn test_default_length_is_30() {
        let reference = TokenGenerator::default().generate_default().unwrap();
        assert_eq!(reference.as_str().len(), DEFAULT_REFERENCE_LENGTH);
        assert_eq!(DEFAULT_REFERENCE_LENGTH, 30);
    }

    #[test]
    fn test_zero_length_is_empty() {
        let reference = TokenGenerator::new().generate(0).unwrap();
        assert_eq!(reference.as_str(), "");
    }

    #[test]
    fn test_out_of_range_draws_are_rejected() {
        // 0xFF masks to 63 and 0x3E to 62, both outside 0..=61. 0x41 masks to 1.
        let mut generator =
            TokenGenerator::with_source(ScriptedSource(vec![0xFF, 0x3E, 0x41, 0x3D].into_iter()));
        let reference = generator.generate(2).unwrap();
        assert_eq!(reference.as_str(), "B9");
    }

    #[test]
    fn test_exhausted_source_is_an_error() {
        let err = TokenGenerator::with_source(ExhaustedSource)
            .generate(30)
            .unwrap_err();
        assert!(
            matches!(err, Error::RandomSource(ref m) if m.contains("entropy pool exhausted")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_stuck_source_does_not_loop_forever() {
        let err = TokenGenerator::with_source(StuckSource)
            .generate(1)
            .unwrap_err();
        assert!(matches!(err, Error::RandomSource(_)));
    }

    #[test]
    fn test_symbol_frequencies_are_uniform() {
        const PER_SYMBOL: usize = 2_000;
        let mut generator = TokenGenerator::with_source(StdRng::seed_from_u64(0x4e_50_41_59));
        let reference = generator.generate(ALPHABET.len() * PER_SYMBOL).unwrap();

        let mut counts = [0usize; 128];
        for byte in reference.as_str().bytes() {
            counts[usize::from(byte)] += 1;
        }

        let expected = PER_SYMBOL as f64;
        let chi_square: f64 = ALPHABET
            .iter()
            .map(|symbol| {
                let observed = counts[usize::from(*symbol)] as f64;
                (observed - expected).powi(2) / expected
            })
            .sum();

        // 61 degrees of freedom; the 0.9999 quantile is roughly 111.
        assert!(chi_square < 112.0, "chi-square {chi_square} too large");
    }

    #[test]
    fn test_reference_serializes_as_plain_string() {
        let reference = TransactionReference::from("abc123");
        assert_eq!(serde_json::to_value(&reference).unwrap(), serde_json::json!("abc123"));
        assert_eq!(reference.to_string(), "abc123");
    }
}
