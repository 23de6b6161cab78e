use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub const CODE_LENGTH: usize = 6;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const CODE_SPACE: u64 = 62u64.pow(CODE_LENGTH as u32);

/// Produces fixed-length base62 short codes from a single rng seeded at
/// startup. Codes are not checked for uniqueness against the store; callers
/// accept last-writer-wins on the rare collision.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate(&self) -> String {
        let draw = self
            .rng
            .lock()
            .expect("code generator lock poisoned")
            .gen_range(0..CODE_SPACE);
        encode_base62(draw)
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a number below 62^6 as base62, left-padded with '0' to the fixed
/// code length. Zero encodes as "000000".
fn encode_base62(mut num: u64) -> String {
    let mut encoded = Vec::with_capacity(CODE_LENGTH);
    while num > 0 {
        encoded.push(BASE62_CHARS[(num % 62) as usize]);
        num /= 62;
    }
    while encoded.len() < CODE_LENGTH {
        encoded.push(b'0');
    }
    encoded.reverse();
    String::from_utf8(encoded).expect("base62 output is ascii")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_as_all_zero_symbols() {
        assert_eq!(encode_base62(0), "000000");
    }

    #[test]
    fn encodes_least_significant_digit_last() {
        assert_eq!(encode_base62(61), "00000z");
        assert_eq!(encode_base62(62), "000010");
        assert_eq!(encode_base62(10), "00000A");
    }

    #[test]
    fn codes_are_fixed_length_base62() {
        let generator = CodeGenerator::new();
        for _ in 0..10_000 {
            let code = generator.generate();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn seeded_generators_are_deterministic() {
        let first = CodeGenerator::from_seed(42);
        let second = CodeGenerator::from_seed(42);
        for _ in 0..100 {
            assert_eq!(first.generate(), second.generate());
        }
    }
}
