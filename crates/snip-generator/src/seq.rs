use crate::Generator;
use snip_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic generator producing `<prefix><6-digit counter>` codes.
///
/// Codes are unique within one instance, which makes this generator handy
/// for tests that need to know the next code in advance.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator whose first code uses `offset` as the counter.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqGenerator::with_prefix("sn");

        assert_eq!(generator.generate().as_str(), "sn000000");
        assert_eq!(generator.generate().as_str(), "sn000001");
        assert_eq!(generator.generate().as_str(), "sn000002");
    }

    #[test]
    fn starts_from_offset() {
        let generator = SeqGenerator::with_offset("sn", 1000);

        assert_eq!(generator.generate().as_str(), "sn001000");
        assert_eq!(generator.generate().as_str(), "sn001001");
    }

    #[test]
    fn usable_as_trait_object() {
        let generator: Box<dyn Generator> = Box::new(SeqGenerator::with_prefix("x"));
        assert_eq!(generator.generate().as_str(), "x000000");
    }
}
