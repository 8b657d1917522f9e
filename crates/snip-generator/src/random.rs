use crate::Generator;
use rand::distr::Alphanumeric;
use rand::Rng;
use snip_core::ShortCode;
use typed_builder::TypedBuilder;

/// Generates random base62 (`[0-9a-zA-Z]`) codes of a fixed length.
///
/// Each call draws from the thread-local RNG, so the generator holds no
/// mutable state and can be shared freely between requests. Collisions are
/// possible; with the default length of 8 there are 62^8 codes.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomGenerator {
    #[builder(default = 8)]
    length: usize,
}

impl RandomGenerator {
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length.max(1))
            .map(char::from)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
