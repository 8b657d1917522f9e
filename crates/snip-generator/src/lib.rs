pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use snip_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage,
/// so a generated code is not checked against existing links.
pub trait Generator: Send + Sync + 'static {
    /// Produces the next short code.
    fn generate(&self) -> ShortCode;
}
