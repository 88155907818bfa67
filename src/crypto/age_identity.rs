use crate::domain::AgeKeyPair;
use age::x25519::Identity;
use tracing::debug;

/// Generate a fresh age X25519 identity from the OS random source.
///
/// The identity is not derived from the seed.
pub fn generate_age_identity() -> AgeKeyPair {
    let pair = AgeKeyPair::new(Identity::generate());
    debug!(recipient = %pair.recipient_text(), "generated age identity");
    pair
}
