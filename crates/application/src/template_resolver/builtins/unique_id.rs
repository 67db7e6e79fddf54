//! `uuid` builtin

use uuid::Builder;

use crate::ports::RandomSource;

/// Generates a version 4 UUID from the given random source.
///
/// The version nibble is forced to `4` and the variant to RFC 4122
/// (`8`, `9`, `a` or `b`); the remaining 122 bits come from `random`.
pub fn generate(random: &dyn RandomSource) -> String {
    let mut bytes = [0u8; 16];
    random.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
