use rand::rngs::OsRng;
use rand::RngCore;

/// Server-minted product identifier: 10 random bytes, hex-encoded and
/// uppercased, so 20 characters in `[0-9A-F]`. Minted once on create and
/// immutable afterwards; clients never supply it.
///
/// Collisions are not checked. At 80 bits of randomness the birthday bound
/// stays far below any realistic corpus size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        let mut bytes = [0u8; 10];
        OsRng.fill_bytes(&mut bytes);
        ProductId(hex::encode(bytes).to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
