//! Content fingerprint of a game state.
use std::fmt;

use super::GameState;

/// SHA-256 over the bincode encoding of a [`GameState`].
///
/// Every collection in the state is ordered, so equal states always
/// produce equal digests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StateDigest(pub [u8; 32]);

impl StateDigest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl GameState {
    /// Fingerprints the whole snapshot.
    pub fn digest(&self) -> StateDigest {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        // bincode cannot fail on these types: no maps with non-string keys
        // reach it and every field has a fixed encoding.
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        StateDigest(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Coordinate;
    use crate::state::{GameMap, Terrain};

    #[test]
    fn equal_states_share_a_digest() {
        let a = GameState::new(GameMap::filled(3, 3, Terrain::Plains));
        let b = a.clone();
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn terrain_change_alters_digest() {
        let a = GameState::new(GameMap::filled(3, 3, Terrain::Plains));
        let mut b = a.clone();
        b.map.tiles.get_mut(&Coordinate::ORIGIN).unwrap().terrain = Terrain::Forest;
        assert_ne!(a.digest(), b.digest());
        assert_eq!(a.digest().to_string().len(), 64);
        assert_eq!(hex::encode(a.digest().as_bytes()), a.digest().to_string());
    }
}
