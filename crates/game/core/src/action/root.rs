//! Commitment to an action script.

use super::UnitAction;

/// Computes a SHA-256 commitment to a sequence of actions.
///
/// Two scripts share a root only if they contain the same actions in the
/// same order. Replays print it next to the final state digest so a run can
/// be identified by (scenario, script root).
pub fn compute_script_root(actions: &[UnitAction]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    for action in actions {
        if let Ok(bytes) = bincode::serialize(action) {
            hasher.update(&bytes);
        }
    }
    hasher.finalize().into()
}
