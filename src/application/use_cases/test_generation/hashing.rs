use sha2::{Digest, Sha256};

/// Short digest identifying a prompt in the logs without logging its text.
pub(crate) fn prompt_digest(model: &str, system: &str, user: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(model.as_bytes());
    hasher.update(b"::");
    hasher.update(system.as_bytes());
    hasher.update(b"::");
    hasher.update(user.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..16].to_string()
}
