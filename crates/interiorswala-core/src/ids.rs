//! Time-based identifiers for projects and queries.

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn project_id(at_ms: i64) -> String {
    format!("project-{}", at_ms)
}

pub fn query_id(at_ms: i64) -> String {
    format!("query-{}-{}", at_ms, random_token(5))
}

/// Lowercase base36 token drawn from a v4 uuid.
fn random_token(len: usize) -> String {
    uuid::Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(len)
        .map(|b| BASE36[(*b as usize) % BASE36.len()] as char)
        .collect()
}

/// Returns `candidate`, or `candidate-N` for the smallest N that is not taken.
pub fn unique_id(candidate: String, taken: impl Fn(&str) -> bool) -> String {
    if !taken(&candidate) {
        return candidate;
    }
    (1u64..)
        .map(|n| format!("{}-{}", candidate, n))
        .find(|id| !taken(id))
        .unwrap_or(candidate)
}
