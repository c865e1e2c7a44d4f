use std::sync::atomic::{AtomicU64, Ordering};

use gpui::{ElementId, SharedString};

pub const DEFAULT_ID_PREFIX: &str = "sun-ui";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns `"{prefix}-{n}"` from a process-wide counter. Every call yields a new id.
pub fn generate_id(prefix: Option<&str>) -> String {
    let prefix = prefix.unwrap_or(DEFAULT_ID_PREFIX);
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// Id derived from the caller's source location, stable across re-renders.
#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ComponentId(SharedString);

impl ComponentId {
    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        Self(stable_auto_id(prefix).into())
    }

    /// Child id for a named part of the component.
    pub fn slot(&self, name: &str) -> ElementId {
        ElementId::Name(format!("{}-{name}", self.0).into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl Default for ComponentId {
    #[track_caller]
    fn default() -> Self {
        Self::auto(DEFAULT_ID_PREFIX)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(SharedString::from(value.to_string()))
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<ComponentId> for ElementId {
    fn from(value: ComponentId) -> Self {
        ElementId::Name(value.0)
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
