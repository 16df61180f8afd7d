use serde::Serialize;

/// A positive class id taken from the `class_id` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClassReference {
    pub class_id: i64,
}

impl ClassReference {
    /// Normalizes a raw parameter. Anything that is not a strictly positive
    /// integer is treated as absent.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.is_empty() || raw.starts_with('+') || (raw.len() > 1 && raw.starts_with('0')) {
            return None;
        }
        raw.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(|class_id| Self { class_id })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub granted: bool,
}

impl AccessDecision {
    pub const GRANTED: Self = Self { granted: true };
    pub const DENIED: Self = Self { granted: false };

    pub fn from_count(count: u64) -> Self {
        Self { granted: count > 0 }
    }
}

/// Terminal result of the access flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    Proceed,
    Redirect(String),
    Denied,
}
