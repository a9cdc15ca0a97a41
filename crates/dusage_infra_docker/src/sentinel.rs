//! Wire values the engine uses to mean "not available".
//!
//! The convention differs field by field, so it is looked up in [`RULES`]
//! by `(entity, field)` and never guessed from the value. Fields missing
//! from the table are passed through untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// `""` means absent.
    EmptyString,
    /// `-1` means absent.
    MinusOne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub entity: &'static str,
    pub field: &'static str,
    pub sentinel: Sentinel,
}

const fn rule(entity: &'static str, field: &'static str, sentinel: Sentinel) -> Rule {
    Rule { entity, field, sentinel }
}

/// Keyed by wire entity and wire field name.
pub const RULES: &[Rule] = &[
    rule("BuildCache", "Parent", Sentinel::EmptyString),
    rule("BuildCache", "Description", Sentinel::EmptyString),
    rule("ImageSummary", "ParentId", Sentinel::EmptyString),
    rule("ImageSummary", "SharedSize", Sentinel::MinusOne),
    rule("ImageSummary", "Containers", Sentinel::MinusOne),
    rule("UsageData", "Size", Sentinel::MinusOne),
    rule("UsageData", "RefCount", Sentinel::MinusOne),
];

pub fn lookup(entity: &str, field: &str) -> Option<Sentinel> {
    RULES
        .iter()
        .find(|r| r.entity == entity && r.field == field)
        .map(|r| r.sentinel)
}

pub fn text(entity: &str, field: &str, raw: Option<String>) -> Option<String> {
    match (lookup(entity, field), raw) {
        (Some(Sentinel::EmptyString), Some(s)) if s.is_empty() => None,
        (_, raw) => raw,
    }
}

pub fn integer(entity: &str, field: &str, raw: Option<i64>) -> Option<i64> {
    match (lookup(entity, field), raw) {
        (Some(Sentinel::MinusOne), Some(-1)) => None,
        (_, raw) => raw,
    }
}
