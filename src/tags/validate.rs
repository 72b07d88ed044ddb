//! Tag name validation.
//!
//! Pure, synchronous checks gating every mutation: a name that fails either
//! check is never submitted to the persistence layer. The two flags are
//! independent — both warnings can be shown at once.

/// Names with this many characters or more are rejected.
pub const MAX_NAME_LEN: usize = 128;

/// Punctuation the persistence layer reserves; any occurrence anywhere in
/// the name rejects it.
const RESERVED_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', ';',
    '\'', ':', '"', '\\', '|', ',', '.', '<', '>', '/', '?',
];

/// Outcome of validating a proposed tag name. Both flags may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameCheck {
    pub too_long: bool,
    pub has_invalid_chars: bool,
}

impl NameCheck {
    pub fn is_ok(&self) -> bool {
        !self.too_long && !self.has_invalid_chars
    }
}

/// Validate a proposed tag name against length and character-set constraints.
pub fn validate(name: &str) -> NameCheck {
    NameCheck {
        too_long: name.chars().count() >= MAX_NAME_LEN,
        has_invalid_chars: name.chars().any(|c| RESERVED_CHARS.contains(&c)),
    }
}

/// Whether a name may be submitted: non-empty and passing both checks.
pub fn is_submittable(name: &str) -> bool {
    !name.is_empty() && validate(name).is_ok()
}
