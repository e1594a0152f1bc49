use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::KeywordEntry;

/// Tokens must be longer than this (in chars) to count during scoring.
pub const MIN_SCORING_TOKEN_CHARS: usize = 3;

pub fn normalize_input(input: &str) -> String {
    input.to_lowercase()
}

pub fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Exact,
    Scored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    ExactOnly,
    ExactThenScored,
}

/// Ordered trigger keys with their payloads and a default payload.
pub struct KeywordTable<'a, P> {
    entries: &'a [KeywordEntry<'a, P>],
    default: &'a P,
}

impl<'a, P> Clone for KeywordTable<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P> Copy for KeywordTable<'a, P> {}

impl<'a, P: fmt::Debug> fmt::Debug for KeywordTable<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordTable")
            .field("entries", &self.entries.len())
            .field("default", self.default)
            .finish()
    }
}

pub struct KeywordMatch<'a, P> {
    pub index: usize,
    pub key: &'a str,
    pub payload: &'a P,
    pub phase: MatchPhase,
}

impl<'a, P> Clone for KeywordMatch<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P> Copy for KeywordMatch<'a, P> {}

impl<'a, P: fmt::Debug> fmt::Debug for KeywordMatch<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordMatch")
            .field("index", &self.index)
            .field("key", &self.key)
            .field("payload", self.payload)
            .field("phase", &self.phase)
            .finish()
    }
}

pub enum ClassificationResult<'a, P> {
    Matched(KeywordMatch<'a, P>),
    Default(&'a P),
}

impl<'a, P> Clone for ClassificationResult<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P> Copy for ClassificationResult<'a, P> {}

impl<'a, P: fmt::Debug> fmt::Debug for ClassificationResult<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched(found) => f.debug_tuple("Matched").field(found).finish(),
            Self::Default(payload) => f.debug_tuple("Default").field(payload).finish(),
        }
    }
}

impl<'a, P> ClassificationResult<'a, P> {
    pub fn payload(&self) -> &'a P {
        match self {
            Self::Matched(found) => found.payload,
            Self::Default(payload) => payload,
        }
    }

    pub fn key(&self) -> Option<&'a str> {
        match self {
            Self::Matched(found) => Some(found.key),
            Self::Default(_) => None,
        }
    }

    pub fn phase(&self) -> Option<MatchPhase> {
        match self {
            Self::Matched(found) => Some(found.phase),
            Self::Default(_) => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }
}

/// One matching phase. Phases receive already-normalized input.
pub type Phase<'a, P> = fn(&KeywordTable<'a, P>, &str) -> Option<KeywordMatch<'a, P>>;

impl<'a, P> KeywordTable<'a, P> {
    pub const fn new(entries: &'a [KeywordEntry<'a, P>], default: &'a P) -> Self {
        Self { entries, default }
    }

    pub fn entries(&self) -> &'a [KeywordEntry<'a, P>] {
        self.entries
    }

    pub fn default_payload(&self) -> &'a P {
        self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn classify(&self, input: &str, strategy: MatchStrategy) -> ClassificationResult<'a, P> {
        let normalized = normalize_input(input);
        let pipeline: [Phase<'a, P>; 2] =
            [exact_match as Phase<'a, P>, scored_match as Phase<'a, P>];
        let phases = match strategy {
            MatchStrategy::ExactOnly => &pipeline[..1],
            MatchStrategy::ExactThenScored => &pipeline[..],
        };

        match first_success(self, &normalized, phases) {
            Some(found) => ClassificationResult::Matched(found),
            None => ClassificationResult::Default(self.default),
        }
    }

    /// Phase 1 only, without falling back to the default payload.
    pub fn find_exact(&self, input: &str) -> Option<KeywordMatch<'a, P>> {
        exact_match(self, &normalize_input(input))
    }

    fn match_at(&self, index: usize, phase: MatchPhase) -> Option<KeywordMatch<'a, P>> {
        self.entries.get(index).map(|(key, payload)| KeywordMatch {
            index,
            key: *key,
            payload,
            phase,
        })
    }
}

/// Runs phases in order and keeps the first one that produces a match.
pub fn first_success<'a, P>(
    table: &KeywordTable<'a, P>,
    normalized: &str,
    phases: &[Phase<'a, P>],
) -> Option<KeywordMatch<'a, P>> {
    phases.iter().find_map(|phase| phase(table, normalized))
}

/// First key, in authored order, contained in the input.
pub fn exact_match<'a, P>(table: &KeywordTable<'a, P>, normalized: &str) -> Option<KeywordMatch<'a, P>> {
    let index = table
        .entries
        .iter()
        .position(|(key, _)| !key.is_empty() && normalized.contains(*key))?;
    table.match_at(index, MatchPhase::Exact)
}

/// Token-frequency fallback. Each whitespace token longer than
/// `MIN_SCORING_TOKEN_CHARS` adds one point to every key containing it. The
/// key whose running score first rises above the best so far wins, so ties
/// stay with whichever key reached the top score first.
pub fn scored_match<'a, P>(table: &KeywordTable<'a, P>, normalized: &str) -> Option<KeywordMatch<'a, P>> {
    let mut scores = vec![0_usize; table.entries.len()];
    let mut best: Option<usize> = None;
    let mut best_score = 0_usize;

    for token in normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_SCORING_TOKEN_CHARS)
    {
        for (index, (key, _)) in table.entries.iter().enumerate() {
            if !key.contains(token) {
                continue;
            }
            scores[index] += 1;
            if scores[index] > best_score {
                best_score = scores[index];
                best = Some(index);
            }
        }
    }

    table.match_at(best?, MatchPhase::Scored)
}
