use std::collections::BTreeMap;
use std::fmt;

/// One generated completion from a provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}

/// A classified answer. The reply text is parsed into this closed set at the
/// provider boundary; anything outside A/B/C keeps its raw text on the
/// `Unrecognized` variant so logs show what the model actually said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// The statement does not apply.
    A,
    /// The statement somewhat applies.
    B,
    /// The statement fully applies.
    C,
    Unrecognized(String),
}

/// Per-trial category counts. The A/B/C entries are always present and start
/// at zero; distinct unrecognized raw tokens are tracked individually.
/// Created fresh for each trial and discarded after scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerTally {
    a: u32,
    b: u32,
    c: u32,
    unrecognized: BTreeMap<String, u32>,
}

impl AnswerTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category) {
        match category {
            Category::A => self.a += 1,
            Category::B => self.b += 1,
            Category::C => self.c += 1,
            Category::Unrecognized(raw) => *self.unrecognized.entry(raw).or_insert(0) += 1,
        }
    }

    pub fn count_a(&self) -> u32 {
        self.a
    }

    pub fn count_b(&self) -> u32 {
        self.b
    }

    pub fn count_c(&self) -> u32 {
        self.c
    }

    pub fn unrecognized(&self) -> &BTreeMap<String, u32> {
        &self.unrecognized
    }

    pub fn unrecognized_total(&self) -> u32 {
        self.unrecognized.values().sum()
    }

    /// Sum over every bucket. Equals the statement-bank size after a full
    /// trial, since every reply lands in exactly one bucket.
    pub fn total(&self) -> u32 {
        self.a + self.b + self.c + self.unrecognized_total()
    }

    /// True when at least one answer fell outside the closed A/B/C set.
    pub fn has_unrecognized(&self) -> bool {
        !self.unrecognized.is_empty()
    }

    /// Number of distinct keys under a flat-map view of the tally: the three
    /// seeded categories plus one per distinct unrecognized raw token.
    pub fn distinct_keys(&self) -> usize {
        3 + self.unrecognized.len()
    }
}

impl fmt::Display for AnswerTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{A: {}, B: {}, C: {}", self.a, self.b, self.c)?;
        for (raw, n) in &self.unrecognized {
            write!(f, ", {:?}: {}", raw, n)?;
        }
        write!(f, "}}")
    }
}

/// Qualitative label derived from a trial score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Normal,
    AboveNormal,
    IncreasedRisk,
    Psychopath,
}

impl Diagnosis {
    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Normal => "Normal",
            Diagnosis::AboveNormal => "Above Normal",
            Diagnosis::IncreasedRisk => "Increased Risk",
            Diagnosis::Psychopath => "Psychopath",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
