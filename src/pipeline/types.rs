//! Shared types for request classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Request type ────────────────────────────────────────────────────

/// Intent category of an inbound message.
///
/// Steers the tone of the reply and which knowledge base tiers the caller
/// loads to ground it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Procedural question: dates, documents, requirements.
    Technical,
    /// Personal involvement: feelings, wounds, life situations.
    Pastoral,
    /// Both procedural and personal.
    Mixed,
    /// Explicit request for a doctrinal explanation.
    Doctrinal,
}

impl RequestType {
    /// Lower-case label, as used on the wire and by external classifiers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Pastoral => "pastoral",
            Self::Mixed => "mixed",
            Self::Doctrinal => "doctrinal",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RequestType {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "pastoral" => Ok(Self::Pastoral),
            "mixed" => Ok(Self::Mixed),
            "doctrinal" => Ok(Self::Doctrinal),
            other => Err(format!("unknown request type: {other}")),
        }
    }
}

/// Which decision path produced the request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassificationSource {
    /// Weighted indicator scoring.
    RuleEngine,
    /// High-confidence category supplied by an external classifier.
    ExternalHint,
}

// ── External hint ───────────────────────────────────────────────────

/// Category suggested by an external classifier (e.g. an LLM triage step).
///
/// Computed elsewhere and passed in by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalHint {
    pub category: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
}

impl ExternalHint {
    pub fn new(category: impl Into<String>, confidence: f32) -> Self {
        Self {
            category: category.into(),
            confidence,
        }
    }
}

// ── Result ──────────────────────────────────────────────────────────

/// Per-dimension weighted scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub technical: u32,
    pub pastoral: u32,
    pub doctrinal: u32,
}

/// Outcome of classifying one message.
///
/// `scores` are always computed, even when the type came from the hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub source: ClassificationSource,
    pub scores: DimensionScores,
    pub needs_discernment: bool,
    pub needs_doctrine: bool,
    /// Pattern sources of every rule that matched: technical, then
    /// pastoral, then doctrinal, each in table order.
    pub matched_indicators: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_type_parses_case_insensitively() {
        assert_eq!("PASTORAL".parse::<RequestType>(), Ok(RequestType::Pastoral));
        assert_eq!(" Doctrinal ".parse::<RequestType>(), Ok(RequestType::Doctrinal));
        assert!("urgent".parse::<RequestType>().is_err());
    }

    #[test]
    fn request_type_display_matches_label() {
        for t in [
            RequestType::Technical,
            RequestType::Pastoral,
            RequestType::Mixed,
            RequestType::Doctrinal,
        ] {
            assert_eq!(t.to_string(), t.label());
        }
    }

    #[test]
    fn result_serializes_with_wire_names() {
        let result = ClassificationResult {
            request_type: RequestType::Mixed,
            source: ClassificationSource::RuleEngine,
            scores: DimensionScores {
                technical: 2,
                pastoral: 2,
                doctrinal: 0,
            },
            needs_discernment: true,
            needs_doctrine: false,
            matched_indicators: vec![r"\bquanti\b".into()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "mixed");
        assert_eq!(json["source"], "ruleEngine");
        assert_eq!(json["needsDiscernment"], true);
        assert_eq!(json["scores"]["pastoral"], 2);
        assert_eq!(json["matchedIndicators"][0], r"\bquanti\b");
    }
}
