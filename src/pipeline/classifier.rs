//! Hybrid request classifier.
//!
//! Scores the message against the three indicator sets, then picks a
//! request type:
//! 1. A confident external hint (>= 0.75) wins outright.
//! 2. Otherwise a fixed decision tree over the rule scores.
//!
//! Scores are always computed, whichever path decided.

use tracing::{debug, info, warn};

use crate::pipeline::rules::{Dimension, IndicatorSet};
use crate::pipeline::types::{
    ClassificationResult, ClassificationSource, DimensionScores, ExternalHint, RequestType,
};

/// Texts longer than this (in characters) are truncated before scoring.
pub const MAX_ANALYSIS_CHARS: usize = 3000;

/// Characters kept from each end of a truncated text.
const TRUNCATE_KEEP_CHARS: usize = 1500;

/// Inserted between the kept head and tail.
const TRUNCATE_SEPARATOR: &str = " ... ";

/// Minimum confidence for an external hint to override the rules.
pub const HINT_CONFIDENCE_THRESHOLD: f32 = 0.75;

/// Stateless classifier over immutable indicator tables.
pub struct RequestClassifier {
    technical: IndicatorSet,
    pastoral: IndicatorSet,
    doctrinal: IndicatorSet,
}

impl RequestClassifier {
    /// Create a classifier with the built-in indicator tables.
    pub fn new() -> Self {
        Self {
            technical: IndicatorSet::default_for(Dimension::Technical),
            pastoral: IndicatorSet::default_for(Dimension::Pastoral),
            doctrinal: IndicatorSet::default_for(Dimension::Doctrinal),
        }
    }

    /// Create a classifier with custom tables.
    ///
    /// Each set must belong to the dimension of the slot it is passed in.
    pub fn with_sets(
        technical: IndicatorSet,
        pastoral: IndicatorSet,
        doctrinal: IndicatorSet,
    ) -> Self {
        debug_assert_eq!(technical.dimension(), Dimension::Technical);
        debug_assert_eq!(pastoral.dimension(), Dimension::Pastoral);
        debug_assert_eq!(doctrinal.dimension(), Dimension::Doctrinal);
        Self {
            technical,
            pastoral,
            doctrinal,
        }
    }

    /// Classify a message. Never fails; no matches yields `Technical`.
    pub fn classify(
        &self,
        subject: &str,
        body: &str,
        hint: Option<&ExternalHint>,
    ) -> ClassificationResult {
        let text = normalize(subject, body);

        let technical = self.technical.score(&text);
        let pastoral = self.pastoral.score(&text);
        let doctrinal = self.doctrinal.score(&text);

        let scores = DimensionScores {
            technical: technical.score,
            pastoral: pastoral.score,
            doctrinal: doctrinal.score,
        };

        let (request_type, source) = match hint.and_then(accepted_hint) {
            Some(hinted) => {
                info!(
                    request_type = %hinted,
                    confidence = hint.map(|h| h.confidence).unwrap_or_default(),
                    technical = scores.technical,
                    pastoral = scores.pastoral,
                    doctrinal = scores.doctrinal,
                    "Hybrid classifier used external hint"
                );
                (hinted, ClassificationSource::ExternalHint)
            }
            None => {
                let decided = decide(&scores);
                debug!(
                    request_type = %decided,
                    technical = scores.technical,
                    pastoral = scores.pastoral,
                    doctrinal = scores.doctrinal,
                    "Rule engine classified request"
                );
                (decided, ClassificationSource::RuleEngine)
            }
        };

        let needs_discernment = matches!(request_type, RequestType::Pastoral | RequestType::Mixed);
        let needs_doctrine = request_type == RequestType::Doctrinal
            || (scores.doctrinal >= 2 && request_type != RequestType::Technical);

        let mut matched_indicators = technical.matched;
        matched_indicators.extend(pastoral.matched);
        matched_indicators.extend(doctrinal.matched);

        ClassificationResult {
            request_type,
            source,
            scores,
            needs_discernment,
            needs_doctrine,
            matched_indicators,
        }
    }
}

impl Default for RequestClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Join subject and body, bound long threads to head + tail, lower-case.
pub fn normalize(subject: &str, body: &str) -> String {
    let full = format!("{subject} {body}");
    let len = full.chars().count();
    if len <= MAX_ANALYSIS_CHARS {
        return full.to_lowercase();
    }

    let head: String = full.chars().take(TRUNCATE_KEEP_CHARS).collect();
    let tail: String = full.chars().skip(len - TRUNCATE_KEEP_CHARS).collect();
    format!("{head}{TRUNCATE_SEPARATOR}{tail}").to_lowercase()
}

/// Rule-engine decision tree. Branch order is significant.
pub fn decide(scores: &DimensionScores) -> RequestType {
    let DimensionScores {
        technical,
        pastoral,
        doctrinal,
    } = *scores;

    if doctrinal >= 3 {
        RequestType::Doctrinal
    } else if pastoral >= 3 && pastoral > technical {
        RequestType::Pastoral
    } else if technical >= 2 && pastoral <= 1 {
        RequestType::Technical
    } else if pastoral >= 2 && technical >= 2 {
        RequestType::Mixed
    } else {
        RequestType::Technical
    }
}

/// The hinted type if the hint is confident and names a known category.
fn accepted_hint(hint: &ExternalHint) -> Option<RequestType> {
    // NaN confidence compares false and is rejected here.
    let confident = hint.confidence >= HINT_CONFIDENCE_THRESHOLD;
    if !confident || hint.category.trim().is_empty() {
        return None;
    }
    match hint.category.parse::<RequestType>() {
        Ok(request_type) => Some(request_type),
        Err(e) => {
            warn!(
                category = %hint.category,
                confidence = hint.confidence,
                error = %e,
                "Ignoring confident external hint with unknown category"
            );
            None
        }
    }
}
