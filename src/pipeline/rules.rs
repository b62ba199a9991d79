//! Weighted indicator tables for request classification.
//!
//! Each dimension (technical, pastoral, doctrinal) owns an ordered set of
//! `(pattern, weight)` rules. Patterns are compiled once when the set is
//! built and run against already lower-cased text, so they are written in
//! lower case and carry no `(?i)` flag.

use regex::Regex;

/// Scoring axis an indicator contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Technical,
    Pastoral,
    Doctrinal,
}

/// A single weighted pattern.
#[derive(Debug, Clone)]
pub struct IndicatorRule {
    /// Pattern source, reported as the matcher identifier.
    pub pattern: String,
    /// Compiled regex for matching.
    pub regex: Regex,
    /// Points added per occurrence.
    pub weight: u32,
}

impl IndicatorRule {
    pub fn new(pattern: &str, weight: u32) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(pattern)?,
            weight,
        })
    }

    /// Number of non-overlapping occurrences in `text`.
    pub fn count(&self, text: &str) -> u32 {
        self.regex.find_iter(text).count() as u32
    }
}

/// Score of one dimension plus the rules that contributed to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetScore {
    pub score: u32,
    pub matched: Vec<String>,
}

/// Ordered rules for one dimension.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    dimension: Dimension,
    rules: Vec<IndicatorRule>,
}

impl IndicatorSet {
    /// Create an empty set (for custom tables and tests).
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            dimension,
            rules: Vec::new(),
        }
    }

    /// Compile a table of `(pattern, weight)` pairs.
    pub fn from_table(dimension: Dimension, table: &[(&str, u32)]) -> Result<Self, regex::Error> {
        let rules = table
            .iter()
            .map(|(pattern, weight)| IndicatorRule::new(pattern, *weight))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dimension, rules })
    }

    /// Built-in set for a dimension.
    pub fn default_for(dimension: Dimension) -> Self {
        let table = match dimension {
            Dimension::Technical => TECHNICAL_INDICATORS,
            Dimension::Pastoral => PASTORAL_INDICATORS,
            Dimension::Doctrinal => DOCTRINE_INDICATORS,
        };
        Self::from_table(dimension, table).expect("built-in indicator patterns compile")
    }

    /// Append a custom rule.
    pub fn push(&mut self, pattern: &str, weight: u32) -> Result<(), regex::Error> {
        self.rules.push(IndicatorRule::new(pattern, weight)?);
        Ok(())
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn rules(&self) -> &[IndicatorRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sum `weight * occurrences` over every rule, recording matched
    /// patterns in table order.
    pub fn score(&self, text: &str) -> SetScore {
        let mut result = SetScore::default();
        for rule in &self.rules {
            let count = rule.count(text);
            if count > 0 {
                result.score += rule.weight * count;
                result.matched.push(rule.pattern.clone());
            }
        }
        result
    }
}

// ── Built-in tables ─────────────────────────────────────────────────

/// Procedural, normative and quantitative questions.
const TECHNICAL_INDICATORS: &[(&str, u32)] = &[
    // possibility / obligation
    (r"\bsi può\b", 2),
    (r"\bnon si può\b", 2),
    (r"\bè possibile\b", 2),
    (r"\bè obbligatorio\b", 2),
    (r"\bbisogna\b", 2),
    (r"\bdeve\b", 1),
    (r"\bdevono\b", 1),
    // numbers / quantities
    (r"\bquanti\b", 2),
    (r"\bquante\b", 2),
    (r"\bquanto costa\b", 2),
    // timing
    (r"\bquando\b", 1),
    (r"\ba che ora\b", 2),
    (r"\borari\b", 2),
    // procedures
    (r"\bcome (?:si )?fa\b", 2),
    (r"\bcome funziona\b", 2),
    (r"\bqual è la procedura\b", 2),
    (r"\bche documenti?\b", 2),
    // formal roles and paperwork
    (r"\bpadrino\b", 1),
    (r"\bmadrina\b", 1),
    (r"\btestimone\b", 1),
    (r"\bcertificato\b", 2),
    (r"\bdocument\w+\b", 1),
    (r"\bmodulo\b", 1),
    (r"\biscrizione\b", 1),
];

/// First-person feelings, life situations, questions of meaning.
const PASTORAL_INDICATORS: &[(&str, u32)] = &[
    // emotional first person
    (r"\bmi sento\b", 3),
    (r"\bmi pesa\b", 3),
    (r"\bmi sono sentit[oa]\b", 3),
    (r"\bnon mi sento\b", 3),
    // emotions
    (r"\bsoffr\w+\b", 2),
    (r"\bdifficolt[àa]\b", 2),
    (r"\bferit[oa]\b", 2),
    (r"\besclus[oa]\b", 2),
    (r"\bsol[oa]\b", 2),
    (r"\bpaura\b", 2),
    (r"\bansia\b", 2),
    (r"\btristezza\b", 2),
    (r"\bcolpa\b", 2),
    (r"\bvergogna\b", 2),
    // not understanding
    (r"\bnon capisco\b", 2),
    (r"\bnon riesco a capire\b", 2),
    // complex life situations
    (r"\bdivorziat[oa]\b", 2),
    (r"\bseparat[oa]\b", 2),
    (r"\brisposat[oa]\b", 2),
    (r"\bconvivente\b", 2),
    (r"\blutto\b", 2),
    (r"\bdefunt[oa]\b", 2),
    (r"\bmalattia\b", 2),
    (r"\bdivorced\b", 2),
    (r"\bseparated\b", 2),
    (r"\bremarried\b", 2),
    (r"\bcohabiting\b", 2),
    (r"\banglican\b", 2),
    (r"\bprotestant\b", 2),
    (r"\bprevious marriage\b", 2),
    // meaning
    (r"\bperché la chiesa\b", 3),
    (r"\bperché dio\b", 3),
    (r"\bche senso ha\b", 3),
    (r"\bcome vivere\b", 3),
    (r"\bcome affrontare\b", 2),
];

/// Explicit requests for doctrinal explanation.
const DOCTRINE_INDICATORS: &[(&str, u32)] = &[
    (r"\bspiegazione\b", 2),
    (r"\bspiegami\b", 2),
    (r"\bperché la chiesa (?:insegna|dice|crede)\b", 3),
    (r"\bfondamento teologic\w+\b", 3),
    (r"\bdottrina\b", 2),
    (r"\bmagistero\b", 3),
    (r"\bcatechismo\b", 2),
    (r"\binsegnamento della chiesa\b", 3),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_compile() {
        assert_eq!(IndicatorSet::default_for(Dimension::Technical).len(), 24);
        assert_eq!(IndicatorSet::default_for(Dimension::Pastoral).len(), 35);
        assert_eq!(IndicatorSet::default_for(Dimension::Doctrinal).len(), 8);
    }

    #[test]
    fn score_multiplies_weight_by_occurrences() {
        let set = IndicatorSet::default_for(Dimension::Technical);
        // quando (1) x3
        let result = set.score("quando? quando, quando!");
        assert_eq!(result.score, 3);
        assert_eq!(result.matched, vec![r"\bquando\b".to_string()]);
    }

    #[test]
    fn word_boundaries_respect_accented_letters() {
        let set = IndicatorSet::default_for(Dimension::Pastoral);
        assert_eq!(set.score("ho molte difficoltà ora").score, 2);
        // "solo" must not match inside "consolo"
        assert_eq!(set.score("mi consolo").score, 0);
    }

    #[test]
    fn overlapping_rules_both_count() {
        let set = IndicatorSet::default_for(Dimension::Pastoral);
        // "non mi sento" (3) also contains "mi sento" (3)
        let result = set.score("non mi sento accolto");
        assert_eq!(result.score, 6);
        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.matched[0], r"\bmi sento\b");
    }

    #[test]
    fn matched_follows_table_order() {
        let set = IndicatorSet::default_for(Dimension::Doctrinal);
        let result = set.score("il catechismo e il magistero: spiegami");
        assert_eq!(
            result.matched,
            vec![
                r"\bspiegami\b".to_string(),
                r"\bmagistero\b".to_string(),
                r"\bcatechismo\b".to_string(),
            ]
        );
        assert_eq!(result.score, 7);
    }

    #[test]
    fn custom_rule_push() {
        let mut set = IndicatorSet::empty(Dimension::Technical);
        assert!(set.is_empty());
        set.push(r"\bbattesimo\b", 4).unwrap();
        assert_eq!(set.score("data del battesimo").score, 4);
        assert!(set.push(r"(unclosed", 1).is_err());
    }
}
