use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, bail};
use serde_json::json;

use parish_triage::config::KbConfig;
use parish_triage::kb::{CsvDirectorySource, KbTier, KnowledgeBaseLoader, MemoryCache};
use parish_triage::pipeline::{ClassificationResult, ExternalHint, RequestClassifier, guidance};

/// Tiers that ground a reply for this classification.
fn tiers_for(result: &ClassificationResult) -> Vec<KbTier> {
    let mut tiers = Vec::new();
    if result.needs_discernment || result.needs_doctrine {
        tiers.push(KbTier::Lite);
    }
    if result.needs_discernment {
        tiers.push(KbTier::Standard);
    }
    if result.needs_doctrine {
        tiers.push(KbTier::Heavy);
    }
    tiers
}

/// Parse `CATEGORY:CONFIDENCE`.
fn parse_hint(raw: &str) -> anyhow::Result<ExternalHint> {
    let (category, confidence) = raw
        .rsplit_once(':')
        .context("--hint expects CATEGORY:CONFIDENCE")?;
    let confidence: f32 = confidence
        .trim()
        .parse()
        .with_context(|| format!("invalid hint confidence: {confidence}"))?;
    Ok(ExternalHint::new(category.trim(), confidence))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut hint = None;
    let mut subject = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hint" => {
                let raw = args.next().context("--hint requires a value")?;
                hint = Some(parse_hint(&raw)?);
            }
            other if subject.is_none() => subject = Some(other.to_string()),
            other => bail!("unexpected argument: {other}"),
        }
    }
    let Some(subject) = subject else {
        bail!("usage: parish-triage [--hint CATEGORY:CONFIDENCE] SUBJECT < body");
    };

    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("failed to read message body from stdin")?;

    let classifier = RequestClassifier::new();
    let result = classifier.classify(&subject, &body, hint.as_ref());

    let kb_root = std::env::var("KB_ROOT").unwrap_or_else(|_| "./data/kb".to_string());
    let config = KbConfig::from_env()?;
    let loader = KnowledgeBaseLoader::new(
        config,
        Arc::new(MemoryCache::new()),
        Arc::new(CsvDirectorySource::new(kb_root)),
    );

    let knowledge: serde_json::Map<String, serde_json::Value> = tiers_for(&result)
        .into_iter()
        .map(|tier| {
            let content = loader.load_tier(tier);
            (
                tier.to_string(),
                json!({ "sizeBytes": content.len(), "content": content }),
            )
        })
        .collect();

    let report = json!({
        "classification": result,
        "guidance": guidance(result.request_type),
        "knowledgeBase": knowledge,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parish_triage::pipeline::{ClassificationSource, RequestType};
    use parish_triage::pipeline::types::DimensionScores;

    fn result(request_type: RequestType, discernment: bool, doctrine: bool) -> ClassificationResult {
        ClassificationResult {
            request_type,
            source: ClassificationSource::RuleEngine,
            scores: DimensionScores::default(),
            needs_discernment: discernment,
            needs_doctrine: doctrine,
            matched_indicators: vec![],
        }
    }

    #[test]
    fn technical_loads_nothing() {
        assert!(tiers_for(&result(RequestType::Technical, false, false)).is_empty());
    }

    #[test]
    fn mixed_with_doctrine_loads_every_tier() {
        assert_eq!(
            tiers_for(&result(RequestType::Mixed, true, true)),
            vec![KbTier::Lite, KbTier::Standard, KbTier::Heavy]
        );
    }

    #[test]
    fn doctrinal_loads_lite_and_heavy() {
        assert_eq!(
            tiers_for(&result(RequestType::Doctrinal, false, true)),
            vec![KbTier::Lite, KbTier::Heavy]
        );
    }

    #[test]
    fn hint_parsing() {
        let hint = parse_hint("Pastoral:0.9").unwrap();
        assert_eq!(hint.category, "Pastoral");
        assert!((hint.confidence - 0.9).abs() < f32::EPSILON);
        assert!(parse_hint("pastoral").is_err());
        assert!(parse_hint("pastoral:high").is_err());
    }
}
