//! Strategy listing command handler.

use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use crate::matching::{StrategyRegistry, DEFAULT_STRATEGY};

/// One registered strategy.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StrategyInfo {
    pub id: String,
    pub family: String,
    pub default: bool,
}

/// Run the strategies command: list every registered strategy.
pub fn run_strategies(format: OutputFormat) -> Result<()> {
    let infos = collect(&StrategyRegistry::builtin());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
        OutputFormat::Text => print!("{}", format_table(&infos)),
    }

    Ok(())
}

fn collect(registry: &StrategyRegistry) -> Vec<StrategyInfo> {
    registry
        .iter()
        .map(|s| StrategyInfo {
            id: s.id().to_string(),
            family: s.family().name().to_string(),
            default: s.id() == DEFAULT_STRATEGY,
        })
        .collect()
}

fn format_table(infos: &[StrategyInfo]) -> String {
    let mut out = String::from("ID                FAMILY\n");
    for info in infos {
        out.push_str(&format!(
            "{:<16}  {}{}\n",
            info.id,
            info.family,
            if info.default { "  (default)" } else { "" },
        ));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_default() {
        let infos = collect(&StrategyRegistry::builtin());
        assert_eq!(infos.iter().filter(|i| i.default).count(), 1);
    }

    #[test]
    fn test_table_listing() {
        let infos = collect(&StrategyRegistry::builtin());
        insta::assert_snapshot!(format_table(&infos), @r###"
        ID                FAMILY
        bigram-cosine     similarity  (default)
        penalized-cosine  similarity
        jaccard           similarity
        jaro-winkler      similarity
        levenshtein       distance
        "###);
    }

    #[test]
    fn test_json_listing() {
        let infos = collect(&StrategyRegistry::builtin());
        insta::assert_json_snapshot!(infos, @r###"
        [
          {
            "id": "bigram-cosine",
            "family": "similarity",
            "default": true
          },
          {
            "id": "penalized-cosine",
            "family": "similarity",
            "default": false
          },
          {
            "id": "jaccard",
            "family": "similarity",
            "default": false
          },
          {
            "id": "jaro-winkler",
            "family": "similarity",
            "default": false
          },
          {
            "id": "levenshtein",
            "family": "distance",
            "default": false
          }
        ]
        "###);
    }
}
