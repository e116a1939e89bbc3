use compass_model::assessment::{Assessment, Recommendation, RecommendationDetails};
use compass_model::band::MaturityBand;
use std::path::{Path, PathBuf};

/// The exported document always lands under this name in the working
/// directory.
pub(crate) const EXPORT_FILENAME: &str = "platform-maturity-report.md";

const SCORE_BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 28;

fn score_bar(score: f64, max: f64) -> String {
    let filled = ((score / max) * SCORE_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(SCORE_BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(SCORE_BAR_WIDTH - filled))
}

/// Terminal rendering of an assessment: overall score with its band,
/// summary, per-layer bars, and the three recommendations.
pub(crate) fn render(assessment: &Assessment) -> String {
    let mut out = String::new();

    out.push_str("\nPlatform Maturity Assessment Report\n");
    out.push_str("===================================\n\n");
    out.push_str(&format!(
        "Overall maturity: {:.1}/5 ({})\n",
        assessment.overall_score,
        assessment.band()
    ));
    if let Some(statement) = &assessment.maturity_statement {
        out.push_str(&format!("{statement}\n"));
    }

    out.push_str("\nExecutive summary\n-----------------\n");
    out.push_str(&format!("{}\n", assessment.executive_summary));

    out.push_str("\nMaturity by layer\n-----------------\n");
    for (layer, score) in &assessment.layer_scores {
        out.push_str(&format!(
            "{:<LABEL_WIDTH$} {} {:.1}/5\n",
            layer.label(),
            score_bar(*score, 5.0),
            score
        ));
        if let Some(analysis) = assessment
            .layer_analysis
            .as_ref()
            .and_then(|entries| entries.get(layer))
        {
            out.push_str(&format!("  signal: {}\n", analysis.signal));
            out.push_str(&format!("  risk:   {}\n", analysis.risk));
            out.push_str(&format!("  impact: {}\n", analysis.impact));
        }
    }

    out.push_str("\nTop recommendations\n-------------------\n");
    for (number, recommendation) in assessment.recommendations.iter().enumerate() {
        out.push_str(&render_recommendation(number + 1, recommendation));
    }

    out
}

fn render_recommendation(number: usize, recommendation: &Recommendation) -> String {
    let mut out = format!("{number}. {}\n", recommendation.title);
    match &recommendation.details {
        RecommendationDetails::Expanded {
            strategic_action,
            risk_of_inaction,
            expected_outcome,
        } => {
            out.push_str(&format!("   Strategic action: {strategic_action}\n"));
            out.push_str(&format!("   Risk of inaction: {risk_of_inaction}\n"));
            out.push_str(&format!("   Expected outcome: {expected_outcome}\n"));
        }
        RecommendationDetails::Legacy { description, impact } => {
            out.push_str(&format!("   {description}\n"));
            out.push_str(&format!("   Impact: {impact}\n"));
        }
    }
    out
}

/// The copy-paste summary block offered after an assessment completes.
pub(crate) fn share_text(assessment: &Assessment) -> String {
    format!(
        "Platform Maturity Assessment Results:\n\nOverall Score: {:.1}/5\n\n{}\n\nPowered by Platform Maturity Assessment Tool",
        assessment.overall_score, assessment.executive_summary
    )
}

/// Markdown rendition of the same report, section for section.
pub(crate) fn export_markdown(assessment: &Assessment) -> String {
    let mut out = String::from("# Platform Maturity Assessment Report\n\n");

    out.push_str(&format!(
        "**Overall maturity:** {:.1}/5 ({})\n",
        assessment.overall_score,
        assessment.band()
    ));
    if let Some(statement) = &assessment.maturity_statement {
        out.push_str(&format!("\n> {statement}\n"));
    }

    out.push_str("\n## Executive summary\n\n");
    out.push_str(&format!("{}\n", assessment.executive_summary));

    out.push_str("\n## Maturity by layer\n\n");
    out.push_str("| Layer | Score | Band |\n|---|---|---|\n");
    for (layer, score) in &assessment.layer_scores {
        out.push_str(&format!(
            "| {} | {score:.1}/5 | {} |\n",
            layer.label(),
            MaturityBand::from_score(*score)
        ));
    }

    if let Some(entries) = &assessment.layer_analysis {
        out.push_str("\n## Layer analysis\n");
        for (layer, analysis) in entries {
            out.push_str(&format!("\n### {}\n\n", layer.label()));
            out.push_str(&format!("- **Signal:** {}\n", analysis.signal));
            out.push_str(&format!("- **Risk:** {}\n", analysis.risk));
            out.push_str(&format!("- **Impact:** {}\n", analysis.impact));
        }
    }

    out.push_str("\n## Top recommendations\n");
    for (number, recommendation) in assessment.recommendations.iter().enumerate() {
        out.push_str(&format!("\n### {}. {}\n\n", number + 1, recommendation.title));
        match &recommendation.details {
            RecommendationDetails::Expanded {
                strategic_action,
                risk_of_inaction,
                expected_outcome,
            } => {
                out.push_str(&format!("- **Strategic action:** {strategic_action}\n"));
                out.push_str(&format!("- **Risk of inaction:** {risk_of_inaction}\n"));
                out.push_str(&format!("- **Expected outcome:** {expected_outcome}\n"));
            }
            RecommendationDetails::Legacy { description, impact } => {
                out.push_str(&format!("{description}\n\n"));
                out.push_str(&format!("**Impact:** {impact}\n"));
            }
        }
    }

    out
}

/// Writes the Markdown report next to the process and returns its path.
pub(crate) fn export(assessment: &Assessment) -> std::io::Result<PathBuf> {
    let path = Path::new(EXPORT_FILENAME);
    std::fs::write(path, export_markdown(assessment))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_model::assessment::LayerAnalysis;
    use compass_model::layer::Layer;
    use indexmap::IndexMap;

    fn assessment() -> Assessment {
        let mut layer_analysis = IndexMap::new();
        layer_analysis.insert(
            Layer::PlatformServices,
            LayerAnalysis {
                signal: "Pipelines differ per team".to_owned(),
                risk: "Slow onboarding".to_owned(),
                impact: "Higher delivery cost".to_owned(),
            },
        );
        Assessment {
            overall_score: 3.6,
            maturity_statement: Some("Mature delivery with governance gaps.".to_owned()),
            layer_scores: Layer::ALL.iter().map(|layer| (*layer, 3.5)).collect(),
            layer_analysis: Some(layer_analysis),
            recommendations: vec![
                Recommendation {
                    title: "Standardize pipelines".to_owned(),
                    details: RecommendationDetails::Expanded {
                        strategic_action: "Adopt a shared CI/CD template".to_owned(),
                        risk_of_inaction: "Growing per-team divergence".to_owned(),
                        expected_outcome: "Shorter lead times".to_owned(),
                    },
                },
                Recommendation {
                    title: "Tag cloud spend".to_owned(),
                    details: RecommendationDetails::Legacy {
                        description: "Introduce a tagging policy".to_owned(),
                        impact: "Cost attribution per product".to_owned(),
                    },
                },
                Recommendation {
                    title: "Publish delivery metrics".to_owned(),
                    details: RecommendationDetails::Legacy {
                        description: "Expose DORA metrics to leadership".to_owned(),
                        impact: "Earlier course corrections".to_owned(),
                    },
                },
            ],
            executive_summary: "Mature overall with uneven governance.".to_owned(),
        }
    }

    #[test]
    fn test_render_carries_band_and_both_shapes() {
        let text = render(&assessment());
        assert!(text.contains("Overall maturity: 3.6/5 (Mature)"));
        assert!(text.contains("Strategic action: Adopt a shared CI/CD template"));
        assert!(text.contains("Impact: Cost attribution per product"));
        assert!(text.contains("signal: Pipelines differ per team"));
    }

    #[test]
    fn test_render_lists_every_layer() {
        let text = render(&assessment());
        for layer in Layer::ALL {
            assert!(text.contains(layer.label()), "missing {}", layer.label());
        }
    }

    #[test]
    fn test_score_bar_is_fixed_width() {
        for score in [1.0, 2.3, 5.0] {
            assert_eq!(score_bar(score, 5.0).chars().count(), SCORE_BAR_WIDTH);
        }
    }

    #[test]
    fn test_share_text_matches_published_format() {
        let text = share_text(&assessment());
        assert!(text.starts_with("Platform Maturity Assessment Results:"));
        assert!(text.contains("Overall Score: 3.6/5"));
        assert!(text.contains("Mature overall with uneven governance."));
    }

    #[test]
    fn test_markdown_export_sections() {
        let markdown = export_markdown(&assessment());
        assert!(markdown.starts_with("# Platform Maturity Assessment Report"));
        assert!(markdown.contains("## Maturity by layer"));
        assert!(markdown.contains("| Platform Services | 3.5/5 | Mature |"));
        assert!(markdown.contains("### 1. Standardize pipelines"));
        assert!(markdown.contains("**Impact:** Cost attribution per product"));
    }
}
