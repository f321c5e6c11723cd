//! Builds the comparison view model: the side-by-side table, the why-switch
//! bullets, and the optional savings block. Everything here is presentation
//! data; the web layer only formats it.

use crate::copy::{generate_headline, generate_subheading};
use crate::data::{CompetitorRecord, ReferenceData};
use crate::profile::{UserProfile, TECH_GOOGLE_WORKSPACE, TECH_M365};
use crate::roi::{calculate_roi, RoiEstimate};

pub const NOT_AVAILABLE: &str = "N/A";
const GENERIC_COMPETITOR: &str = "Competitor";

const CHALLENGE_BULLETS: [(&str, &str); 6] = [
    ("Vendor sprawl", "Unified platform eliminates vendor sprawl"),
    ("False positives", "Advanced AI reduces false positives by 95%"),
    ("Email security", "Native email security built-in"),
    ("Margins", "Flexible pricing improves your margins"),
    ("Deployment", "Fast deployment - up and running in days"),
    (
        "Reporting",
        "Professional client reports that showcase your value",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub competitor: String,
    pub guardz: &'static str,
    /// True for the rows gated on the profile, false for the five base rows.
    pub conditional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub headline: String,
    pub subheading: String,
    pub competitor_name: String,
    pub rows: Vec<ComparisonRow>,
    pub why_switch: Vec<String>,
    pub roi: Option<RoiEstimate>,
}

pub fn build_comparison(profile: &UserProfile, data: &ReferenceData) -> ComparisonView {
    let competitor = data.find_competitor(&profile.current_solution);
    let msp_benefit = data.find_msp_benefit(&profile.msp_size);
    let industry_benefit = data.find_industry_benefit(&profile.industry_focus);

    let mut why_switch = Vec::new();
    if let Some(benefit) = msp_benefit {
        why_switch.push(benefit.deployment_benefit.clone());
        why_switch.push(benefit.operational_benefit.clone());
    }
    if let Some(benefit) = industry_benefit {
        why_switch.push(benefit.key_benefit.clone());
    }
    // Only appended when a competitor matched and the key is recognized;
    // an unrecognized challenge adds nothing rather than a blank bullet.
    if competitor.is_some() {
        if let Some(bullet) = challenge_bullet(&profile.biggest_challenge) {
            why_switch.push(bullet.to_string());
        }
    }

    ComparisonView {
        headline: generate_headline(profile),
        subheading: generate_subheading(profile),
        competitor_name: competitor
            .map(|record| record.competitor.trim().to_string())
            .unwrap_or_else(|| GENERIC_COMPETITOR.to_string()),
        rows: build_rows(profile, competitor),
        why_switch,
        roi: calculate_roi(competitor, profile),
    }
}

fn challenge_bullet(challenge: &str) -> Option<&'static str> {
    CHALLENGE_BULLETS
        .iter()
        .find(|(key, _)| *key == challenge)
        .map(|(_, bullet)| *bullet)
}

/// Five base rows in fixed order, then the conditional rows in fixed
/// evaluation order. Each gate is independent; any subset may show.
fn build_rows(profile: &UserProfile, competitor: Option<&CompetitorRecord>) -> Vec<ComparisonRow> {
    let cell = |value: Option<&String>| {
        value
            .map(String::clone)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    let mut rows = vec![
        ComparisonRow {
            feature: "Price per Endpoint",
            competitor: competitor
                .map(|c| format!("${}/month", c.price_per_endpoint))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            guardz: "$2.50/month",
            conditional: false,
        },
        ComparisonRow {
            feature: "Platform Type",
            competitor: cell(competitor.map(|c| &c.platform_type)),
            guardz: "Unified Security Platform",
            conditional: false,
        },
        ComparisonRow {
            feature: "Contract Terms",
            competitor: cell(competitor.map(|c| &c.contract_terms)),
            guardz: "Flexible, no lock-ins",
            conditional: false,
        },
        ComparisonRow {
            feature: "Target Audience",
            competitor: cell(competitor.map(|c| &c.target_audience)),
            guardz: "MSP-First",
            conditional: false,
        },
        ComparisonRow {
            feature: "Deployment Time",
            competitor: cell(competitor.map(|c| &c.deployment_time)),
            guardz: "3-5 days average",
            conditional: false,
        },
    ];

    if profile.biggest_challenge == "Email security" {
        rows.push(ComparisonRow {
            feature: "Email Security",
            competitor: cell(competitor.map(|c| &c.email_security)),
            guardz: "✓ Native Built-in",
            conditional: true,
        });
    }

    if profile.biggest_challenge == "Vendor sprawl" {
        rows.push(ComparisonRow {
            feature: "Integration Approach",
            competitor: "Multiple point solutions".to_string(),
            guardz: "✓ Unified Platform",
            conditional: true,
        });
    }

    if profile.biggest_challenge == "False positives" {
        rows.push(ComparisonRow {
            feature: "Alert Accuracy",
            competitor: competitor
                .map(|c| format!("{} false positives", c.false_positive_rate))
                .unwrap_or_else(|| "High false positives".to_string()),
            guardz: "✓ 95% auto-remediation",
            conditional: true,
        });
    }

    if profile.has_tech(TECH_M365) {
        rows.push(ComparisonRow {
            feature: "Microsoft 365 Integration",
            competitor: match competitor {
                Some(c) if c.m365_integration == "Yes" => "✓".to_string(),
                _ => "❌".to_string(),
            },
            guardz: "✓ Deep Integration",
            conditional: true,
        });
    }

    if profile.has_tech(TECH_GOOGLE_WORKSPACE) {
        rows.push(ComparisonRow {
            feature: "Google Workspace Support",
            competitor: match competitor {
                Some(c) if c.google_workspace_support == "Yes" => "✓".to_string(),
                Some(c) if c.google_workspace_support == "Partial" => "Partial".to_string(),
                _ => "❌".to_string(),
            },
            guardz: "✓ Full Support",
            conditional: true,
        });
    }

    rows
}
