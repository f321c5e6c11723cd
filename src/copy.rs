//! Templated hero copy for the comparison screen. Total functions over
//! fixed tables: every input maps to a sentence, unmatched keys to the
//! generic fallback.

use crate::profile::{UserProfile, MIXED_INDUSTRY};

const SIZE_LABELS: [(&str, &str); 4] = [
    ("Solo/Small (1-5 techs)", "Solo MSPs"),
    ("Growing (6-15 techs)", "Growing MSPs"),
    ("Established (16-50 techs)", "Established MSPs"),
    ("Enterprise MSP (50+ techs)", "Enterprise MSPs"),
];

const SUBHEADINGS: [(&str, &str); 6] = [
    ("Vendor sprawl", "One unified platform. Zero vendor fatigue."),
    (
        "False positives",
        "95% auto-remediation. Less noise, more protection.",
    ),
    ("Email security", "Native email security. No add-ons needed."),
    ("Margins", "Better margins. Flexible contracts. No lock-ins."),
    ("Deployment", "Deploy in days, not weeks. Set and forget."),
    ("Reporting", "Client-ready reports that sell your value."),
];

const FALLBACK_SIZE_LABEL: &str = "MSPs";
const FALLBACK_SUBHEADING: &str = "Enterprise-grade security made simple.";

fn lookup<'a>(table: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn generate_headline(profile: &UserProfile) -> String {
    let size = lookup(&SIZE_LABELS, &profile.msp_size).unwrap_or(FALLBACK_SIZE_LABEL);
    let industry = if profile.industry_focus == MIXED_INDUSTRY {
        "Diverse Client Bases".to_string()
    } else {
        format!("{} Clients", profile.industry_focus)
    };
    format!("Built for {size} Serving {industry}")
}

pub fn generate_subheading(profile: &UserProfile) -> String {
    lookup(&SUBHEADINGS, &profile.biggest_challenge)
        .unwrap_or(FALLBACK_SUBHEADING)
        .to_string()
}
