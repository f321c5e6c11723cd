use std::collections::BTreeSet;

/// Sentinel value for prospects with no incumbent security vendor.
pub const NO_SOLUTION: &str = "None";

/// Industry label that gets the generic "diverse client bases" copy.
pub const MIXED_INDUSTRY: &str = "Mixed/General";

pub const TECH_M365: &str = "Microsoft 365";
pub const TECH_GOOGLE_WORKSPACE: &str = "Google Workspace";

/// (value, label) pairs for the current-solution select.
pub const CURRENT_SOLUTIONS: [(&str, &str); 6] = [
    ("Sophos", "Sophos"),
    ("Coro", "Coro"),
    ("Blackpoint", "Blackpoint Cyber"),
    ("Huntress", "Huntress"),
    ("Kaseya", "Kaseya"),
    ("None", "None/Evaluating options"),
];

pub const MSP_SIZES: [(&str, &str); 4] = [
    ("Solo/Small (1-5 techs)", "Solo/Small (1-5 techs)"),
    ("Growing (6-15 techs)", "Growing (6-15 techs)"),
    ("Established (16-50 techs)", "Established (16-50 techs)"),
    ("Enterprise MSP (50+ techs)", "Enterprise MSP (50+ techs)"),
];

pub const CLIENT_BASE_SIZES: [(&str, &str); 4] = [
    ("Under 500 endpoints", "Under 500 endpoints"),
    ("500-2,000 endpoints", "500-2,000 endpoints"),
    ("2,000-5,000 endpoints", "2,000-5,000 endpoints"),
    ("5,000+ endpoints", "5,000+ endpoints"),
];

pub const INDUSTRIES: [(&str, &str); 6] = [
    ("Healthcare", "Healthcare"),
    ("Financial Services", "Financial Services"),
    ("Professional Services", "Professional Services (Legal, Accounting)"),
    ("Manufacturing", "Manufacturing"),
    ("Retail/Hospitality", "Retail/Hospitality"),
    ("Mixed/General", "Mixed/General"),
];

pub const TECH_STACK: [&str; 6] = [
    "Microsoft 365",
    "Google Workspace",
    "SentinelOne EDR",
    "CrowdStrike EDR",
    "Microsoft Defender",
    "RMM Tools (ConnectWise, NinjaOne, Datto)",
];

pub const CHALLENGES: [(&str, &str); 6] = [
    ("Vendor sprawl", "Too many point solutions (vendor sprawl)"),
    ("False positives", "High false positive alert fatigue"),
    ("Email security", "Lack of email security coverage"),
    ("Deployment", "Complex deployment/management"),
    ("Margins", "Poor margins/profitability"),
    ("Reporting", "Weak client reporting"),
];

pub const DECISION_TIMELINES: [(&str, &str); 3] = [
    ("Active evaluation (next 30 days)", "Active evaluation (next 30 days)"),
    ("Planning (next quarter)", "Planning (next quarter)"),
    ("Researching (6+ months)", "Researching (6+ months)"),
];

/// A completed discovery profile. Produced by a successful form submit and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub current_solution: String,
    pub msp_size: String,
    pub client_base_size: String,
    pub industry_focus: String,
    pub tech_stack: BTreeSet<String>,
    pub biggest_challenge: String,
    pub decision_timeline: String,
}

impl UserProfile {
    pub fn has_tech(&self, tech: &str) -> bool {
        self.tech_stack.contains(tech)
    }
}
