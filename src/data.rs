//! Reference data loader: three small CSV tables read once per process and
//! treated as immutable afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const COMPETITORS_FILE: &str = "competitors.csv";
pub const MSP_BENEFITS_FILE: &str = "msp_size_benefits.csv";
pub const INDUSTRY_BENEFITS_FILE: &str = "industry_benefits.csv";

/// One row of competitor facts. All attributes are free text as shipped in
/// the CSV; `price_per_endpoint` is only parsed to a number at estimate time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompetitorRecord {
    pub competitor: String,
    pub price_per_endpoint: String,
    pub platform_type: String,
    pub contract_terms: String,
    pub target_audience: String,
    pub deployment_time: String,
    pub email_security: String,
    pub false_positive_rate: String,
    pub m365_integration: String,
    pub google_workspace_support: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MspSizeBenefit {
    pub msp_size: String,
    pub deployment_benefit: String,
    pub operational_benefit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndustryBenefit {
    pub industry: String,
    pub key_benefit: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: csv::Error },
}

/// The three tables bundled together, in load (file) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub competitors: Vec<CompetitorRecord>,
    pub msp_benefits: Vec<MspSizeBenefit>,
    pub industry_benefits: Vec<IndustryBenefit>,
}

impl ReferenceData {
    /// Trimmed-name match against the current solution; first match wins if
    /// the data ever carries duplicates.
    pub fn find_competitor(&self, solution: &str) -> Option<&CompetitorRecord> {
        self.competitors
            .iter()
            .find(|record| record.competitor.trim() == solution)
    }

    pub fn find_msp_benefit(&self, msp_size: &str) -> Option<&MspSizeBenefit> {
        self.msp_benefits
            .iter()
            .find(|benefit| benefit.msp_size == msp_size)
    }

    pub fn find_industry_benefit(&self, industry: &str) -> Option<&IndustryBenefit> {
        self.industry_benefits
            .iter()
            .find(|benefit| benefit.industry == industry)
    }
}

/// Reads the three tables concurrently. All-or-nothing: any read or parse
/// failure fails the whole load. Idempotent; caching is the caller's job.
pub async fn load_all(dir: &Path) -> Result<ReferenceData, LoadError> {
    let (competitors, msp_benefits, industry_benefits) = tokio::try_join!(
        load_table::<CompetitorRecord>(dir.join(COMPETITORS_FILE)),
        load_table::<MspSizeBenefit>(dir.join(MSP_BENEFITS_FILE)),
        load_table::<IndustryBenefit>(dir.join(INDUSTRY_BENEFITS_FILE)),
    )?;

    Ok(ReferenceData {
        competitors,
        msp_benefits,
        industry_benefits,
    })
}

async fn load_table<T>(path: PathBuf) -> Result<Vec<T>, LoadError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;

    // Header row names the columns; fully empty lines are skipped.
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const COMPETITORS_CSV: &str = "\
competitor,price_per_endpoint,platform_type,contract_terms,target_audience,deployment_time,email_security,false_positive_rate,m365_integration,google_workspace_support
Huntress,6.50,Managed EDR,Monthly or annual,MSP Channel,About 1 week,Add-on module,Low,Yes,No

Kaseya,5.50,IT Management Suite,Multi-year lock-in,MSP Channel,3-6 weeks,Via add-ons,High,Partial,No
";

    const MSP_BENEFITS_CSV: &str = "\
msp_size,deployment_benefit,operational_benefit
Growing (6-15 techs),Templated onboarding,One console for the whole team
";

    const INDUSTRY_BENEFITS_CSV: &str = "\
industry,key_benefit
Healthcare,HIPAA-aligned controls out of the box
";

    fn write_tables(dir: &Path) {
        fs::write(dir.join(COMPETITORS_FILE), COMPETITORS_CSV).unwrap();
        fs::write(dir.join(MSP_BENEFITS_FILE), MSP_BENEFITS_CSV).unwrap();
        fs::write(dir.join(INDUSTRY_BENEFITS_FILE), INDUSTRY_BENEFITS_CSV).unwrap();
    }

    #[tokio::test]
    async fn loads_all_three_tables_with_headers_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());

        let data = load_all(dir.path()).await.expect("load");
        assert_eq!(data.competitors.len(), 2);
        assert_eq!(data.msp_benefits.len(), 1);
        assert_eq!(data.industry_benefits.len(), 1);

        let huntress = &data.competitors[0];
        assert_eq!(huntress.competitor, "Huntress");
        assert_eq!(huntress.price_per_endpoint, "6.50");
        assert_eq!(huntress.m365_integration, "Yes");
        assert_eq!(data.industry_benefits[0].industry, "Healthcare");
    }

    #[tokio::test]
    async fn two_loads_from_unchanged_files_are_structurally_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());

        let first = load_all(dir.path()).await.expect("first load");
        let second = load_all(dir.path()).await.expect("second load");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_file_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        fs::remove_file(dir.path().join(INDUSTRY_BENEFITS_FILE)).unwrap();

        let err = load_all(dir.path()).await.expect_err("load should fail");
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[tokio::test]
    async fn malformed_row_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        fs::write(
            dir.path().join(MSP_BENEFITS_FILE),
            "msp_size,deployment_benefit,operational_benefit\nGrowing (6-15 techs),only-one-value\n",
        )
        .unwrap();

        let err = load_all(dir.path()).await.expect_err("load should fail");
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn competitor_match_trims_names_and_takes_the_first_duplicate() {
        let record = |name: &str, price: &str| CompetitorRecord {
            competitor: name.to_string(),
            price_per_endpoint: price.to_string(),
            platform_type: String::new(),
            contract_terms: String::new(),
            target_audience: String::new(),
            deployment_time: String::new(),
            email_security: String::new(),
            false_positive_rate: String::new(),
            m365_integration: String::new(),
            google_workspace_support: String::new(),
        };
        let data = ReferenceData {
            competitors: vec![record(" Coro ", "7.00"), record("Coro", "9.99")],
            msp_benefits: vec![],
            industry_benefits: vec![],
        };

        let matched = data.find_competitor("Coro").expect("match");
        assert_eq!(matched.price_per_endpoint, "7.00");
        assert!(data.find_competitor("Sophos").is_none());
    }
}
