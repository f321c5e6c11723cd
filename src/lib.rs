pub mod comparison;
pub mod copy;
pub mod data;
pub mod form;
pub mod profile;
pub mod roi;

pub use comparison::{build_comparison, ComparisonRow, ComparisonView, NOT_AVAILABLE};
pub use copy::{generate_headline, generate_subheading};
pub use data::{
    load_all, CompetitorRecord, IndustryBenefit, LoadError, MspSizeBenefit, ReferenceData,
};
pub use form::{DiscoveryForm, Field};
pub use profile::UserProfile;
pub use roi::{calculate_roi, RoiEstimate, GUARDZ_PRICE_PER_ENDPOINT};
