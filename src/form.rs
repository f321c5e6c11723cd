//! Discovery form controller: the mutable state behind the first screen.

use std::collections::{BTreeMap, BTreeSet};

use crate::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    CurrentSolution,
    MspSize,
    ClientBaseSize,
    IndustryFocus,
    TechStack,
    BiggestChallenge,
    DecisionTimeline,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::CurrentSolution,
        Field::MspSize,
        Field::ClientBaseSize,
        Field::IndustryFocus,
        Field::TechStack,
        Field::BiggestChallenge,
        Field::DecisionTimeline,
    ];

    /// The wire name used by the form markup and the POST body.
    pub fn name(self) -> &'static str {
        match self {
            Field::CurrentSolution => "current_solution",
            Field::MspSize => "msp_size",
            Field::ClientBaseSize => "client_base_size",
            Field::IndustryFocus => "industry_focus",
            Field::TechStack => "tech_stack",
            Field::BiggestChallenge => "biggest_challenge",
            Field::DecisionTimeline => "decision_timeline",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::CurrentSolution => "Please select your current security solution",
            Field::MspSize => "Please select your MSP size",
            Field::ClientBaseSize => "Please select your client base size",
            Field::IndustryFocus => "Please select your primary industry focus",
            Field::TechStack => "Please select at least one technology",
            Field::BiggestChallenge => "Please select your biggest challenge",
            Field::DecisionTimeline => "Please select your decision timeline",
        }
    }
}

/// Owns the in-progress answers plus a per-field error map. Validation is a
/// full recomputation at submit time, not incremental.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryForm {
    current_solution: String,
    msp_size: String,
    client_base_size: String,
    industry_focus: String,
    tech_stack: BTreeSet<String>,
    biggest_challenge: String,
    decision_timeline: String,
    errors: BTreeMap<Field, String>,
}

impl DiscoveryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a single-select field and clears its error. The tech stack
    /// is a set, not a single select; passing `Field::TechStack` here adds
    /// the value, same as `toggle_tech(value, true)`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::CurrentSolution => self.current_solution = value,
            Field::MspSize => self.msp_size = value,
            Field::ClientBaseSize => self.client_base_size = value,
            Field::IndustryFocus => self.industry_focus = value,
            Field::TechStack => {
                self.toggle_tech(&value, true);
                return;
            }
            Field::BiggestChallenge => self.biggest_challenge = value,
            Field::DecisionTimeline => self.decision_timeline = value,
        }
        self.errors.remove(&field);
    }

    pub fn toggle_tech(&mut self, value: &str, included: bool) {
        if included {
            self.tech_stack.insert(value.to_string());
        } else {
            self.tech_stack.remove(value);
        }
        self.errors.remove(&Field::TechStack);
    }

    /// Re-validates every required field from scratch. Returns true iff no
    /// error was recorded.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for field in Field::ALL {
            let empty = match field {
                Field::TechStack => self.tech_stack.is_empty(),
                _ => self.value(field).is_empty(),
            };
            if empty {
                self.errors.insert(field, field.required_message().to_string());
            }
        }
        self.errors.is_empty()
    }

    /// Validates and, on success, hands out an immutable profile copy. On
    /// failure the error map stays populated for display.
    pub fn submit(&mut self) -> Option<UserProfile> {
        if !self.validate() {
            return None;
        }
        Some(UserProfile {
            current_solution: self.current_solution.clone(),
            msp_size: self.msp_size.clone(),
            client_base_size: self.client_base_size.clone(),
            industry_focus: self.industry_focus.clone(),
            tech_stack: self.tech_stack.clone(),
            biggest_challenge: self.biggest_challenge.clone(),
            decision_timeline: self.decision_timeline.clone(),
        })
    }

    /// The explicit reset transition back to the all-empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CurrentSolution => &self.current_solution,
            Field::MspSize => &self.msp_size,
            Field::ClientBaseSize => &self.client_base_size,
            Field::IndustryFocus => &self.industry_focus,
            Field::TechStack => "",
            Field::BiggestChallenge => &self.biggest_challenge,
            Field::DecisionTimeline => &self.decision_timeline,
        }
    }

    pub fn tech_stack(&self) -> &BTreeSet<String> {
        &self.tech_stack
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_form() -> DiscoveryForm {
        let mut form = DiscoveryForm::new();
        form.set_field(Field::CurrentSolution, "Huntress");
        form.set_field(Field::MspSize, "Growing (6-15 techs)");
        form.set_field(Field::ClientBaseSize, "500-2,000 endpoints");
        form.set_field(Field::IndustryFocus, "Healthcare");
        form.toggle_tech("Microsoft 365", true);
        form.set_field(Field::BiggestChallenge, "Email security");
        form.set_field(Field::DecisionTimeline, "Planning (next quarter)");
        form
    }

    #[test]
    fn empty_form_fails_validation_with_all_fields_flagged() {
        let mut form = DiscoveryForm::new();
        assert!(!form.validate());
        let flagged: Vec<Field> = form.errors().keys().copied().collect();
        assert_eq!(flagged, Field::ALL.to_vec());
        assert!(form.submit().is_none());
    }

    #[test]
    fn completed_form_validates_with_no_errors() {
        let mut form = completed_form();
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn validation_flags_exactly_the_empty_fields() {
        let mut form = completed_form();
        form.toggle_tech("Microsoft 365", false);
        assert!(!form.validate());
        let flagged: Vec<Field> = form.errors().keys().copied().collect();
        assert_eq!(flagged, vec![Field::TechStack]);
        assert_eq!(
            form.error(Field::TechStack),
            Some("Please select at least one technology")
        );
    }

    #[test]
    fn setting_a_field_clears_its_error() {
        let mut form = DiscoveryForm::new();
        form.validate();
        assert!(form.error(Field::MspSize).is_some());
        form.set_field(Field::MspSize, "Solo/Small (1-5 techs)");
        assert!(form.error(Field::MspSize).is_none());
        // other errors stay until the next validation pass
        assert!(form.error(Field::IndustryFocus).is_some());
    }

    #[test]
    fn toggling_tech_clears_the_tech_error() {
        let mut form = DiscoveryForm::new();
        form.validate();
        assert!(form.error(Field::TechStack).is_some());
        form.toggle_tech("Google Workspace", true);
        assert!(form.error(Field::TechStack).is_none());
        assert!(form.tech_stack().contains("Google Workspace"));
    }

    #[test]
    fn toggle_removes_when_not_included() {
        let mut form = DiscoveryForm::new();
        form.toggle_tech("Microsoft 365", true);
        form.toggle_tech("Google Workspace", true);
        form.toggle_tech("Microsoft 365", false);
        assert!(!form.tech_stack().contains("Microsoft 365"));
        assert!(form.tech_stack().contains("Google Workspace"));
    }

    #[test]
    fn submit_returns_an_independent_profile_copy() {
        let mut form = completed_form();
        let profile = form.submit().expect("profile");
        form.reset();
        assert_eq!(profile.current_solution, "Huntress");
        assert!(profile.tech_stack.contains("Microsoft 365"));
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut form = completed_form();
        form.validate();
        form.reset();
        assert_eq!(form.value(Field::CurrentSolution), "");
        assert!(form.tech_stack().is_empty());
        assert!(form.errors().is_empty());
    }
}
