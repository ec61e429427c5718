//! Financial-consultation lead capture.
//!
//! [`LeadForm`] holds what the visitor typed, validates it when they press
//! submit, and tracks which phase the form is in: editing, submitting or
//! submitted. Talking to the endpoint is [`submit_lead`]'s job.

mod submit;
mod transport;

pub use submit::{
    interpret_response, submit_lead, FormSlot, LeadResponse, LeadTransport, SubmitError,
    SubmitOutcome, TransportError,
};
pub use transport::DefaultTransport;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const FINANCIAL_CONSULTATION_ENDPOINT: &str = "/api/financial-consultation";

/// Shown whenever a submission fails without a message of its own.
pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SailingStatus {
    AtSea,
    Ashore,
    BetweenAssignments,
    NewToIndustry,
}

impl SailingStatus {
    pub const ALL: [SailingStatus; 4] = [
        SailingStatus::AtSea,
        SailingStatus::Ashore,
        SailingStatus::BetweenAssignments,
        SailingStatus::NewToIndustry,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SailingStatus::AtSea => "at-sea",
            SailingStatus::Ashore => "ashore",
            SailingStatus::BetweenAssignments => "between-assignments",
            SailingStatus::NewToIndustry => "new-to-industry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SailingStatus::AtSea => "Yes, I am at sea right now",
            SailingStatus::Ashore => "I sail, but I am ashore at the moment",
            SailingStatus::BetweenAssignments => "I am between assignments",
            SailingStatus::NewToIndustry => "Not yet, I am new to the industry",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InterestTag {
    Retirement,
    Tsp,
    Taxes,
    Budgeting,
    Investing,
    Insurance,
    HomeBuying,
    Debt,
}

impl InterestTag {
    pub const ALL: [InterestTag; 8] = [
        InterestTag::Retirement,
        InterestTag::Tsp,
        InterestTag::Taxes,
        InterestTag::Budgeting,
        InterestTag::Investing,
        InterestTag::Insurance,
        InterestTag::HomeBuying,
        InterestTag::Debt,
    ];

    pub fn key(self) -> &'static str {
        match self {
            InterestTag::Retirement => "retirement",
            InterestTag::Tsp => "tsp",
            InterestTag::Taxes => "taxes",
            InterestTag::Budgeting => "budgeting",
            InterestTag::Investing => "investing",
            InterestTag::Insurance => "insurance",
            InterestTag::HomeBuying => "home-buying",
            InterestTag::Debt => "debt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InterestTag::Retirement => "Retirement planning",
            InterestTag::Tsp => "Thrift Savings Plan (TSP)",
            InterestTag::Taxes => "Taxes while sailing",
            InterestTag::Budgeting => "Budgeting between trips",
            InterestTag::Investing => "Investing",
            InterestTag::Insurance => "Insurance",
            InterestTag::HomeBuying => "Buying a home",
            InterestTag::Debt => "Paying down debt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.key() == key)
    }
}

/// The controlled fields of the form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Option<SailingStatus>,
    pub interests: BTreeSet<InterestTag>,
    pub notes: String,
}

impl LeadFields {
    pub fn set_interest(&mut self, tag: InterestTag, selected: bool) {
        if selected {
            self.interests.insert(tag);
        } else {
            self.interests.remove(&tag);
        }
    }

    /// Checks the rules in order and reports the first one that fails.
    pub fn validate(&self) -> Result<LeadSubmission, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        let status = self.status.ok_or(ValidationError::MissingStatus)?;
        if self.interests.is_empty() {
            return Err(ValidationError::NoInterests);
        }

        Ok(LeadSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            currently_sailing: status,
            help_with: self.interests.iter().copied().collect(),
            additional_info: self.notes.clone(),
        })
    }
}

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please let us know whether you are currently sailing.")]
    MissingStatus,

    #[error("Please choose at least one topic you would like help with.")]
    NoInterests,
}

/// The JSON body posted to the consultation endpoint.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub currently_sailing: SailingStatus,
    pub help_with: Vec<InterestTag>,
    pub additional_info: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Why [`LeadForm::begin_submit`] did not hand out a submission.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("the form has already been submitted")]
    Closed,

    #[error("the form is no longer mounted")]
    Detached,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    fields: LeadFields,
    phase: Phase,
    error: Option<String>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    /// Applies a keystroke or selection. Ignored once the form is submitted.
    pub fn edit(&mut self, change: impl FnOnce(&mut LeadFields)) {
        if self.phase != Phase::Submitted {
            change(&mut self.fields);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the fields and, when they pass, moves to `Submitting` and
    /// returns the payload to post. A failed validation leaves the fields
    /// alone and records the error message.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SubmitRefused> {
        match self.phase {
            Phase::Submitting => return Err(SubmitRefused::InFlight),
            Phase::Submitted => return Err(SubmitRefused::Closed),
            Phase::Editing => (),
        }
        match self.fields.validate() {
            Ok(submission) => {
                self.error = None;
                self.phase = Phase::Submitting;
                Ok(submission)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(SubmitRefused::Invalid(error))
            }
        }
    }

    /// Leaves `Submitting` with the outcome of the request: the fields are
    /// dropped on success, kept for another attempt on failure.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.phase != Phase::Submitting {
            log::warn!("Ignoring a submission outcome while {:?}", self.phase);
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = LeadFields::default();
                self.error = None;
                self.phase = Phase::Submitted;
            }
            Err(error) => {
                self.error = Some(error.user_message().to_string());
                self.phase = Phase::Editing;
            }
        }
    }

    /// The in-flight request went away without an answer.
    pub fn abandon_submit(&mut self) {
        if self.phase == Phase::Submitting {
            self.error = Some(String::from(FALLBACK_ERROR));
            self.phase = Phase::Editing;
        }
    }
}
