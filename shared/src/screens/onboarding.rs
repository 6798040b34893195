//! Digital ID onboarding wizard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Welcome,
    DocumentVerification,
    PersonalInformation,
    EmergencyContacts,
    DigitalIdCreation,
}

impl OnboardingStep {
    pub const ALL: [Self; 5] = [
        Self::Welcome,
        Self::DocumentVerification,
        Self::PersonalInformation,
        Self::EmergencyContacts,
        Self::DigitalIdCreation,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::DocumentVerification => "Document Verification",
            Self::PersonalInformation => "Personal Information",
            Self::EmergencyContacts => "Emergency Contacts",
            Self::DigitalIdCreation => "Digital ID Creation",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::DigitalIdCreation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Aadhaar,
    Passport,
    VoterId,
}

impl DocumentType {
    pub const ALL: [Self; 3] = [Self::Aadhaar, Self::Passport, Self::VoterId];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar",
            Self::Passport => "Passport",
            Self::VoterId => "Voter-id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    Indian,
    Us,
    Uk,
    Canada,
    Australia,
    Other,
}

impl Nationality {
    pub const ALL: [Self; 6] = [
        Self::Indian,
        Self::Us,
        Self::Uk,
        Self::Canada,
        Self::Australia,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Indian => "Indian",
            Self::Us => "United States",
            Self::Uk => "United Kingdom",
            Self::Canada => "Canada",
            Self::Australia => "Australia",
            Self::Other => "Other",
        }
    }
}

/// Free-text inputs on the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingField {
    DocumentNumber,
    FullName,
    PhoneNumber,
    EmergencyContact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("step {0:?} is missing required fields")]
    IncompleteStep(OnboardingStep),
    #[error("already at the last step")]
    AtLastStep,
    #[error("already at the first step")]
    AtFirstStep,
    #[error("setup can only be completed from the last step, currently at {0:?}")]
    NotFinished(OnboardingStep),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OnboardingForm {
    pub document_type: Option<DocumentType>,
    pub document_number: String,
    pub full_name: String,
    pub nationality: Option<Nationality>,
    pub phone_number: String,
    pub emergency_contact: String,
    pub preferred_language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalId {
    pub id: String,
    pub initials: String,
}

impl DigitalId {
    /// `TIN-` followed by the last eight digits of the issue clock.
    #[must_use]
    pub fn issue(full_name: &str, now_ms: u64) -> Self {
        let digits = now_ms.to_string();
        let tail = &digits[digits.len().saturating_sub(8)..];
        Self {
            id: format!("TIN-{tail}"),
            initials: initials(full_name),
        }
    }
}

fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Onboarding {
    step: OnboardingStep,
    form: OnboardingForm,
    digital_id: Option<DigitalId>,
}

impl Onboarding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    #[must_use]
    pub const fn form(&self) -> &OnboardingForm {
        &self.form
    }

    #[must_use]
    pub const fn digital_id(&self) -> Option<&DigitalId> {
        self.digital_id.as_ref()
    }

    pub fn select_document(&mut self, document_type: DocumentType) {
        self.form.document_type = Some(document_type);
    }

    pub fn select_nationality(&mut self, nationality: Nationality) {
        self.form.nationality = Some(nationality);
    }

    pub fn select_language(&mut self, language: Language) {
        self.form.preferred_language = language;
    }

    pub fn edit(&mut self, field: OnboardingField, value: String) {
        let slot = match field {
            OnboardingField::DocumentNumber => &mut self.form.document_number,
            OnboardingField::FullName => &mut self.form.full_name,
            OnboardingField::PhoneNumber => &mut self.form.phone_number,
            OnboardingField::EmergencyContact => &mut self.form.emergency_contact,
        };
        *slot = value;
    }

    /// Whether the current step's required inputs are filled in.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        let form = &self.form;
        match self.step {
            OnboardingStep::DocumentVerification => {
                form.document_type.is_some() && !form.document_number.is_empty()
            }
            OnboardingStep::PersonalInformation => {
                !form.full_name.is_empty()
                    && form.nationality.is_some()
                    && !form.phone_number.is_empty()
            }
            OnboardingStep::EmergencyContacts => !form.emergency_contact.is_empty(),
            OnboardingStep::Welcome | OnboardingStep::DigitalIdCreation => true,
        }
    }

    pub fn advance(&mut self, now_ms: u64) -> Result<OnboardingStep, OnboardingError> {
        let next = self.step.next().ok_or(OnboardingError::AtLastStep)?;
        if !self.can_proceed() {
            return Err(OnboardingError::IncompleteStep(self.step));
        }
        self.step = next;
        if next.is_last() {
            self.digital_id = Some(DigitalId::issue(&self.form.full_name, now_ms));
        }
        Ok(next)
    }

    pub fn go_back(&mut self) -> Result<OnboardingStep, OnboardingError> {
        let previous = self.step.previous().ok_or(OnboardingError::AtFirstStep)?;
        self.step = previous;
        Ok(previous)
    }

    pub fn finish(&self) -> Result<(), OnboardingError> {
        if self.step.is_last() {
            Ok(())
        } else {
            Err(OnboardingError::NotFinished(self.step))
        }
    }

    /// 1-based position for "Step n of 5".
    #[must_use]
    pub const fn step_number(&self) -> usize {
        self.step.index() + 1
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::ALL.len();
        // Rounded half up, matching the percentage shown next to the bar.
        let percent = (self.step_number() * 100 + total / 2) / total;
        u8::try_from(percent).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_736_865_025_123;

    fn filled() -> Onboarding {
        let mut onboarding = Onboarding::new();
        onboarding.select_document(DocumentType::Passport);
        onboarding.edit(OnboardingField::DocumentNumber, "X1234567".into());
        onboarding.edit(OnboardingField::FullName, "John Smith".into());
        onboarding.select_nationality(Nationality::Us);
        onboarding.edit(OnboardingField::PhoneNumber, "+1 555-0123".into());
        onboarding.edit(OnboardingField::EmergencyContact, "+1 555-9876".into());
        onboarding
    }

    #[test]
    fn test_starts_at_welcome() {
        let onboarding = Onboarding::new();
        assert_eq!(onboarding.step(), OnboardingStep::Welcome);
        assert_eq!(onboarding.form().preferred_language, Language::English);
        assert_eq!(onboarding.step_number(), 1);
        assert_eq!(onboarding.progress_percent(), 20);
    }

    #[test]
    fn test_document_step_requires_type_and_number() {
        let mut onboarding = Onboarding::new();
        onboarding.advance(NOW).unwrap();
        assert_eq!(
            onboarding.advance(NOW),
            Err(OnboardingError::IncompleteStep(OnboardingStep::DocumentVerification))
        );

        onboarding.select_document(DocumentType::Aadhaar);
        assert!(!onboarding.can_proceed());
        onboarding.edit(OnboardingField::DocumentNumber, "1234".into());
        assert!(onboarding.can_proceed());
        assert_eq!(onboarding.advance(NOW), Ok(OnboardingStep::PersonalInformation));
    }

    #[test]
    fn test_personal_step_requires_all_three_fields() {
        let mut onboarding = Onboarding::new();
        onboarding.select_document(DocumentType::VoterId);
        onboarding.edit(OnboardingField::DocumentNumber, "V-1".into());
        onboarding.advance(NOW).unwrap();
        onboarding.advance(NOW).unwrap();

        onboarding.edit(OnboardingField::FullName, "Maria Garcia".into());
        onboarding.edit(OnboardingField::PhoneNumber, "+34 600".into());
        assert!(!onboarding.can_proceed());
        onboarding.select_nationality(Nationality::Other);
        assert!(onboarding.can_proceed());
    }

    #[test]
    fn test_full_walkthrough_issues_digital_id() {
        let mut onboarding = filled();
        for _ in 0..4 {
            onboarding.advance(NOW).unwrap();
        }
        assert_eq!(onboarding.step(), OnboardingStep::DigitalIdCreation);
        assert_eq!(onboarding.progress_percent(), 100);
        assert_eq!(onboarding.advance(NOW), Err(OnboardingError::AtLastStep));
        assert_eq!(onboarding.finish(), Ok(()));

        let id = onboarding.digital_id().unwrap();
        assert_eq!(id.id, "TIN-65025123");
        assert_eq!(id.initials, "JS");
    }

    #[test]
    fn test_go_back_stops_at_first_step() {
        let mut onboarding = filled();
        onboarding.advance(NOW).unwrap();
        assert_eq!(onboarding.go_back(), Ok(OnboardingStep::Welcome));
        assert_eq!(onboarding.go_back(), Err(OnboardingError::AtFirstStep));
    }

    #[test]
    fn test_finish_before_last_step_is_rejected() {
        let onboarding = filled();
        assert_eq!(
            onboarding.finish(),
            Err(OnboardingError::NotFinished(OnboardingStep::Welcome))
        );
    }

    #[test]
    fn test_progress_rounding() {
        let mut onboarding = filled();
        let expected = [20, 40, 60, 80, 100];
        for (i, percent) in expected.into_iter().enumerate() {
            assert_eq!(onboarding.progress_percent(), percent, "step {i}");
            let _ = onboarding.advance(NOW);
        }
    }

    #[test]
    fn test_initials_take_first_two_words() {
        assert_eq!(initials("Hans Peter Mueller"), "HP");
        assert_eq!(initials("  Emma  "), "E");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_short_clock_is_not_truncated() {
        assert_eq!(DigitalId::issue("A", 42).id, "TIN-42");
    }
}
