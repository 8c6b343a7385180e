use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use crate::errors::{FieldError, SeolyzerError, SeolyzerResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[\d\s\-()]{8,}$").expect("valid phone pattern"));

/// Contact details captured by the funnel. Lives for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: Option<String>,
    pub company: Option<String>,
}

/// Body sent to the lead intake endpoint.
#[derive(Debug, Serialize)]
pub struct LeadPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub source: &'a str,
    pub phone: &'a str,
    pub company: &'a str,
}

impl LeadData {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            source: None,
            company: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> SeolyzerResult<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError { field: "name", message: "Namn är obligatoriskt" });
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError { field: "email", message: "E-post är obligatoriskt" });
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.push(FieldError { field: "email", message: "Ange en giltig e-postadress" });
        }

        if self.phone.trim().is_empty() {
            errors.push(FieldError { field: "phone", message: "Telefonnummer är obligatoriskt" });
        } else if !PHONE_PATTERN.is_match(&self.phone) {
            errors.push(FieldError { field: "phone", message: "Ange ett giltigt telefonnummer" });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SeolyzerError::Validation { errors })
        }
    }

    pub fn payload<'a>(&'a self, default_source: &'a str) -> LeadPayload<'a> {
        LeadPayload {
            name: &self.name,
            email: &self.email,
            source: self
                .source
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(default_source),
            phone: &self.phone,
            company: self.company.as_deref().unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(err: SeolyzerError) -> Vec<&'static str> {
        match err {
            SeolyzerError::Validation { errors } => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn complete_lead_passes() {
        let lead = LeadData::new("Anna Svensson", "anna@exempel.se", "+46 70-123 45 67");
        tokio_test::assert_ok!(lead.validate());
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let lead = LeadData::new(" ", "", "");
        assert_eq!(field_names(lead.validate().unwrap_err()), vec!["name", "email", "phone"]);
    }

    #[test]
    fn malformed_email_and_phone_are_rejected() {
        let lead = LeadData::new("Anna", "anna.exempel.se", "070-12");
        let err = lead.validate().unwrap_err();
        assert_eq!(
            err.user_message(),
            "Ange en giltig e-postadress\nAnge ett giltigt telefonnummer"
        );
    }

    #[test]
    fn payload_applies_defaults() {
        let lead = LeadData::new("Anna", "anna@exempel.se", "0701234567");
        let payload = serde_json::to_value(lead.payload("SEO Analys")).unwrap();
        assert_eq!(payload["source"], "SEO Analys");
        assert_eq!(payload["company"], "");
    }

    #[test]
    fn payload_keeps_explicit_values() {
        let lead = LeadData::new("Anna", "anna@exempel.se", "0701234567")
            .with_source("Kampanj")
            .with_company("Exempel AB");
        let payload = lead.payload("SEO Analys");
        assert_eq!(payload.source, "Kampanj");
        assert_eq!(payload.company, "Exempel AB");
    }
}
