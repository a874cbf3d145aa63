//! # Outbound Contact Links
//!
//! Transforms contact-form state into the product's two hand-off URLs:
//! a `wa.me` deep link and a `mailto:` URI. Neither path sends anything
//! itself; both produce a URL for the caller to open.
//!
//! Validation is a single boolean-style pass over the required fields
//! (name, email, message). On failure both builders return the same
//! combined message and the form value is left untouched for
//! correction.

use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded;

use crate::error::ReciboError;

/// Literal substituted for absent optional fields in both messages.
const NOT_PROVIDED: &str = "Not provided";

/// The fixed enumeration of contact query types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    General,
    Invoice,
    Template,
    Enterprise,
    Support,
    Billing,
}

impl QueryType {
    /// The raw form key ("general", "invoice", ...). The WhatsApp
    /// message carries this key verbatim.
    pub fn key(&self) -> &'static str {
        match self {
            QueryType::General => "general",
            QueryType::Invoice => "invoice",
            QueryType::Template => "template",
            QueryType::Enterprise => "enterprise",
            QueryType::Support => "support",
            QueryType::Billing => "billing",
        }
    }

    /// Human-readable label, used in the email subject and body.
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::General => "General Inquiry",
            QueryType::Invoice => "Invoice & Receipt Help",
            QueryType::Template => "Template Customization",
            QueryType::Enterprise => "Enterprise Solutions",
            QueryType::Support => "Technical Support",
            QueryType::Billing => "Billing & Pricing",
        }
    }
}

/// Contact destination endpoints.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// WhatsApp number in international digits-only form.
    pub whatsapp_number: String,
    /// Destination mailbox for the mailto path.
    pub email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "917973361737".into(),
            email: "kbhatt@gostudio.ai".into(),
        }
    }
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub query_type: QueryType,
}

impl ContactForm {
    /// Required-field check: name, email, and message must be present.
    ///
    /// Failure surfaces as one combined message and blocks both send
    /// paths; the form itself is never modified.
    pub fn validate(&self) -> Result<(), ReciboError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ReciboError::Validation(
                "Please fill in all required fields".into(),
            ));
        }
        Ok(())
    }

    /// Build the `wa.me` deep link carrying the structured message.
    pub fn whatsapp_url(&self, config: &ContactConfig) -> Result<String, ReciboError> {
        self.validate()?;

        let message = format!(
            "*New Contact Form Submission*\n\
             \n\
             *Name:* {}\n\
             *Email:* {}\n\
             *Phone:* {}\n\
             *Company:* {}\n\
             *Query Type:* {}\n\
             *Subject:* {}\n\
             \n\
             *Message:*\n\
             {}",
            self.name,
            self.email,
            or_not_provided(&self.phone),
            or_not_provided(&self.company),
            self.query_type.key(),
            or_not_provided(&self.subject),
            self.message,
        );

        let mut url = Url::parse(&format!("https://wa.me/{}", config.whatsapp_number))
            .map_err(|e| ReciboError::Validation(format!("Invalid WhatsApp number: {e}")))?;
        url.query_pairs_mut().append_pair("text", &message);

        Ok(url.to_string())
    }

    /// Build the `mailto:` URI with subject and body parameters.
    pub fn mailto_url(&self, config: &ContactConfig) -> Result<String, ReciboError> {
        self.validate()?;

        let label = self.query_type.label();
        let subject = if self.subject.is_empty() {
            format!("[{label}] Contact Form Submission")
        } else {
            format!("[{label}] {}", self.subject)
        };

        let body = format!(
            "Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Company: {}\n\
             Query Type: {}\n\
             \n\
             Message:\n\
             {}",
            self.name,
            self.email,
            or_not_provided(&self.phone),
            or_not_provided(&self.company),
            label,
            self.message,
        );

        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("subject", &subject)
            .append_pair("body", &body)
            .finish();

        Ok(format!("mailto:{}?{}", config.email, query))
    }
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() { NOT_PROVIDED } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            subject: "Template question".into(),
            message: "Tell me more".into(),
            query_type: QueryType::Template,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_blocks_both_paths() {
        let form = ContactForm::default();
        let before = form.clone();
        let config = ContactConfig::default();

        assert!(form.whatsapp_url(&config).is_err());
        assert!(form.mailto_url(&config).is_err());
        // Form state untouched for correction.
        assert_eq!(form, before);
    }

    #[test]
    fn test_validation_message_is_combined() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Please fill in all required fields"
        );
    }

    #[test]
    fn test_whatsapp_url_shape() {
        let url = filled_form()
            .whatsapp_url(&ContactConfig::default())
            .unwrap();
        assert!(url.starts_with("https://wa.me/917973361737?text="));
        // Raw query-type key, not the label.
        assert!(url.contains("template"));
    }

    #[test]
    fn test_absent_optionals_render_not_provided_twice() {
        let form = filled_form(); // phone and company empty, subject set
        let config = ContactConfig::default();

        let wa = form.whatsapp_url(&config).unwrap();
        let decoded: String = form_urlencoded::parse(wa.split('?').nth(1).unwrap().as_bytes())
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(decoded.matches("Not provided").count(), 2);

        let mail = form.mailto_url(&config).unwrap();
        let body: String = form_urlencoded::parse(mail.split('?').nth(1).unwrap().as_bytes())
            .find(|(k, _)| k == "body")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(body.matches("Not provided").count(), 2);
    }

    #[test]
    fn test_mailto_subject_prefixed_with_label() {
        let config = ContactConfig::default();
        let mail = filled_form().mailto_url(&config).unwrap();
        assert!(mail.starts_with("mailto:kbhatt@gostudio.ai?"));

        let subject: String = form_urlencoded::parse(mail.split('?').nth(1).unwrap().as_bytes())
            .find(|(k, _)| k == "subject")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(subject, "[Template Customization] Template question");
    }

    #[test]
    fn test_mailto_default_subject() {
        let mut form = filled_form();
        form.subject = String::new();
        form.query_type = QueryType::Billing;

        let mail = form.mailto_url(&ContactConfig::default()).unwrap();
        let subject: String = form_urlencoded::parse(mail.split('?').nth(1).unwrap().as_bytes())
            .find(|(k, _)| k == "subject")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(subject, "[Billing & Pricing] Contact Form Submission");
    }

    #[test]
    fn test_query_type_keys_and_labels() {
        assert_eq!(QueryType::General.key(), "general");
        assert_eq!(QueryType::General.label(), "General Inquiry");
        assert_eq!(QueryType::Enterprise.label(), "Enterprise Solutions");
        assert_eq!(
            serde_json::from_str::<QueryType>("\"support\"").unwrap(),
            QueryType::Support
        );
    }
}
