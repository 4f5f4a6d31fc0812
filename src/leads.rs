use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{LeadKind, LeadStatus, PaymentQuote};

/// unique identifier for a captured lead
pub type LeadId = Uuid;

/// contact details from a lead form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: Option<String>,
}

/// financial terms the customer had selected when submitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedTerms {
    pub car_price: Money,
    /// down payment for credit requests, advance for leasing
    pub upfront_payment: Money,
    pub term_months: u32,
    /// chosen bank or leasing company, if any
    pub partner: Option<String>,
    /// the quote shown at submission time
    pub quote: Option<PaymentQuote>,
}

/// captured lead, the primary record persisted before any notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub kind: LeadKind,
    pub contact: ContactDetails,
    pub terms: Option<SelectedTerms>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(
        kind: LeadKind,
        contact: ContactDetails,
        terms: Option<SelectedTerms>,
        time: &SafeTimeProvider,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            contact,
            terms,
            status: LeadStatus::New,
            created_at: time.now(),
        }
    }

    /// body for the intake webhook
    pub fn notification_payload(&self) -> NotificationPayload {
        NotificationPayload {
            kind: self.kind,
            name: self.contact.name.clone(),
            phone: self.contact.phone.clone(),
            email: self.contact.email.clone(),
            message: self.contact.message.clone(),
            terms: self.terms.clone(),
        }
    }
}

/// JSON object sent to the intake endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(rename = "type")]
    pub kind: LeadKind,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<SelectedTerms>,
}

impl NotificationPayload {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            crate::errors::CalculatorError::NotificationFailed {
                message: e.to_string(),
            }
        })
    }
}

/// persistence seam for the primary lead record
pub trait LeadStore {
    fn save(&mut self, lead: &Lead) -> Result<()>;
}

/// webhook seam for the intake notification
pub trait LeadNotifier {
    fn notify(&self, payload: &NotificationPayload) -> Result<()>;
}

/// persist the lead, then fire the notification
///
/// the stored lead is the primary record: a notifier failure is logged
/// and never rolls it back, a store failure fails the submission
pub fn submit_lead(
    lead: &Lead,
    store: &mut dyn LeadStore,
    notifier: &dyn LeadNotifier,
) -> Result<()> {
    store.save(lead)?;

    if let Err(e) = notifier.notify(&lead.notification_payload()) {
        warn!(lead_id = %lead.id, "lead notification failed: {e}");
    }

    Ok(())
}

/// normalize a Belarus number into +375 XX XXX-XX-XX
///
/// anything that is not twelve digits starting with 375 is returned as
/// typed
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 12 && digits.starts_with("375") {
        format!(
            "+{} {} {}-{}-{}",
            &digits[..3],
            &digits[3..5],
            &digits[5..8],
            &digits[8..10],
            &digits[10..12],
        )
    } else {
        raw.to_string()
    }
}
