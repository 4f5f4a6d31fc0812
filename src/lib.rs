pub mod calculator;
pub mod config;
pub mod currency;
pub mod decimal;
pub mod errors;
pub mod leads;
pub mod ranges;
pub mod types;

// re-export key types
pub use calculator::{LeaseTerms, LoanTerms};
pub use config::{BankPartner, Benefit, CreditPageConfig, LeasingCompany, LeasingConfig};
pub use currency::{ExchangeRate, QuoteDisplay};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use leads::{
    ContactDetails, Lead, LeadId, LeadNotifier, LeadStore, NotificationPayload, SelectedTerms,
    format_phone, submit_lead,
};
pub use ranges::{SliderRange, rescale_advance};
pub use types::{BenefitIcon, LeadKind, LeadStatus, PaymentQuote, ZeroRateOverpayment};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
