use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// computed payment terms for a loan or lease quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentQuote {
    /// amount actually financed after down payment / advance / residual
    pub financed_amount: Money,
    pub monthly_payment: Money,
    /// everything the customer pays over the term (advance included for leases)
    pub total_paid: Money,
    /// cost above the financed amount; absent for straight-line leases
    /// when the policy omits it
    pub overpayment: Option<Money>,
}

/// how a zero-rate lease reports overpayment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZeroRateOverpayment {
    /// report overpayment as zero
    ReportZero,
    /// leave overpayment out of the quote
    #[default]
    Omit,
}

/// what a captured lead is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    CreditRequest,
    LeasingRequest,
    CarInquiry,
    ContactMessage,
}

/// lead processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    InProgress,
    Closed,
}

/// icons available for benefit and condition entries, resolved at
/// configuration load rather than per render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum BenefitIcon {
    Percent,
    Clock,
    Building,
    DollarSign,
    FileText,
    Users,
    Zap,
    Award,
    Target,
    Briefcase,
    TrendingUp,
    Handshake,
    CheckSquare,
    Coins,
    Timer,
    Heart,
    Shield,
    TrendingDown,
    /// unknown keys fall back to the generic card icon
    CreditCard,
}

impl BenefitIcon {
    /// resolve a stored icon key
    pub fn from_key(key: &str) -> Self {
        match key {
            "percent" => Self::Percent,
            "clock" => Self::Clock,
            "building" => Self::Building,
            "dollar-sign" => Self::DollarSign,
            "file-text" => Self::FileText,
            "users" => Self::Users,
            "zap" => Self::Zap,
            "award" => Self::Award,
            "target" => Self::Target,
            "briefcase" => Self::Briefcase,
            "trending-up" => Self::TrendingUp,
            "handshake" => Self::Handshake,
            "check-square" => Self::CheckSquare,
            "coins" => Self::Coins,
            "timer" => Self::Timer,
            "heart" => Self::Heart,
            "shield" => Self::Shield,
            "trending-down" => Self::TrendingDown,
            _ => Self::CreditCard,
        }
    }
}

impl From<String> for BenefitIcon {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_kebab_case_keys() {
        let icon: BenefitIcon = serde_json::from_str("\"dollar-sign\"").unwrap();
        assert_eq!(icon, BenefitIcon::DollarSign);
        assert_eq!(serde_json::to_string(&BenefitIcon::TrendingDown).unwrap(), "\"trending-down\"");
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let icon: BenefitIcon = serde_json::from_str("\"sparkles\"").unwrap();
        assert_eq!(icon, BenefitIcon::CreditCard);
    }

    #[test]
    fn test_lead_kind_wire_names() {
        assert_eq!(serde_json::to_string(&LeadKind::CreditRequest).unwrap(), "\"credit_request\"");
        assert_eq!(serde_json::to_string(&LeadKind::LeasingRequest).unwrap(), "\"leasing_request\"");
    }
}
