use serde::{Deserialize, Serialize};

use crate::calculator::LeaseTerms;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::BenefitIcon;

/// benefit entry rendered on a marketing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: BenefitIcon,
    pub title: String,
    pub description: String,
}

/// partner bank shown on the credit page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankPartner {
    pub name: String,
    pub logo_url: Option<String>,
    /// best advertised annual rate
    pub min_rate: Rate,
    pub max_term_months: u32,
}

/// credit page content document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPageConfig {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub benefits: Vec<Benefit>,
    pub partners: Vec<BankPartner>,
}

impl Default for CreditPageConfig {
    fn default() -> Self {
        Self {
            title: "Car loans on favorable terms".to_string(),
            subtitle: "Finance the car you want today".to_string(),
            description: "We work with the leading banks and will help you \
                          get a car loan on the best available terms."
                .to_string(),
            benefits: Vec::new(),
            partners: Vec::new(),
        }
    }
}

impl CreditPageConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for partner in &self.partners {
            if partner.min_rate.is_negative() || partner.min_rate > Rate::ONE {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("partner {}: rate {} out of range", partner.name, partner.min_rate),
                });
            }
            if partner.max_term_months == 0 {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("partner {}: zero max term", partner.name),
                });
            }
        }
        Ok(())
    }
}

/// leasing company option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeasingCompany {
    pub name: String,
    pub logo_url: Option<String>,
    /// smallest advance the company accepts, as a share of the price
    pub min_advance_percent: Rate,
    pub max_term_months: u32,
    pub interest_rate: Rate,
}

impl LeasingCompany {
    /// rate to feed into lease terms; a zero rate means the company
    /// quotes the even split
    pub fn effective_rate(&self) -> Option<Rate> {
        if self.interest_rate.is_zero() {
            None
        } else {
            Some(self.interest_rate)
        }
    }
}

/// leasing calculator content document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeasingConfig {
    pub companies: Vec<LeasingCompany>,
    pub default_car_price: Money,
    pub default_advance_percent: Rate,
    pub default_term_months: u32,
    pub default_residual_percent: Rate,
}

impl Default for LeasingConfig {
    fn default() -> Self {
        Self {
            companies: vec![
                LeasingCompany {
                    name: "BelLeasing".to_string(),
                    logo_url: None,
                    min_advance_percent: Rate::from_percentage(15),
                    max_term_months: 60,
                    interest_rate: Rate::from_bps(850),
                },
                LeasingCompany {
                    name: "Leasing-Center".to_string(),
                    logo_url: None,
                    min_advance_percent: Rate::from_percentage(20),
                    max_term_months: 72,
                    interest_rate: Rate::from_bps(900),
                },
                LeasingCompany {
                    name: "AutoLeasing".to_string(),
                    logo_url: None,
                    min_advance_percent: Rate::from_percentage(10),
                    max_term_months: 48,
                    interest_rate: Rate::from_bps(780),
                },
            ],
            default_car_price: Money::from_major(80_000),
            default_advance_percent: Rate::from_percentage(20),
            default_term_months: 36,
            default_residual_percent: Rate::from_percentage(20),
        }
    }
}

impl LeasingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for company in &self.companies {
            if company.interest_rate.is_negative() || company.interest_rate > Rate::ONE {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("company {}: rate {} out of range", company.name, company.interest_rate),
                });
            }
            if company.min_advance_percent.is_negative() || company.min_advance_percent > Rate::ONE {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("company {}: advance share {} out of range", company.name, company.min_advance_percent),
                });
            }
            if company.max_term_months == 0 {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("company {}: zero max term", company.name),
                });
            }
        }

        if !self.default_car_price.is_positive() {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("default car price {} not positive", self.default_car_price),
            });
        }
        if self.default_term_months == 0 {
            return Err(CalculatorError::InvalidConfiguration {
                message: "default term is zero".to_string(),
            });
        }
        if self.default_advance_percent.is_negative() || self.default_advance_percent > Rate::ONE {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("default advance share {} out of range", self.default_advance_percent),
            });
        }
        if self.default_residual_percent.is_negative() || self.default_residual_percent > Rate::ONE {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("default residual share {} out of range", self.default_residual_percent),
            });
        }

        Ok(())
    }

    /// starting lease terms shown before the user touches a slider;
    /// the advance lands on whole currency units the way the sliders
    /// present it
    pub fn default_lease_terms(&self) -> LeaseTerms {
        let advance = self
            .default_car_price
            .portion(self.default_advance_percent)
            .to_whole();

        LeaseTerms::new(
            self.default_car_price,
            advance,
            self.default_term_months,
            self.default_residual_percent,
            None,
        )
    }

    pub fn company(&self, name: &str) -> Option<&LeasingCompany> {
        self.companies.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZeroRateOverpayment;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_documents_validate() {
        assert!(CreditPageConfig::default().validate().is_ok());
        assert!(LeasingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = LeasingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = LeasingConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_icon_key_parses_to_fallback() {
        let json = r#"{
            "title": "t", "subtitle": "s", "description": "d",
            "benefits": [{"icon": "rocket-ship", "title": "b", "description": "x"}],
            "partners": []
        }"#;
        let config = CreditPageConfig::from_json(json).unwrap();
        assert_eq!(config.benefits[0].icon, BenefitIcon::CreditCard);
    }

    #[test]
    fn test_out_of_range_partner_rate_rejected() {
        let mut config = CreditPageConfig::default();
        config.partners.push(BankPartner {
            name: "Overeager Bank".to_string(),
            logo_url: None,
            min_rate: Rate::from_decimal(dec!(1.5)),
            max_term_months: 60,
        });
        assert!(matches!(
            config.validate().unwrap_err(),
            CalculatorError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_default_lease_terms_quote() {
        let config = LeasingConfig::default();
        let terms = config.default_lease_terms();

        assert_eq!(terms.car_price, Money::from_major(80_000));
        assert_eq!(terms.advance, Money::from_major(16_000));
        assert_eq!(terms.term_months, 36);

        let quote = terms.quote(ZeroRateOverpayment::Omit).unwrap();
        assert_eq!(quote.financed_amount, Money::from_major(48_000));
    }

    #[test]
    fn test_company_lookup_and_effective_rate() {
        let config = LeasingConfig::default();

        let company = config.company("AutoLeasing").unwrap();
        assert_eq!(company.effective_rate(), Some(Rate::from_bps(780)));
        assert!(config.company("Nonexistent").is_none());

        let free = LeasingCompany {
            name: "In-House".to_string(),
            logo_url: None,
            min_advance_percent: Rate::from_percentage(10),
            max_term_months: 36,
            interest_rate: Rate::ZERO,
        };
        assert_eq!(free.effective_rate(), None);
    }
}
