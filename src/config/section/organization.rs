//! `[organization]` configuration.
//!
//! Facts published in the `EducationalOrganization` JSON-LD object.
//!
//! # Example
//!
//! ```toml
//! [organization]
//! founding_date = "2020"
//! slogan = "Launch Your Tech Career"
//!
//! [organization.address]
//! street = "123 Tech Street, Innovation Hub"
//! locality = "Bangalore"
//!
//! [organization.contact]
//! telephone = "+91-98765-43210"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Organization description (distinct from the page description).
    pub description: String,
    pub founding_date: String,
    /// Employee count range, e.g. "50-100".
    pub employees: String,
    pub slogan: String,
    pub address: AddressConfig,
    pub contact: ContactConfig,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            description: "Leading tech training institute offering job-oriented courses in Data \
                          Science, Full Stack Development, Cloud Infrastructure, and more."
                .into(),
            founding_date: "2020".into(),
            employees: "50-100".into(),
            slogan: "Launch Your Tech Career".into(),
            address: AddressConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// Postal address (`PostalAddress`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddressConfig {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            street: "123 Tech Street, Innovation Hub".into(),
            locality: "Bangalore".into(),
            region: "Karnataka".into(),
            postal_code: "560001".into(),
            country: "IN".into(),
        }
    }
}

/// Customer contact point (`ContactPoint`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    pub telephone: String,
    pub contact_type: String,
    pub email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            telephone: "+91-98765-43210".into(),
            contact_type: "customer service".into(),
            email: "info@udaantechacademy.com".into(),
        }
    }
}
