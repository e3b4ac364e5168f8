#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the detention report server.
//!
//! The report body itself is
//! [`DetentionReport`](trace_report_analytics_models::DetentionReport),
//! serialized as-is. The types here cover the remaining endpoints and the
//! static taxonomy, kept separate from the domain types so the API contract
//! can evolve on its own.

use serde::{Deserialize, Serialize};
use trace_report_analytics_models::YearSelection;
use trace_report_taxonomy::{
    ChargeCategory, Committee, InvestigationDepartment, InvestigatorCategory, MilitaryRank,
    RECORD_EXCERPTS, REFERENCED_ENTITIES,
};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// Creates an error body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Query parameters for the report endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQueryParams {
    /// A year such as `2013`, or `All Years`. Absent means all years.
    pub year: Option<String>,
}

/// The year selector contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiYears {
    /// Distinct admission years, most recent first.
    pub years: Vec<i32>,
    /// Selector choices, "All Years" first.
    pub options: Vec<YearSelection>,
}

/// A charge grouping in the taxonomy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCharge {
    /// Frequency rank (1 = most common).
    pub rank: u8,
    /// Stable identifier.
    pub name: ChargeCategory,
    /// Arabic heading.
    pub label: String,
    /// What the grouping covers.
    pub description: String,
}

impl From<ChargeCategory> for ApiCharge {
    fn from(charge: ChargeCategory) -> Self {
        Self {
            rank: charge.rank(),
            name: charge,
            label: charge.label().to_string(),
            description: charge.description().to_string(),
        }
    }
}

/// A labelled taxonomy entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTaxonomyEntry {
    /// Stable identifier (`SCREAMING_SNAKE_CASE`).
    pub name: String,
    /// Arabic label.
    pub label: String,
    /// Longer description, where one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<InvestigatorCategory> for ApiTaxonomyEntry {
    fn from(category: InvestigatorCategory) -> Self {
        Self {
            name: category.to_string(),
            label: category.label().to_string(),
            description: Some(category.description().to_string()),
        }
    }
}

impl From<MilitaryRank> for ApiTaxonomyEntry {
    fn from(rank: MilitaryRank) -> Self {
        Self {
            name: rank.to_string(),
            label: rank.label().to_string(),
            description: None,
        }
    }
}

impl From<InvestigationDepartment> for ApiTaxonomyEntry {
    fn from(department: InvestigationDepartment) -> Self {
        Self {
            name: department.to_string(),
            label: department.label().to_string(),
            description: None,
        }
    }
}

impl From<Committee> for ApiTaxonomyEntry {
    fn from(committee: Committee) -> Self {
        Self {
            name: committee.to_string(),
            label: committee.label().to_string(),
            description: None,
        }
    }
}

/// Every static reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTaxonomy {
    pub charges: Vec<ApiCharge>,
    pub investigator_categories: Vec<ApiTaxonomyEntry>,
    pub ranks: Vec<ApiTaxonomyEntry>,
    pub departments: Vec<ApiTaxonomyEntry>,
    pub committees: Vec<ApiTaxonomyEntry>,
    pub referenced_entities: Vec<String>,
    pub excerpts: Vec<String>,
}

impl ApiTaxonomy {
    /// Builds the response from the compiled-in lists.
    #[must_use]
    pub fn current() -> Self {
        fn entries<T: Copy + Into<ApiTaxonomyEntry>>(all: &[T]) -> Vec<ApiTaxonomyEntry> {
            all.iter().copied().map(Into::into).collect()
        }

        Self {
            charges: ChargeCategory::all().iter().copied().map(ApiCharge::from).collect(),
            investigator_categories: entries(InvestigatorCategory::all()),
            ranks: entries(MilitaryRank::all()),
            departments: entries(InvestigationDepartment::all()),
            committees: entries(Committee::all()),
            referenced_entities: REFERENCED_ENTITIES.iter().map(ToString::to_string).collect(),
            excerpts: RECORD_EXCERPTS.iter().map(ToString::to_string).collect(),
        }
    }
}
