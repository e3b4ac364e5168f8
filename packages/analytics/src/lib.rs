#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Year filtering and the aggregation pipeline for the detention report.
//!
//! [`filter::filter_by_year`] narrows a loaded
//! [`RecordTable`](trace_report_record_models::RecordTable) to a borrowed
//! [`filter::RecordView`]. Each routine in [`aggregations`] consumes a view
//! and returns freshly built result data; none of them mutate the table or
//! depend on one another. [`report::build_report`] runs them all for one
//! selection.

pub mod aggregations;
pub mod filter;
pub mod frequency;
pub mod report;
pub mod scaling;

pub use report::build_report;
