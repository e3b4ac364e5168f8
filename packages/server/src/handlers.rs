//! HTTP handler functions for the report API.

use std::sync::Arc;

use actix_web::{HttpResponse, web};
use trace_report_analytics::build_report;
use trace_report_analytics::filter::{available_years, year_options};
use trace_report_analytics_models::YearSelection;
use trace_report_record_models::RecordTable;
use trace_report_server_models::{
    ApiError, ApiHealth, ApiTaxonomy, ApiYears, ReportQueryParams,
};
use trace_report_source::progress::null_progress;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/years`
///
/// Returns the admission years present in the dataset and the selector
/// options built from them.
pub async fn years(state: web::Data<AppState>) -> HttpResponse {
    let table = match load_table(&state).await {
        Ok(table) => table,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(ApiYears {
        years: available_years(&table),
        options: year_options(&table),
    })
}

/// `GET /api/report`
///
/// Builds the full report for the `year` query parameter (all years when
/// absent).
pub async fn report(
    state: web::Data<AppState>,
    params: web::Query<ReportQueryParams>,
) -> HttpResponse {
    let selection = match params.year.as_deref() {
        None => YearSelection::AllYears,
        Some(year) => match year.parse::<YearSelection>() {
            Ok(selection) => selection,
            Err(e) => {
                log::debug!("Rejected year parameter: {e}");
                return HttpResponse::BadRequest().json(ApiError::new(e.to_string()));
            }
        },
    };

    let table = match load_table(&state).await {
        Ok(table) => table,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(build_report(&table, selection))
}

/// `GET /api/taxonomy`
///
/// Returns the static charge, investigator, rank, department, committee and
/// entity lists.
pub async fn taxonomy() -> HttpResponse {
    HttpResponse::Ok().json(ApiTaxonomy::current())
}

async fn load_table(state: &AppState) -> Result<Arc<RecordTable>, HttpResponse> {
    state
        .cache
        .get_or_load(&state.definition, &state.location, &null_progress())
        .await
        .map_err(|e| {
            log::error!("Dataset load failed: {e}");
            HttpResponse::ServiceUnavailable().json(ApiError::new(e.to_string()))
        })
}
