//! Route handlers

use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::query::{NationalQuery, RegionalQuery};

use super::error::ApiError;
use super::AppState;

/// Static body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDescriptor {
    #[serde(rename = "proyecto")]
    pub project: &'static str,
    pub version: &'static str,
    #[serde(rename = "autor")]
    pub author: &'static str,
    pub endpoints: Endpoints,
}

/// Endpoint map advertised by `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    #[serde(rename = "Datos Teziutlán")]
    pub regional: &'static str,
    #[serde(rename = "Datos Nacional")]
    pub national: &'static str,
    #[serde(rename = "Documentación Visual")]
    pub docs: &'static str,
}

impl ServiceDescriptor {
    pub fn current() -> Self {
        Self {
            project: "API Nacional de Incendios Forestales",
            version: crate::VERSION,
            author: "Ing. Víctor Noé",
            endpoints: Endpoints {
                regional: "/data/teziutlan",
                national: "/data/nacional",
                docs: "/docs",
            },
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn home() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::current())
}

#[tracing::instrument(skip_all)]
pub async fn regional(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = RegionalQuery::from_query_string(query.as_deref().unwrap_or_default())?;
    let records = state.query.regional(&params);
    Ok(Json(records).into_response())
}

#[tracing::instrument(skip_all)]
pub async fn national(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = NationalQuery::from_query_string(query.as_deref().unwrap_or_default())?;
    let records = state.query.national(&params);
    Ok(Json(records).into_response())
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
