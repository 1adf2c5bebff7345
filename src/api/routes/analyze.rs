use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{AnalysisResult, Match, Summoner};

/// Body of `POST /api/v1/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub summoner: Option<Summoner>,

    /// Missing or `null` is treated as an empty history.
    #[serde(default)]
    pub matches: Option<Vec<Match>>,
}

impl AnalyzeRequest {
    /// Split into the analyzer's inputs, rejecting a missing summoner.
    pub fn into_parts(self) -> Result<(Summoner, Vec<Match>), ApiError> {
        let summoner = self
            .summoner
            .ok_or_else(|| ApiError::BadRequest("Summoner data is required".to_string()))?;
        Ok((summoner, self.matches.unwrap_or_default()))
    }
}

pub async fn analyze_player(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    // Decoded regardless of Content-Type.
    let request: AnalyzeRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected analyze request: {}", e);
        ApiError::BadRequest("Invalid request body".to_string())
    })?;

    let (summoner, matches) = request.into_parts()?;

    tracing::info!(
        puuid = %summoner.puuid,
        summoner = %summoner.name,
        matches = matches.len(),
        "Analyzing player"
    );

    let result = state.analyzer.analyze_player(&summoner, &matches);
    Ok(Json(result))
}
