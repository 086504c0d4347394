use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DailyQuote, GenerateQuoteRequest, GeneratedQuote, NewQuote, Quote, QuoteUpdate},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

#[utoipa::path(get, path = "/quotes", responses((status = 200, body = [Quote])))]
pub async fn list_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quote_service.get_quotes()?;
    Ok(Json(quotes.into_iter().map(Quote::from).collect()))
}

#[utoipa::path(
    post,
    path = "/quotes",
    request_body = NewQuote,
    responses((status = 200, body = Quote), (status = 400, description = "Empty text"))
)]
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewQuote>,
) -> ApiResult<Json<Quote>> {
    let created = state.quote_service.create_quote(payload.into()).await?;
    Ok(Json(Quote::from(created)))
}

#[utoipa::path(
    get,
    path = "/quotes/{id}",
    params(("id" = String, Path, description = "Quote id")),
    responses((status = 200, body = Quote), (status = 404))
)]
pub async fn get_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.get_quote(&id)?;
    Ok(Json(Quote::from(quote)))
}

#[utoipa::path(
    put,
    path = "/quotes/{id}",
    params(("id" = String, Path, description = "Quote id")),
    request_body = QuoteUpdate,
    responses((status = 200, body = Quote), (status = 400), (status = 404))
)]
pub async fn update_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QuoteUpdate>,
) -> ApiResult<Json<Quote>> {
    let updated = state.quote_service.update_quote(&id, payload.into()).await?;
    Ok(Json(Quote::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/quotes/{id}",
    params(("id" = String, Path, description = "Quote id")),
    responses((status = 204), (status = 404))
)]
pub async fn delete_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.quote_service.delete_quote(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    exclude: Option<String>,
}

#[utoipa::path(
    get,
    path = "/quotes/random",
    params(("exclude" = Option<String>, Query, description = "Quote id to avoid when possible")),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 404, description = "No quotes stored")
    )
)]
pub async fn random_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RandomQuery>,
) -> ApiResult<String> {
    let quote = state.quote_service.random_quote(query.exclude.as_deref())?;
    Ok(quote.text)
}

#[utoipa::path(
    get,
    path = "/quotes/daily",
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 404, description = "No quotes stored")
    )
)]
pub async fn daily_quote(State(state): State<Arc<AppState>>) -> ApiResult<String> {
    let today = state.clock.today();
    let daily = state.daily_quote_service.get_daily(today).await?;
    Ok(daily.quote.text)
}

#[utoipa::path(
    get,
    path = "/quotes/daily/pick",
    responses((status = 200, body = DailyQuote), (status = 404, description = "No quotes stored"))
)]
pub async fn daily_pick(State(state): State<Arc<AppState>>) -> ApiResult<Json<DailyQuote>> {
    let today = state.clock.today();
    let daily = state.daily_quote_service.get_daily(today).await?;
    Ok(Json(DailyQuote::from(daily)))
}

#[utoipa::path(
    post,
    path = "/quotes/generate",
    request_body = GenerateQuoteRequest,
    responses((status = 200, body = GeneratedQuote), (status = 400, description = "Blank theme"))
)]
pub async fn generate_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateQuoteRequest>,
) -> ApiResult<Json<GeneratedQuote>> {
    let generated = state.theme_quote_service.generate(&payload.theme).await?;
    Ok(Json(GeneratedQuote::from(generated)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/daily", get(daily_quote))
        .route("/quotes/daily/pick", get(daily_pick))
        .route("/quotes/generate", post(generate_quote))
        .route(
            "/quotes/{id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
}
