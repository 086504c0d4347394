use std::sync::Arc;

use crate::config::Config;
use citation_ai::{MistralConfig, MistralGenerator, QuoteGeneratorTrait, ThemeQuoteService};
use citation_core::{
    daily::{Clock, DailyQuoteService, DailyQuoteServiceTrait, SystemClock},
    quotes::{QuoteService, QuoteServiceTrait},
};
use citation_storage_sqlite::{
    daily::DailyPickRepository,
    db::{self, write_actor},
    quotes::QuoteRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
    pub daily_quote_service: Arc<dyn DailyQuoteServiceTrait + Send + Sync>,
    pub theme_quote_service: Arc<ThemeQuoteService>,
    /// Source of "today" for the daily quote.
    pub clock: Arc<dyn Clock>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CITATION_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let clock = Arc::new(SystemClock::new(config.timezone));
    build_state_with_clock(config, clock).await
}

/// Same as [`build_state`] with an explicit clock, so callers can pin the day.
pub async fn build_state_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let quote_repository = Arc::new(QuoteRepository::new(pool.clone(), writer.clone()));
    let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> =
        Arc::new(QuoteService::new(quote_repository));

    if config.seed_quotes {
        quote_service.seed_default_quotes().await?;
    }

    let pick_repository = Arc::new(DailyPickRepository::new(pool.clone(), writer.clone()));
    let daily_quote_service: Arc<dyn DailyQuoteServiceTrait + Send + Sync> = Arc::new(
        DailyQuoteService::new(quote_service.clone(), pick_repository),
    );

    let generator: Option<Arc<dyn QuoteGeneratorTrait>> = match &config.ai.api_key {
        Some(api_key) => {
            let mistral = MistralConfig {
                base_url: config.ai.base_url.clone(),
                model: config.ai.model.clone(),
                timeout: config.ai.timeout,
                ..MistralConfig::new(api_key.clone())
            };
            tracing::info!("Theme quotes generated with model {}", mistral.model);
            Some(Arc::new(MistralGenerator::new(mistral)?))
        }
        None => {
            tracing::info!("MISTRAL_API_KEY not set, theme quotes use local fallbacks");
            None
        }
    };
    let theme_quote_service = Arc::new(ThemeQuoteService::new(generator));

    Ok(Arc::new(AppState {
        quote_service,
        daily_quote_service,
        theme_quote_service,
        clock,
    }))
}
