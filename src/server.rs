//! HTTP edge: language routing middleware in front of the static site.

use crate::catalog::ArticleIndex;
use crate::config::Config;
use crate::i18n::LanguageConfig;
use crate::routing::{LocaleResolver, RedirectKind, Resolution};
use crate::seo::{build_sitemap, render_xml, HreflangGenerator, HreflangLink, PageAlternates};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

/// Shared, read-only state for handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LocaleResolver>,
    pub hreflang: Arc<HreflangGenerator>,
    pub articles: Arc<ArticleIndex>,
}

impl AppState {
    /// Wire up state from configuration. Fails on an invalid language set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = Arc::new(config.language_registry()?);
        let articles = ArticleIndex::load_optional(config.articles_file.as_deref())?;

        Ok(Self {
            resolver: Arc::new(LocaleResolver::new(Arc::clone(&registry))),
            hreflang: Arc::new(HreflangGenerator::new(registry, &config.base_url)),
            articles: Arc::new(articles),
        })
    }
}

/// Build the router. With `site_dir`, unmatched paths are served from disk.
pub fn build_router(state: AppState, site_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/sitemap.xml", get(sitemap))
        .route("/api/alternates", get(alternates))
        .route("/api/languages", get(languages))
        .route("/api/health", get(health));

    let router = match site_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_found),
    };

    router
        .layer(middleware::from_fn_with_state(state.clone(), localize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until it stops.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let languages: Vec<&str> = state.hreflang.registry().codes().collect();
    info!(
        "Languages: {:?} (default: {})",
        languages,
        state.hreflang.registry().default_language().code
    );

    let router = build_router(state, config.site_dir.as_deref());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn redirect_status(kind: RedirectKind) -> StatusCode {
    match kind {
        RedirectKind::Permanent => StatusCode::MOVED_PERMANENTLY,
        RedirectKind::Temporary => StatusCode::TEMPORARY_REDIRECT,
    }
}

/// Middleware: redirect unlocalized URLs, let everything else through.
async fn localize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let query = Query::<Vec<(String, String)>>::try_from_uri(request.uri())
        .map(|Query(q)| q)
        .unwrap_or_default();
    let path = request.uri().path();

    match state.resolver.resolve(path, &query) {
        Resolution::Redirect { target, kind } => {
            let status = redirect_status(kind);
            debug!("Redirecting {} -> {} ({})", path, target, status.as_u16());
            (status, [(header::LOCATION, target)]).into_response()
        }
        Resolution::Passthrough | Resolution::Continue => next.run(request).await,
    }
}

#[derive(Debug, Deserialize)]
struct AlternatesQuery {
    path: String,
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct AlternatesResponse {
    lang: String,
    alternates: PageAlternates,
    links: Vec<HreflangLink>,
}

/// Page alternates for a path; `lang` defaults to the path's own language.
async fn alternates(
    State(state): State<AppState>,
    Query(params): Query<AlternatesQuery>,
) -> Response {
    let registry = state.hreflang.registry();
    let lang = params
        .lang
        .unwrap_or_else(|| registry.language_from_path(&params.path).code.clone());

    match PageAlternates::for_page(&state.hreflang, &lang, &params.path) {
        Some(alternates) => Json(AlternatesResponse {
            lang,
            alternates,
            links: state.hreflang.links(&params.path),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Unsupported language: {}", lang) })),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
struct LanguagesResponse<'a> {
    default: &'a str,
    languages: &'a [LanguageConfig],
}

/// Supported languages in iteration order, for language switchers.
async fn languages(State(state): State<AppState>) -> Response {
    let registry = state.hreflang.registry();
    Json(LanguagesResponse {
        default: &registry.default_language().code,
        languages: registry.list(),
    })
    .into_response()
}

async fn sitemap(State(state): State<AppState>) -> Response {
    let entries = build_sitemap(&state.hreflang, &state.articles, Utc::now());
    debug!("Rendering sitemap with {} entries", entries.len());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_xml(&entries),
    )
        .into_response()
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
