use anyhow::{Context, Result};
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use saber_tudo_core::paths::{category_path, tutorial_path};
use saber_tudo_core::query::{by_category, find_by_id, matches_lowercase, search};
use saber_tudo_core::{Article, Category, Config, Library};
use saber_tudo_corpus::build_library;
use saber_tudo_tutor::{GeminiClient, GenerationError, TutorialGenerator, USER_NOTICE, generate_article};
use saber_tudo_validator::validate_library;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::load_config;
use super::template::{
    RenderMode, render_article, render_category, render_generate_form, render_home,
    render_not_found, render_search,
};

const BLANK_TOPIC_NOTICE: &str = "Digite um tema para gerar o tutorial.";

#[derive(Clone)]
pub struct AppState {
    pub library: Arc<Library>,
    pub generator: Arc<dyn TutorialGenerator>,
    pub config: Arc<Config>,
}

/// Start the site server.
///
/// This command:
/// - Loads site.toml (or defaults)
/// - Builds and validates the article library
/// - Serves the HTML pages and the JSON API until Ctrl+C
pub async fn run(config_path: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("📚 Starting {}...", config.site.name);

    let articles = build_library(&config.images.host);
    let report = validate_library(&articles);
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &report.errors {
        tracing::error!("{}", error);
    }
    println!("   ✓ Library: {} articles", articles.len());

    let generator = GeminiClient::from_settings(&config.generation)
        .context("Failed to create Gemini client")?;
    if generator.has_credentials() {
        println!("   ✓ Generator: {}", config.generation.model);
    } else {
        tracing::warn!(
            env = %config.generation.api_key_env,
            "no API key set, tutorial generation will fail"
        );
        println!(
            "   ⚠ Generator disabled: set {} to enable it",
            config.generation.api_key_env
        );
    }

    let addr = (config.server.host.clone(), config.server.port);
    let state = AppState {
        library: Arc::new(Library::new(articles)),
        generator: Arc::new(generator),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind((addr.0.as_str(), addr.1))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", addr.0, addr.1))?;

    println!("\n🚀 Site ready at: http://{}:{}", addr.0, addr.1);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/categoria/{category}", get(category_handler))
        .route("/tutorial/{id}", get(tutorial_handler))
        .route("/busca", get(search_handler))
        .route("/gerar", get(generate_form_handler).post(generate_submit_handler))
        .route("/api/articles", get(api_articles_handler))
        .route("/api/articles/{id}", get(api_article_handler))
        .route("/api/categories", get(api_categories_handler))
        .route("/api/generate", post(api_generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run one generation and store the result at the front of the library
async fn generate_and_store(
    state: &AppState,
    topic: &str,
) -> Result<Arc<Article>, GenerationError> {
    let article = generate_article(
        state.generator.as_ref(),
        topic,
        &state.config.images.host,
        state.config.generation.timeout(),
    )
    .await?;
    Ok(state.library.prepend(article))
}

async fn home_handler(State(state): State<AppState>) -> Html<String> {
    let articles = state.library.snapshot();
    Html(render_home(&state.config.site, &articles, RenderMode::Interactive))
}

async fn category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Html<String> {
    let articles = state.library.snapshot();
    let found = by_category(&articles, &category);
    Html(render_category(
        &state.config.site,
        &category,
        &found,
        RenderMode::Interactive,
    ))
}

async fn tutorial_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let articles = state.library.snapshot();
    match find_by_id(&articles, &id) {
        Some(article) => Html(render_article(
            &state.config.site,
            article,
            RenderMode::Interactive,
        ))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html(render_not_found(&state.config.site, RenderMode::Interactive)),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let articles = state.library.snapshot();
    let results = search(&articles, &params.q);
    Html(render_search(&state.config.site, &params.q, &results))
}

async fn generate_form_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_generate_form(&state.config.site, "", None))
}

#[derive(Debug, Deserialize)]
struct GenerateForm {
    #[serde(default)]
    topic: String,
}

async fn generate_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let topic = form.topic.trim();
    if topic.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(render_generate_form(
                &state.config.site,
                "",
                Some(BLANK_TOPIC_NOTICE),
            )),
        )
            .into_response();
    }

    match generate_and_store(&state, topic).await {
        Ok(article) => Redirect::to(&tutorial_path(&article.id)).into_response(),
        Err(e) => {
            tracing::warn!(topic, error = %e, "tutorial generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(render_generate_form(
                    &state.config.site,
                    topic,
                    Some(USER_NOTICE),
                )),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArticleParams {
    category: Option<String>,
    q: Option<String>,
    limit: Option<usize>,
}

/// Filters compose: category first, then search, then limit
async fn api_articles_handler(
    State(state): State<AppState>,
    Query(params): Query<ArticleParams>,
) -> Json<Vec<Article>> {
    let articles = state.library.snapshot();
    let mut selected: Vec<&Article> = match params.category.as_deref() {
        Some(category) => by_category(&articles, category),
        None => articles.iter().map(Arc::as_ref).collect(),
    };
    if let Some(q) = params.q.as_deref() {
        let needle = q.to_lowercase();
        selected.retain(|a| matches_lowercase(a, &needle));
    }
    if let Some(limit) = params.limit {
        selected.truncate(limit);
    }
    Json(selected.into_iter().cloned().collect())
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

fn api_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ApiError {
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn api_article_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let articles = state.library.snapshot();
    match find_by_id(&articles, &id) {
        Some(article) => Json(article.clone()).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "article not found"),
    }
}

#[derive(Debug, Serialize)]
struct CategorySummary {
    name: &'static str,
    path: String,
    count: usize,
}

async fn api_categories_handler(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let articles = state.library.snapshot();
    let summaries = Category::ALL
        .iter()
        .map(|c| CategorySummary {
            name: c.as_str(),
            path: category_path(c.as_str()),
            count: by_category(&articles, c.as_str()).len(),
        })
        .collect();
    Json(summaries)
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    topic: String,
}

async fn api_generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "topic must not be empty");
    }

    match generate_and_store(&state, topic).await {
        Ok(article) => (StatusCode::CREATED, Json(Article::clone(&article))).into_response(),
        Err(e) => {
            tracing::warn!(topic, error = %e, "tutorial generation failed");
            api_error(StatusCode::BAD_GATEWAY, USER_NOTICE)
        }
    }
}
