//! HTTP server: routing, request handlers, and response caching.
//!
//! The page route resolves the request language, persists explicit
//! choices in the session store, and renders the full document. The
//! asset routes serve the stylesheet, the generated Open Graph card,
//! the language schema, and images from the public directory with
//! conditional-request support.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::assets;
use crate::config::Config;
use crate::i18n::{resolve_language, Dictionary, LanguageSignals};
use crate::og_image;
use crate::pages::{self, Page, PageContext};
use crate::session::{self, SessionStore};

const STYLESHEET_CACHE_SECONDS: i64 = 31_536_000;
const IMAGE_CACHE_SECONDS: i64 = 86_400;
const OG_IMAGE_CACHE_SECONDS: i64 = 3_600;

/// State shared by every handler.
pub struct AppState {
    pub config: Config,
    pub dictionary: Dictionary,
    pub sessions: SessionStore,
}

/// Query parameters accepted by the page route.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
    lang: Option<String>,
}

/// Form body accepted by the page route on POST.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    lang: Option<String>,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_page).post(serve_page_form))
        .route("/style.css", get(serve_stylesheet))
        .route("/og-image.png", get(serve_og_image))
        .route("/schemas/languages.json", get(serve_language_schema))
        .route("/:image", get(serve_image))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until shutdown.
pub async fn run(config: Config, dictionary: Dictionary) -> anyhow::Result<()> {
    let bind_address = config.bind_address();
    let state = Arc::new(AppState {
        config,
        dictionary,
        sessions: SessionStore::new(),
    });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    respond_with_page(&state, query, &headers, None)
}

async fn serve_page_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
    form: Option<Form<LanguageForm>>,
) -> Response {
    let form_lang = match &form {
        Some(Form(inner)) => inner.lang.as_deref(),
        None => None,
    };
    respond_with_page(&state, query, &headers, form_lang)
}

/// Resolve the language, persist explicit choices, and render the page.
fn respond_with_page(
    state: &AppState,
    query: PageQuery,
    headers: &HeaderMap,
    form_lang: Option<&str>,
) -> Response {
    let session_id = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| session::cookie_value(cookies, &state.config.session_cookie));
    let session_lang = session_id
        .as_deref()
        .and_then(|id| state.sessions.language(id));

    let signals = LanguageSignals {
        query_lang: query.lang.as_deref(),
        form_lang,
        session_lang: session_lang.as_deref(),
        accept_language: headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok()),
    };
    let resolution = resolve_language(&signals);

    let mut set_cookie = None;
    if resolution.persist {
        let id = match session_id {
            Some(id) => id,
            None => {
                let id = SessionStore::mint_id();
                set_cookie = Some(session::session_cookie(&state.config.session_cookie, &id));
                id
            }
        };
        state.sessions.store(&id, resolution.language.code());
    }

    let base_url = request_base_url(&state.config, headers);
    let ctx = PageContext {
        dictionary: &state.dictionary,
        language: resolution.language,
        page: Page::from_query(query.page.as_deref()),
        base_url: &base_url,
    };
    let html = pages::render_page(&ctx);

    let mut response_headers = HeaderMap::new();
    if let Some(cookie) = set_cookie {
        insert_header(&mut response_headers, header::SET_COOKIE, &cookie);
    }
    (response_headers, Html(html)).into_response()
}

/// The absolute URL the page links to itself with.
///
/// An explicitly configured base wins; otherwise it is reconstructed
/// from the Host header, trusting a proxy's forwarded scheme.
fn request_base_url(config: &Config, headers: &HeaderMap) -> String {
    if let Some(base) = &config.public_base_url {
        return base.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .filter(|proto| *proto == "https")
        .unwrap_or("http");
    format!("{}://{}", scheme, host)
}

async fn serve_stylesheet(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read(&state.config.css_file).await {
        Ok(bytes) => {
            let mut headers = HeaderMap::new();
            insert_header(&mut headers, header::CONTENT_TYPE, "text/css; charset=UTF-8");
            insert_header(
                &mut headers,
                header::CACHE_CONTROL,
                &format!("public, max-age={}", STYLESHEET_CACHE_SECONDS),
            );
            insert_header(
                &mut headers,
                header::EXPIRES,
                &assets::expires_after(STYLESHEET_CACHE_SECONDS),
            );
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(_) => {
            warn!(
                "Stylesheet not found at {}",
                state.config.css_file.display()
            );
            let mut headers = HeaderMap::new();
            insert_header(&mut headers, header::CONTENT_TYPE, "text/css; charset=UTF-8");
            (StatusCode::NOT_FOUND, headers, "/* CSS file not found */").into_response()
        }
    }
}

/// The Open Graph card. Always answers 200 with a PNG, falling back to
/// a placeholder when the background cannot be processed.
async fn serve_og_image(State(state): State<Arc<AppState>>) -> Response {
    let bytes = og_image::render_card(&state.config.og_background);

    let mut headers = HeaderMap::new();
    insert_header(&mut headers, header::CONTENT_TYPE, "image/png");
    insert_header(
        &mut headers,
        header::CACHE_CONTROL,
        &format!("public, max-age={}", OG_IMAGE_CACHE_SECONDS),
    );
    insert_header(&mut headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    (StatusCode::OK, headers, bytes).into_response()
}

async fn serve_language_schema(State(state): State<Arc<AppState>>) -> Response {
    let path = state.config.schemas_dir.join("languages.json");
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mut headers = HeaderMap::new();
            insert_header(
                &mut headers,
                header::CONTENT_TYPE,
                "application/schema+json; charset=utf-8",
            );
            insert_header(&mut headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            insert_header(&mut headers, header::ACCESS_CONTROL_ALLOW_METHODS, "GET");
            insert_header(
                &mut headers,
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type",
            );
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(_) => {
            warn!("Language schema not found at {}", path.display());
            let mut headers = HeaderMap::new();
            insert_header(&mut headers, header::CONTENT_TYPE, "application/json");
            (
                StatusCode::NOT_FOUND,
                headers,
                r#"{"error":"Schema not found"}"#,
            )
                .into_response()
        }
    }
}

/// Serve an image from the public directory with revalidation support.
async fn serve_image(
    State(state): State<Arc<AppState>>,
    Path(image): Path<String>,
    request_headers: HeaderMap,
) -> Response {
    let Some(name) = assets::sanitize_image_name(&image) else {
        return (StatusCode::BAD_REQUEST, "Image name required").into_response();
    };

    let path = state.config.public_dir.join(&name);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(_) => return (StatusCode::NOT_FOUND, "Image not found").into_response(),
    };

    let etag = assets::content_etag(&bytes);

    let mut headers = HeaderMap::new();
    insert_header(
        &mut headers,
        header::CONTENT_TYPE,
        assets::sniff_content_type(&bytes),
    );
    insert_header(
        &mut headers,
        header::CACHE_CONTROL,
        &format!("public, max-age={}", IMAGE_CACHE_SECONDS),
    );
    insert_header(
        &mut headers,
        header::EXPIRES,
        &assets::expires_after(IMAGE_CACHE_SECONDS),
    );
    insert_header(&mut headers, header::ETAG, &etag);
    if let Ok(metadata) = tokio::fs::metadata(&path).await {
        if let Ok(modified) = metadata.modified() {
            insert_header(
                &mut headers,
                header::LAST_MODIFIED,
                &assets::last_modified(modified),
            );
        }
    }

    let revalidated = request_headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(|candidate| candidate == etag)
        .unwrap_or(false);
    if revalidated {
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }

    (StatusCode::OK, headers, bytes).into_response()
}

fn insert_header(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}
