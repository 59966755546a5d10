use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{
    CaptionQuery, CaptionResponse, CreatePostRequest, InteractionRequest, RecommendationsQuery,
    RecommendationsResponse,
};
use feedrank::engine::RecommendationEngine;
use feedrank::store::{DocumentStore, JsonStore};
use feedrank::PostRecord;

#[derive(Clone)]
struct AppState {
    engine: Arc<RecommendationEngine<JsonStore>>,
}

pub async fn serve(
    engine: RecommendationEngine<JsonStore>,
    args: crate::ServeArgs,
) -> Result<(), String> {
    let state = AppState {
        engine: Arc::new(engine),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/recommendations", get(recommendations_handler))
        .route("/api/caption", get(caption_handler))
        .route("/api/interactions", post(interaction_handler))
        .route("/api/posts", post(create_post_handler))
        .route("/api/events", get(events_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn recommendations_handler(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, (StatusCode, String)> {
    query
        .validate()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let recommendations = state.engine.personalized(&query.user_id, query.limit).await;
    Ok(Json(RecommendationsResponse {
        user_id: query.user_id,
        recommendations,
    }))
}

async fn caption_handler(
    State(state): State<AppState>,
    Query(query): Query<CaptionQuery>,
) -> Json<CaptionResponse> {
    let suggestion = match query.rng_seed {
        Some(value) => {
            let mut rng = StdRng::seed_from_u64(value);
            state.engine.suggest_caption_with(&query.draft, &mut rng).await
        }
        None => state.engine.suggest_caption(&query.draft).await,
    };
    Json(CaptionResponse { suggestion })
}

async fn interaction_handler(
    State(state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let (user_id, post_id, kind) = request
        .into_parts()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    state.engine.track_interaction(&user_id, &post_id, kind).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_post_handler(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<PostRecord>, (StatusCode, String)> {
    let post = request
        .into_post()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let created = state
        .engine
        .store()
        .create_post(post)
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;

    Ok(Json(created))
}

async fn events_handler(
    State(state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let receiver = state.engine.store().subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8)))
}
