use crate::engine::LyricsEngine;
use crate::stats::top_k;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ========== Request/Response Types ==========

#[derive(Debug, Deserialize)]
pub struct TopWordsQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

impl TopWordsQuery {
    fn limit(&self) -> usize {
        self.limit.unwrap_or(10)
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub songs: usize,
    pub artists: usize,
    pub total_words: usize,
    pub distinct_words: usize,
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub id: usize,
    pub artist: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct WeightedWord {
    pub word: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct FrequentWord {
    pub word: String,
    pub count: usize,
    /// Share of the total word count, in percent.
    pub share: f64,
}

#[derive(Debug, Serialize)]
pub struct RareWord {
    pub word: String,
    pub idf: f64,
    /// How many songs contain the word at least once.
    pub songs: usize,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    fn error_msg(message: String) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

// ========== Handlers ==========

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK"))
}

async fn get_stats(State(engine): State<Arc<LyricsEngine>>) -> impl IntoResponse {
    let stats = engine.stats();

    Json(ApiResponse::success(StatsResponse {
        songs: stats.document_count,
        artists: stats.artist_count,
        total_words: stats.total_words,
        distinct_words: stats.distinct_words(),
    }))
}

async fn list_artists(State(engine): State<Arc<LyricsEngine>>) -> impl IntoResponse {
    let artists: Vec<String> = engine.artists().into_iter().map(String::from).collect();
    Json(ApiResponse::success(artists))
}

async fn artist_words(
    State(engine): State<Arc<LyricsEngine>>,
    Path(name): Path<String>,
    Query(query): Query<TopWordsQuery>,
) -> impl IntoResponse {
    // unknown artists yield an empty list, not an error
    let weights = engine.artist_weights(&name);
    let words: Vec<WeightedWord> = top_k(&weights, query.limit())
        .into_iter()
        .map(|(word, score)| WeightedWord { word, score })
        .collect();

    Json(ApiResponse::success(words))
}

async fn list_songs(State(engine): State<Arc<LyricsEngine>>) -> impl IntoResponse {
    let songs: Vec<SongResponse> = engine
        .documents()
        .iter()
        .enumerate()
        .map(|(id, doc)| SongResponse {
            id,
            artist: doc.artist.clone(),
            title: doc.display_title(),
        })
        .collect();

    Json(ApiResponse::success(songs))
}

async fn song_words(
    State(engine): State<Arc<LyricsEngine>>,
    Path(id): Path<usize>,
    Query(query): Query<TopWordsQuery>,
) -> impl IntoResponse {
    match engine.document_weights(id) {
        Some(weights) => {
            let words: Vec<WeightedWord> = top_k(weights, query.limit())
                .into_iter()
                .map(|(word, score)| WeightedWord { word, score })
                .collect();
            Json(ApiResponse::success(words))
        }
        None => Json(ApiResponse::error_msg(format!("song {} not found", id))),
    }
}

async fn frequent_words(
    State(engine): State<Arc<LyricsEngine>>,
    Query(query): Query<TopWordsQuery>,
) -> impl IntoResponse {
    let stats = engine.stats();
    let total = stats.total_words.max(1) as f64;

    let words: Vec<FrequentWord> = top_k(&stats.word_frequency, query.limit())
        .into_iter()
        .map(|(word, count)| FrequentWord {
            word,
            count,
            share: count as f64 / total * 100.0,
        })
        .collect();

    Json(ApiResponse::success(words))
}

async fn rare_words(
    State(engine): State<Arc<LyricsEngine>>,
    Query(query): Query<TopWordsQuery>,
) -> impl IntoResponse {
    let stats = engine.stats();

    let words: Vec<RareWord> = top_k(&stats.word_idf, query.limit())
        .into_iter()
        .map(|(word, idf)| {
            let songs = stats.document_frequency.get(&word).copied().unwrap_or(0);
            RareWord { word, idf, songs }
        })
        .collect();

    Json(ApiResponse::success(words))
}

// ========== Router ==========

pub fn create_router(engine: Arc<LyricsEngine>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .route("/artists", get(list_artists))
        .route("/artists/:name/words", get(artist_words))
        .route("/songs", get(list_songs))
        .route("/songs/:id/words", get(song_words))
        .route("/words/frequent", get(frequent_words))
        .route("/words/rare", get(rare_words))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(engine)
}
