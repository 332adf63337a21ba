#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    path::Path,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{Extension, Json, Router, extract::Query, http::StatusCode};
use chrono::NaiveDate;
use serde_json::{Value, json};

use fancam::{
    error::{LookupError, SearchFailure},
    lastfm::MetadataSource,
    management::{LinkCacheManager, OverrideTable},
    resolver::{LinkResolver, QueryKeywords},
    types::{SimilarArtist, TrackRecord},
    youtube::VideoSearch,
};

pub const PRIMARY: &str = "직캠";
pub const FALLBACK: &str = "MV";

/// Video search double answering from a query → result script.
/// Unscripted queries miss with `NoResults`.
#[derive(Default)]
pub struct ScriptedSearch {
    responses: HashMap<String, Result<String, SearchFailure>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, result: Result<&str, SearchFailure>) -> Self {
        self.responses
            .insert(query.to_string(), result.map(str::to_string));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearch for ScriptedSearch {
    async fn search(&self, query: &str) -> Result<String, SearchFailure> {
        self.calls.lock().unwrap().push(query.to_string());
        self.responses
            .get(query)
            .cloned()
            .unwrap_or(Err(SearchFailure::NoResults))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum StubFailure {
    Status(u16),
    Malformed,
}

impl StubFailure {
    fn into_error(self) -> LookupError {
        match self {
            StubFailure::Status(status) => LookupError::UpstreamUnavailable { status },
            StubFailure::Malformed => {
                LookupError::MalformedResponse("missing key 'toptracks'".to_string())
            }
        }
    }
}

/// In-memory metadata collaborator.
#[derive(Default)]
pub struct StubMetadata {
    pub tracks: Vec<TrackRecord>,
    pub release_dates: HashMap<String, NaiveDate>,
    pub failing_release_lookups: HashSet<String>,
    pub similar: Vec<SimilarArtist>,
    pub fail: Option<StubFailure>,
    pub release_calls: AtomicUsize,
}

impl StubMetadata {
    pub fn with_tracks(tracks: Vec<TrackRecord>) -> Self {
        Self {
            tracks,
            ..Self::default()
        }
    }

    pub fn released(mut self, track: &str, y: i32, m: u32, d: u32) -> Self {
        self.release_dates
            .insert(track.to_string(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
        self
    }

    pub fn release_calls(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for StubMetadata {
    async fn top_tracks(&self, _artist: &str) -> Result<Vec<TrackRecord>, LookupError> {
        match self.fail {
            Some(failure) => Err(failure.into_error()),
            None => Ok(self.tracks.clone()),
        }
    }

    async fn release_date(
        &self,
        _artist: &str,
        track: &str,
    ) -> Result<Option<NaiveDate>, LookupError> {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_release_lookups.contains(track) {
            return Err(LookupError::UpstreamUnavailable { status: 500 });
        }
        Ok(self.release_dates.get(track).copied())
    }

    async fn similar_artists(&self, _artist: &str) -> Result<Vec<SimilarArtist>, LookupError> {
        match self.fail {
            Some(failure) => Err(failure.into_error()),
            None => Ok(self.similar.clone()),
        }
    }
}

pub fn track(name: &str, playcount: u64) -> TrackRecord {
    TrackRecord::new(name, "NewJeans", playcount)
}

pub fn query(track: &str, artist: &str, keyword: &str) -> String {
    format!("{track} {artist} {keyword}")
}

pub fn keywords() -> QueryKeywords {
    QueryKeywords {
        primary: PRIMARY.to_string(),
        fallback: FALLBACK.to_string(),
    }
}

pub fn empty_cache(dir: &Path) -> Arc<LinkCacheManager> {
    Arc::new(LinkCacheManager::new(dir.join("youtube-links.json"), None))
}

pub fn resolver(search: Arc<ScriptedSearch>, cache: Arc<LinkCacheManager>) -> LinkResolver {
    LinkResolver::new(OverrideTable::builtin(), cache, search, keywords())
}

/// Upstream double answering GET requests by the value of one query
/// parameter (`method` for Last.fm, `q` for YouTube).
pub struct MockUpstream {
    key_param: &'static str,
    responses: HashMap<String, (u16, Value)>,
    hits: Mutex<Vec<HashMap<String, String>>>,
}

impl MockUpstream {
    pub fn hits(&self) -> Vec<HashMap<String, String>> {
        self.hits.lock().unwrap().clone()
    }
}

async fn respond(
    Query(params): Query<HashMap<String, String>>,
    Extension(mock): Extension<Arc<MockUpstream>>,
) -> (StatusCode, Json<Value>) {
    mock.hits.lock().unwrap().push(params.clone());
    let key = params.get(mock.key_param).cloned().unwrap_or_default();
    match mock.responses.get(&key) {
        Some((status, body)) => (StatusCode::from_u16(*status).unwrap(), Json(body.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "unscripted" }))),
    }
}

/// Serves the mock on an ephemeral port and returns its base URL.
pub async fn spawn_upstream(
    key_param: &'static str,
    responses: Vec<(&str, u16, Value)>,
) -> (String, Arc<MockUpstream>) {
    let mock = Arc::new(MockUpstream {
        key_param,
        responses: responses
            .into_iter()
            .map(|(k, s, v)| (k.to_string(), (s, v)))
            .collect(),
        hits: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .fallback(respond)
        .layer(Extension(Arc::clone(&mock)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), mock)
}
