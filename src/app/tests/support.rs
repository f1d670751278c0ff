use crate::upload::SelectedFile;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::{net::TcpListener, sync::Mutex};

pub const SCENARIO_A_BODY: &str = r#"{"summary":"Users like speed","improvement_suggestions":["Improve docs","Add dark mode"],"sentiment_stats":{"positive":{"count":80,"percent":80.00},"neutral":{"count":10,"percent":10.00},"negative":{"count":10,"percent":10.00}}}"#;

pub const FEEDBACK_CSV: &str = "feedback_id,text,rating\n1,Fast and simple,5\n2,Docs are thin,2\n";

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

async fn handle_analyze(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let content = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(ReceivedPart {
            field: name,
            file_name,
            content_type,
            content,
        });
    }
    state.received.lock().await.push(parts);
    (state.status, state.body.to_string())
}

/// In-process `/analyze` stand-in answering every request with a fixed
/// status and body.
pub struct AnalyzeServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

impl AnalyzeServer {
    pub async fn spawn(status: StatusCode, body: &'static str) -> Self {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            status,
            body,
            received: received.clone(),
        };
        let app = Router::new()
            .route("/analyze", post(handle_analyze))
            .with_state(state);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    /// One entry per request, each holding the multipart parts it carried.
    pub async fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.received.lock().await.clone()
    }
}

/// An endpoint nothing is listening on.
pub async fn unreachable_endpoint() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/analyze")
}

pub fn write_csv(name: &str) -> (TempDir, SelectedFile) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, FEEDBACK_CSV).expect("write csv");
    let file = SelectedFile::from_path(path).expect("csv selection");
    (dir, file)
}

/// Drives `step` until it reports the request finished.
pub async fn settle(mut step: impl FnMut() -> bool) {
    for _ in 0..500 {
        if step() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("analysis request did not finish");
}
