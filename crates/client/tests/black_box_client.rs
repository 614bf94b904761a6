use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use jobboard_auth::{AnonymousSession, SessionProvider, SessionToken, SharedSession};
use jobboard_client::{ClientConfig, ClientError, JobBoard, JobBoardApi};
use jobboard_core::{CompanyId, CreateJobInput, JobId};
use parking_lot::Mutex;
use serde_json::{Value, json};

/// Minimal job board GraphQL server: dispatches on `operationName`.
#[derive(Default)]
struct Backend {
    jobs: Vec<Value>,
    authorization: Vec<Option<String>>,
}

type Shared = Arc<Mutex<Backend>>;

struct TestServer {
    endpoint: String,
    backend: Shared,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let backend: Shared = Arc::new(Mutex::new(Backend {
            jobs: vec![job("1", "Cook")],
            authorization: Vec::new(),
        }));

        let app = Router::new()
            .route("/graphql", post(graphql))
            .route("/broken", post(broken))
            .route("/rejecting", post(rejecting))
            .with_state(backend.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/graphql", addr),
            backend,
            handle,
        }
    }

    fn board(&self, session: Arc<dyn SessionProvider>) -> JobBoard {
        JobBoard::connect(&ClientConfig::default().with_endpoint(&self.endpoint), session)
    }

    fn seen_authorization(&self) -> Vec<Option<String>> {
        self.backend.lock().authorization.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn job(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} wanted."),
        "company": { "id": "7", "name": "Acme" }
    })
}

async fn graphql(State(backend): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut backend = backend.lock();
    backend.authorization.push(authorization.clone());

    let variables = &body["variables"];
    let response = match body["operationName"].as_str().unwrap_or_default() {
        "JobsQuery" => json!({ "data": { "jobs": backend.jobs.clone() } }),
        "JobQuery" => {
            let found = backend
                .jobs
                .iter()
                .find(|j| j["id"] == variables["id"])
                .cloned()
                .unwrap_or(Value::Null);
            json!({ "data": { "job": found } })
        }
        "CompanyQuery" => {
            let jobs: Vec<Value> = backend
                .jobs
                .iter()
                .map(|j| json!({ "id": j["id"], "title": j["title"] }))
                .collect();
            if variables["id"] == "7" {
                json!({ "data": { "company": { "id": "7", "name": "Acme", "description": "Anvils.", "jobs": jobs } } })
            } else {
                json!({ "data": { "company": null } })
            }
        }
        "CreateJob" if authorization.as_deref() == Some("Bearer valid") => {
            let id = (backend.jobs.len() + 1).to_string();
            let title = variables["input"]["title"].as_str().unwrap_or_default().to_string();
            let created = job(&id, &title);
            backend.jobs.push(created.clone());
            json!({ "data": { "job": created } })
        }
        "CreateJob" => json!({ "data": null, "errors": [{ "message": "Unauthorized" }] }),
        other => json!({ "errors": [{ "message": format!("unknown operation {other}") }] }),
    };

    Json(response)
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn rejecting() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": [{ "message": "Cannot query field \"salary\" on type \"Job\"." }] })),
    )
}

#[tokio::test]
async fn lists_jobs_over_http() {
    let srv = TestServer::spawn().await;
    let board = srv.board(Arc::new(AnonymousSession));

    let jobs = board.list_jobs().await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Cook");
    assert_eq!(jobs[0].company.id, CompanyId::new("7"));
}

#[tokio::test]
async fn authorization_header_only_with_session() {
    let srv = TestServer::spawn().await;
    let session = SharedSession::new();
    let board = srv.board(Arc::new(session.clone()));

    board.list_jobs().await.unwrap();
    session.login(SessionToken::new("valid"));
    board.list_jobs().await.unwrap();
    session.logout();
    board.list_jobs().await.unwrap();

    assert_eq!(
        srv.seen_authorization(),
        vec![None, Some("Bearer valid".to_string()), None]
    );
}

#[tokio::test]
async fn create_job_is_visible_in_list_and_cached_for_detail() {
    let srv = TestServer::spawn().await;
    let board = srv.board(Arc::new(SharedSession::with_token(SessionToken::new("valid"))));

    let created = board.create_job(CreateJobInput::new("Waiter")).await.unwrap();
    assert_eq!(created.id, JobId::new("2"));

    let jobs = board.list_jobs().await.unwrap();
    assert!(jobs.iter().any(|j| j.id == created.id));

    let requests_before = srv.seen_authorization().len();
    let loaded = board.load_job(&created.id).await.unwrap();
    assert_eq!(loaded, created);
    assert_eq!(srv.seen_authorization().len(), requests_before);
}

#[tokio::test]
async fn cached_detail_survives_server_shutdown() {
    let srv = TestServer::spawn().await;
    let board = srv.board(Arc::new(AnonymousSession));

    let first = board.load_job(&JobId::new("1")).await.unwrap();
    drop(srv);

    let again = board.load_job(&JobId::new("1")).await.unwrap();
    assert_eq!(again, first);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let board = JobBoard::connect(
        &ClientConfig::default().with_endpoint(format!("http://{}/graphql", addr)),
        Arc::new(AnonymousSession),
    );

    let err = board.load_job(&JobId::new("1")).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn unauthenticated_create_surfaces_graphql_error() {
    let srv = TestServer::spawn().await;
    let board = srv.board(Arc::new(AnonymousSession));

    let err = board.create_job(CreateJobInput::new("Waiter")).await.unwrap_err();

    assert_eq!(err, ClientError::GraphQl(vec!["Unauthorized".to_string()]));
    assert_eq!(board.list_jobs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let srv = TestServer::spawn().await;
    let board = srv.board(Arc::new(AnonymousSession));

    assert!(board.load_job(&JobId::new("404")).await.unwrap_err().is_not_found());
    assert!(board.load_company(&CompanyId::new("404")).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn company_detail_includes_its_jobs() {
    let srv = TestServer::spawn().await;
    let board = srv.board(Arc::new(AnonymousSession));

    let company = board.load_company(&CompanyId::new("7")).await.unwrap();

    assert_eq!(company.name, "Acme");
    assert_eq!(company.jobs.len(), 1);
    assert_eq!(company.jobs[0].id, JobId::new("1"));
}

#[tokio::test]
async fn non_graphql_http_failures_keep_status() {
    let srv = TestServer::spawn().await;
    let endpoint = srv.endpoint.replace("/graphql", "/broken");
    let board = JobBoard::connect(
        &ClientConfig::default().with_endpoint(endpoint),
        Arc::new(AnonymousSession),
    );

    let err = board.list_jobs().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Http {
            status: 500,
            body: "upstream exploded".to_string()
        }
    );
}

#[tokio::test]
async fn bad_request_with_graphql_errors_surfaces_messages() {
    let srv = TestServer::spawn().await;
    let endpoint = srv.endpoint.replace("/graphql", "/rejecting");
    let board = JobBoard::connect(
        &ClientConfig::default().with_endpoint(endpoint),
        Arc::new(AnonymousSession),
    );

    let err = board.list_jobs().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::GraphQl(vec!["Cannot query field \"salary\" on type \"Job\".".to_string()])
    );
}
