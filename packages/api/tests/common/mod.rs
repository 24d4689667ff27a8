#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use api::auth::token::now_secs;
use api::{
    ApiClient, ApiError, ApiRequest, ApiResponse, Method, Notifier, SessionController,
    SessionHandle, TokenPair, Transport, User,
};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{json, Value};
use store::MemoryStore;

type Script = VecDeque<Result<ApiResponse, String>>;

/// Transport answering from per-route queues and recording every request.
/// Unscripted routes answer `404`.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Script>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body)))
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(message.to_string()))
    }

    fn push(&self, method: Method, path: &str, reply: Result<ApiResponse, String>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        // Let concurrent requests interleave as they would on the network.
        tokio::task::yield_now().await;
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(|queue| queue.pop_front());
        match reply {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Transport(message)),
            None => Ok(ApiResponse::new(404, json!({"detail": "Not found."}))),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(bool, String)>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.filter(true)
    }

    pub fn errors(&self) -> Vec<String> {
        self.filter(false)
    }

    fn filter(&self, ok: bool) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(success, _)| *success == ok)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push((false, message.to_string()));
    }
}

/// A signed token expiring at `exp`; `label` keeps tokens with equal expiry distinct.
pub fn jwt(label: &str, exp: u64) -> String {
    let claims = json!({ "token_type": label, "exp": exp, "user_id": 42 });
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

pub fn live(label: &str) -> String {
    jwt(label, now_secs() + 3600)
}

pub fn expired(label: &str) -> String {
    jwt(label, now_secs() - 60)
}

pub fn user_json() -> Value {
    json!({
        "id": 42,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Byron",
        "role": "user",
        "is_tenant_admin": false,
        "tenant": 3,
        "tenant_name": "Acme"
    })
}

pub fn user() -> User {
    serde_json::from_value(user_json()).unwrap()
}

pub struct Harness {
    pub kv: MemoryStore,
    pub transport: MockTransport,
    pub notifier: Rc<RecordingNotifier>,
    pub controller: SessionController<MockTransport, MemoryStore>,
}

impl Harness {
    pub fn new() -> Self {
        let kv = MemoryStore::new();
        let transport = MockTransport::new();
        let notifier = Rc::new(RecordingNotifier::default());
        let client = ApiClient::new(transport.clone(), SessionHandle::new(kv.clone()));
        let controller = SessionController::with_notifier(client, notifier.clone());
        Self {
            kv,
            transport,
            notifier,
            controller,
        }
    }

    pub fn client(&self) -> &ApiClient<MockTransport, MemoryStore> {
        self.controller.client()
    }

    pub fn session(&self) -> &SessionHandle<MemoryStore> {
        self.controller.session()
    }

    /// Persist a session without touching the in-memory state.
    pub fn store_session(&self, tokens: &TokenPair) {
        self.session().store().save(&user(), tokens).unwrap();
    }

    /// Both session entries are present or both are absent, in step with the state.
    pub fn assert_consistent(&self) {
        use store::KeyValueStore;
        let tokens = self.kv.get("tokens").unwrap();
        let user = self.kv.get("user").unwrap();
        assert_eq!(tokens.is_some(), user.is_some(), "partial session in storage");
        let state = self.controller.state();
        assert_eq!(state.user().is_some(), state.tokens().is_some());
        assert_eq!(tokens.is_some(), state.is_authenticated());
    }
}
