mod common;

use api::auth::persist::{TOKENS_KEY, USER_KEY};
use api::models::RegisterData;
use api::{ApiError, Method, SessionState, TokenPair};
use common::{expired, live, user, user_json, Harness};
use serde_json::json;
use store::KeyValueStore;

const REFRESH: &str = "/auth/token/refresh/";

#[tokio::test]
async fn test_initialize_restores_valid_session_without_network() {
    let h = Harness::new();
    let tokens = TokenPair::new(live("access"), live("refresh"));
    h.store_session(&tokens);

    let state = h.controller.initialize().await;

    assert_eq!(
        state,
        SessionState::Authenticated {
            user: user(),
            tokens
        }
    );
    assert!(!h.controller.state().is_loading());
    assert!(h.transport.requests().is_empty());
    h.assert_consistent();
}

#[tokio::test]
async fn test_initialize_renews_expired_access_token() {
    let h = Harness::new();
    let refresh = live("refresh");
    h.store_session(&TokenPair::new(expired("access"), refresh.clone()));
    let renewed = live("renewed");
    h.transport
        .on(Method::Post, REFRESH, 200, json!({ "access": renewed }));

    let state = h.controller.initialize().await;

    assert_eq!(state.tokens(), Some(&TokenPair::new(renewed.clone(), refresh.clone())));
    assert_eq!(h.transport.requests().len(), 1);
    let request = &h.transport.requests()[0];
    assert_eq!(request.body, Some(json!({ "refresh": refresh })));
    assert!(request.bearer.is_none());
    assert_eq!(h.session().access_token(), Some(renewed));
    h.assert_consistent();
}

#[tokio::test]
async fn test_initialize_without_stored_session() {
    let h = Harness::new();
    let state = h.controller.initialize().await;
    assert_eq!(state, SessionState::Unauthenticated);
    assert!(h.transport.requests().is_empty());
    assert!(h.notifier.successes().is_empty());
}

#[tokio::test]
async fn test_initialize_with_half_a_session_is_signed_out() {
    let h = Harness::new();
    h.kv.set(USER_KEY, &user_json().to_string()).unwrap();

    assert_eq!(h.controller.initialize().await, SessionState::Unauthenticated);
    assert!(h.kv.is_empty());
}

#[tokio::test]
async fn test_initialize_with_corrupt_storage_signs_out() {
    let h = Harness::new();
    h.kv.set(TOKENS_KEY, "{\"access\":").unwrap();
    h.kv.set(USER_KEY, &user_json().to_string()).unwrap();

    let state = h.controller.initialize().await;

    assert_eq!(state, SessionState::Unauthenticated);
    assert!(h.kv.is_empty());
    assert_eq!(h.notifier.successes(), vec!["Logged out successfully"]);
    h.assert_consistent();
}

#[tokio::test]
async fn test_initialize_with_expired_refresh_token_skips_network() {
    let h = Harness::new();
    h.store_session(&TokenPair::new(expired("access"), expired("refresh")));

    assert_eq!(h.controller.initialize().await, SessionState::Unauthenticated);
    assert!(h.transport.requests().is_empty());
    assert!(h.kv.is_empty());
}

#[tokio::test]
async fn test_initialize_signs_out_when_renewal_is_rejected() {
    let h = Harness::new();
    h.store_session(&TokenPair::new(expired("access"), live("refresh")));
    h.transport.on(
        Method::Post,
        REFRESH,
        401,
        json!({"detail": "Token is blacklisted", "code": "token_not_valid"}),
    );

    assert_eq!(h.controller.initialize().await, SessionState::Unauthenticated);
    assert_eq!(h.transport.calls(Method::Post, REFRESH), 1);
    assert!(h.kv.is_empty());
}

#[tokio::test]
async fn test_login_success_persists_session() {
    let h = Harness::new();
    h.transport.on(
        Method::Post,
        "/auth/login/",
        200,
        json!({"user": user_json(), "tokens": {"access": "A1", "refresh": "R1"}}),
    );

    let signed_in = h.controller.login("a@b.com", "x").await.unwrap();

    assert_eq!(signed_in, user());
    assert_eq!(
        h.controller.state(),
        SessionState::Authenticated {
            user: user(),
            tokens: TokenPair::new("A1", "R1")
        }
    );
    assert_eq!(
        h.kv.get(TOKENS_KEY).unwrap().as_deref(),
        Some(r#"{"access":"A1","refresh":"R1"}"#)
    );
    let stored_user: serde_json::Value =
        serde_json::from_str(&h.kv.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored_user["email"], "a@b.com");
    assert_eq!(stored_user["id"], 42);

    let request = &h.transport.requests()[0];
    assert_eq!(request.body, Some(json!({"email": "a@b.com", "password": "x"})));
    assert!(request.bearer.is_none());
    assert_eq!(h.notifier.successes(), vec!["Login successful!"]);
    h.assert_consistent();
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let h = Harness::new();
    // A stale session on disk must not turn the 401 into a refresh attempt.
    h.store_session(&TokenPair::new(live("access"), live("refresh")));
    h.transport.on(
        Method::Post,
        "/auth/login/",
        401,
        json!({"detail": "No active account found with the given credentials"}),
    );

    let err = h.controller.login("a@b.com", "wrong").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
    assert_eq!(
        h.notifier.errors(),
        vec!["No active account found with the given credentials"]
    );
    assert_eq!(h.transport.requests().len(), 1);
    assert!(h.kv.is_empty());
    h.assert_consistent();
}

#[tokio::test]
async fn test_login_network_failure_uses_fallback_message() {
    let h = Harness::new();
    h.transport
        .fail(Method::Post, "/auth/login/", "connection refused");

    let err = h.controller.login("a@b.com", "x").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(h.notifier.errors(), vec!["Login failed"]);
    assert!(!h.controller.state().is_loading());
}

#[tokio::test]
async fn test_register_creates_session() {
    let h = Harness::new();
    h.transport.on(
        Method::Post,
        "/auth/register/",
        201,
        json!({
            "user": user_json(),
            "tenant": {"id": 3, "name": "Acme"},
            "tokens": {"access": "A1", "refresh": "R1"}
        }),
    );
    let data = RegisterData {
        email: "a@b.com".into(),
        password: "s3cret!".into(),
        password2: "s3cret!".into(),
        first_name: "Ada".into(),
        last_name: "Byron".into(),
        phone_number: None,
        tenant_name: Some("Acme".into()),
    };

    h.controller.register(&data).await.unwrap();

    assert!(h.controller.state().is_authenticated());
    let body = h.transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["tenant_name"], "Acme");
    assert!(body.get("phone_number").is_none());
    assert_eq!(h.notifier.successes(), vec!["Registration successful!"]);
    h.assert_consistent();
}

#[tokio::test]
async fn test_register_failure_reads_field_errors() {
    let h = Harness::new();
    h.transport.on(
        Method::Post,
        "/auth/register/",
        400,
        json!({"email": ["user with this email already exists."]}),
    );

    let err = h
        .controller
        .register(&RegisterData::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        h.notifier.errors(),
        vec!["user with this email already exists."]
    );
    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_register_network_failure_uses_fallback_message() {
    let h = Harness::new();
    h.transport
        .fail(Method::Post, "/auth/register/", "connection refused");

    let err = h
        .controller
        .register(&RegisterData::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(h.notifier.errors(), vec!["Registration failed"]);
    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
    h.assert_consistent();
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let h = Harness::new();
    h.session()
        .signed_in(user(), TokenPair::new(live("access"), live("refresh")));

    h.controller.logout();

    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
    assert!(h.kv.is_empty());
    assert_eq!(h.notifier.successes(), vec!["Logged out successfully"]);
    h.assert_consistent();
}

#[tokio::test]
async fn test_refresh_without_session_makes_no_request() {
    let h = Harness::new();
    h.controller.initialize().await;

    let err = h.controller.refresh().await.unwrap_err();

    assert!(matches!(err, ApiError::NoRefreshToken));
    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn test_refresh_replaces_access_only() {
    let h = Harness::new();
    let refresh = live("refresh");
    h.session()
        .signed_in(user(), TokenPair::new(live("access"), refresh.clone()));
    h.transport.on(Method::Post, REFRESH, 200, json!({"access": "A2"}));

    let pair = h.controller.refresh().await.unwrap();

    assert_eq!(pair, TokenPair::new("A2", refresh.clone()));
    assert_eq!(h.controller.state().tokens(), Some(&pair));
    assert_eq!(h.session().stored_tokens(), Some(pair));
    h.assert_consistent();
}

#[tokio::test]
async fn test_refresh_failure_tears_down_like_logout() {
    let h = Harness::new();
    h.session()
        .signed_in(user(), TokenPair::new(live("access"), live("refresh")));
    h.transport.on(
        Method::Post,
        REFRESH,
        401,
        json!({"detail": "Token is invalid or expired"}),
    );

    let err = h.controller.refresh().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
    assert!(h.kv.is_empty());
    assert!(h.notifier.successes().is_empty());
    h.assert_consistent();
}

#[tokio::test]
async fn test_sign_out_blacklists_refresh_token() {
    let h = Harness::new();
    let (access, refresh) = (live("access"), live("refresh"));
    h.session()
        .signed_in(user(), TokenPair::new(access.clone(), refresh.clone()));
    h.transport.on(
        Method::Post,
        "/auth/logout/",
        200,
        json!({"message": "Successfully logged out"}),
    );

    h.controller.sign_out().await;

    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "/auth/logout/");
    assert_eq!(request.body, Some(json!({ "refresh_token": refresh })));
    assert_eq!(request.bearer.as_deref(), Some(access.as_str()));
    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_sign_out_ignores_server_failure() {
    let h = Harness::new();
    h.session()
        .signed_in(user(), TokenPair::new(live("access"), live("refresh")));
    h.transport
        .fail(Method::Post, "/auth/logout/", "connection reset");

    h.controller.sign_out().await;

    assert_eq!(h.controller.state(), SessionState::Unauthenticated);
    assert!(h.kv.is_empty());
    assert_eq!(h.notifier.successes(), vec!["Logged out successfully"]);
}

#[tokio::test]
async fn test_reload_profile_keeps_tokens() {
    let h = Harness::new();
    let tokens = TokenPair::new(live("access"), live("refresh"));
    h.session().signed_in(user(), tokens.clone());
    let mut me = user_json();
    me["first_name"] = json!("Augusta");
    me["tenant"] = json!({"id": 3, "name": "Acme", "slug": "acme"});
    h.transport.on(Method::Get, "/auth/me/", 200, me);

    let reloaded = h.controller.reload_profile().await.unwrap();

    assert_eq!(reloaded.first_name, "Augusta");
    assert_eq!(reloaded.tenant_id, Some(3));
    let state = h.controller.state();
    assert_eq!(state.user().map(|u| u.first_name.as_str()), Some("Augusta"));
    assert_eq!(state.tokens(), Some(&tokens));
    h.assert_consistent();
}

#[tokio::test]
async fn test_subscribers_observe_login() {
    let h = Harness::new();
    let mut rx = h.controller.subscribe();
    h.transport.on(
        Method::Post,
        "/auth/login/",
        200,
        json!({"user": user_json(), "tokens": {"access": "A1", "refresh": "R1"}}),
    );

    h.controller.login("a@b.com", "x").await.unwrap();

    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().is_authenticated());
}
