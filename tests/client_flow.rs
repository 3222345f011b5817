//! End-to-end client flows through the public API, driven by a scripted
//! transport so no network is involved.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vouch::api::{ApiResponse, ApiTransport, Gateway, Method, Session};
use vouch::app::{handle_event, Action, AppState, Event};
use vouch::domain::{Result, Route};
use vouch::storage::{JsonTokenStore, TokenStore};

/// Records every call and replies from a queue, one response per call.
struct Exchange {
    responses: Mutex<VecDeque<ApiResponse>>,
    calls: Mutex<Vec<(Method, String, Vec<(String, String)>)>>,
}

impl Exchange {
    fn scripted(responses: &[(u16, &str)]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(
                responses
                    .iter()
                    .map(|(status, body)| ApiResponse {
                        status: *status,
                        body: (*body).to_string(),
                    })
                    .collect(),
            ),
            calls: Mutex::new(vec![]),
        })
    }

    fn calls(&self) -> Vec<(Method, String, Vec<(String, String)>)> {
        self.calls.lock().expect("lock").clone()
    }
}

struct FakeTransport(Arc<Exchange>);

impl ApiTransport for FakeTransport {
    fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        _body: Option<&str>,
    ) -> Result<ApiResponse> {
        self.0
            .calls
            .lock()
            .expect("lock")
            .push((method, url.to_string(), headers.to_vec()));
        Ok(self
            .0
            .responses
            .lock()
            .expect("lock")
            .pop_front()
            .expect("unexpected extra call"))
    }
}

fn client(
    dir: &tempfile::TempDir,
    responses: &[(u16, &str)],
) -> (AppState, Gateway, Arc<Exchange>) {
    let store = JsonTokenStore::new(dir.path().join("token.json")).expect("store");
    let session = Session::load(Box::new(store)).expect("session");
    let exchange = Exchange::scripted(responses);
    let gateway = Gateway::new(
        Box::new(FakeTransport(Arc::clone(&exchange))),
        "http://api.test",
        session,
    )
    .expect("gateway");
    (AppState::new(Duration::from_secs(5)), gateway, exchange)
}

#[test]
fn login_then_search_carries_the_bearer_token() {
    let dir = tempfile::tempdir().expect("tempdir");
    let search_body =
        r#"{"query": "asha", "count": 1, "suggest_add_person": false,
            "persons": [{"id": "p1", "name": "Asha", "average_rating": 4.5, "review_count": 3}]}"#;
    let (mut state, mut gateway, exchange) = client(
        &dir,
        &[(200, r#"{"access_token": "tok-e2e"}"#), (200, search_body)],
    );

    handle_event(
        &mut state,
        &mut gateway,
        &Event::SubmitLogin {
            username: "asha".to_string(),
            password: "pw".to_string(),
        },
    )
    .expect("login");

    let actions = handle_event(
        &mut state,
        &mut gateway,
        &Event::SubmitSearch { query: "asha".to_string() },
    )
    .expect("search");

    let calls = exchange.calls();
    assert_eq!(calls[0].1, "http://api.test/api/auth/login");
    assert_eq!(calls[1].1, "http://api.test/api/persons/search?q=asha");
    assert!(calls[1]
        .2
        .contains(&("Authorization".to_string(), "Bearer tok-e2e".to_string())));

    match &actions[..] {
        [Action::Display(markup)] => {
            assert!(markup.contains("Asha"));
            assert!(markup.contains("(3 reviews)"));
        }
        other => panic!("expected one display action, got {other:?}"),
    }
}

#[test]
fn token_survives_a_fresh_client_like_a_page_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let (mut state, mut gateway, _) =
            client(&dir, &[(200, r#"{"access_token": "tok-stay"}"#)]);
        handle_event(
            &mut state,
            &mut gateway,
            &Event::SubmitLogin {
                username: "asha".to_string(),
                password: "pw".to_string(),
            },
        )
        .expect("login");
    }

    // Fresh state and gateway against the same token file.
    let (_, gateway, _) = client(&dir, &[]);
    assert_eq!(gateway.session().token(), Some("tok-stay"));
}

#[test]
fn rejected_session_clears_the_token_and_forces_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut store = JsonTokenStore::new(dir.path().join("token.json")).expect("store");
        store.save("stale").expect("save");
    }

    let (mut state, mut gateway, _) = client(&dir, &[(401, r#"{"detail": "expired"}"#)]);
    assert!(gateway.session().is_authenticated());

    let actions = handle_event(
        &mut state,
        &mut gateway,
        &Event::SubmitSearch { query: "asha".to_string() },
    )
    .expect("search");

    assert_eq!(actions, vec![Action::Navigate(Route::Login)]);
    assert!(!gateway.session().is_authenticated());

    let store = JsonTokenStore::new(dir.path().join("token.json")).expect("store");
    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn empty_suggest_add_search_prompts_with_the_query() {
    let dir = tempfile::tempdir().expect("tempdir");
    let body = r#"{"query": "someone new", "count": 0, "persons": [], "suggest_add_person": true}"#;
    let (mut state, mut gateway, _) = client(&dir, &[(200, body)]);

    let actions = handle_event(
        &mut state,
        &mut gateway,
        &Event::SubmitSearch { query: "someone new".to_string() },
    )
    .expect("search");

    match &actions[..] {
        [Action::Display(markup)] => {
            assert!(markup.contains("\"someone new\""), "{markup}");
            assert!(markup.contains("add"), "{markup}");
        }
        other => panic!("expected one display action, got {other:?}"),
    }
}
