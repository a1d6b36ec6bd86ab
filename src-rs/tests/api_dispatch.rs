use std::net::TcpListener;
use std::sync::Arc;

use lab_console_rs::actions::{register_builtins, ActionHandler, ActionRegistry, ActionSchema};
use lab_console_rs::api::server::AppServer;
use lab_console_rs::{
    ActionError, ActionResult, DispatchError, Dispatcher, Page, ServerConfig,
};

fn spawn_server() -> String {
    let registry = Arc::new(ActionRegistry::new());
    register_builtins(&registry).unwrap();
    spawn_with(registry)
}

fn spawn_with(registry: Arc<ActionRegistry>) -> String {
    let server = AppServer::new(ServerConfig::default(), registry);

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.serve_listener(listener).await;
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn listing_action_renders_into_out_and_log() {
    let base = spawn_server();
    let page = Arc::new(Page::new());
    page.src.set_text("1 2 0xff");
    let dispatcher = Dispatcher::new(&base, page.clone());

    let rendered = dispatcher.act("memi").await.unwrap();

    assert_eq!(
        page.out.text(),
        "[0x0|0]: 0x00000001\n[0x1|1]: 0x00000002\n[0x2|2]: 0x000000FF"
    );
    assert_eq!(page.log.text(), "3 words");
    assert_eq!(rendered.out, page.out.text());
}

#[tokio::test]
async fn error_bodies_render_as_empty_fields() {
    let base = spawn_server();
    let page = Arc::new(Page::new());
    page.out.set_text("stale");
    page.log.set_text("stale");
    page.src.set_text("1 999");
    let dispatcher = Dispatcher::new(&base, page.clone());

    // 400 with {"err", "status", "errors"}: no out/listing/log keys.
    dispatcher.act("memd").await.unwrap();
    assert_eq!(page.out.text(), "");
    assert_eq!(page.log.text(), "");

    page.out.set_text("stale");
    dispatcher.act("translate").await.unwrap();
    assert_eq!(page.out.text(), "");
}

#[tokio::test]
async fn actions_and_health_are_served() {
    let base = spawn_server();
    let dispatcher = Dispatcher::new(&base, Arc::new(Page::new()));

    let names: Vec<String> = dispatcher
        .list_actions()
        .await
        .unwrap()
        .into_iter()
        .map(|schema| schema.name)
        .collect();
    assert_eq!(names, vec!["asm", "memd", "memi"]);

    let health: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["name"], "lab-console");
}

#[tokio::test]
async fn bad_input_reports_each_token() {
    let base = spawn_server();
    let resp = reqwest::Client::new()
        .post(format!("{}/api/memi", base))
        .header("content-type", "text/plain")
        .body("1 x y")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["err"], "Parsing Error");
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn unreachable_server_fails_without_touching_fields() {
    // Bind then drop to get a port with nothing listening.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let page = Arc::new(Page::new());
    page.out.set_text("before");
    let dispatcher = Dispatcher::new(&format!("http://{}", addr), page.clone());

    let err = dispatcher.act("asm").await.unwrap_err();
    assert!(matches!(err, DispatchError::Transport(_)));
    assert_eq!(page.out.text(), "before");
}

#[tokio::test]
async fn panicking_action_is_an_internal_error() {
    let registry = Arc::new(ActionRegistry::new());
    register_builtins(&registry).unwrap();
    let boom: ActionHandler =
        Arc::new(|_: &str| -> Result<ActionResult, ActionError> { panic!("boom") });
    registry
        .register(
            "boom",
            boom,
            ActionSchema {
                name: "boom".to_string(),
                description: String::new(),
            },
        )
        .unwrap();
    let base = spawn_with(registry);
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .post(format!("{}/api/boom", base))
            .header("content-type", "text/plain")
            .body("x")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 500);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["err"], "internal server");
        assert_eq!(body["status"], 500);
    }

    // The registry is still usable after the panics.
    let page = Arc::new(Page::new());
    page.src.set_text("7");
    Dispatcher::new(&base, page.clone()).act("memi").await.unwrap();
    assert_eq!(page.out.text(), "[0x0|0]: 0x00000007");
}
