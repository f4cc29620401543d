//! Common test utilities
//!
//! Shared by the handler integration tests: a wiremock server standing in for
//! the Telegram Bot API, and JSON fixtures for incoming updates.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use hangeulbot::HandlerDeps;
use hangeulcore::{ContentStore, Links, Router};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const USER_ID: u64 = 123456789;
pub const CHAT_ID: i64 = 123456789;
pub const ADMIN_ID: i64 = 555000555;

pub const TOPIK1_LINK: &str = "https://t.me/topik1_test";
pub const TOPIK2_LINK: &str = "https://t.me/topik2_test";
pub const PREMIUM_LINK: &str = "https://t.me/+premium_test";

/// Mock Bot API plus a bot pointed at it
pub struct TelegramMock {
    pub server: MockServer,
    pub bot: Bot,
}

impl TelegramMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let bot = Bot::new("test_token_12345:ABCDEF").set_api_url(server.uri().parse().unwrap());
        Self { server, bot }
    }

    /// Mock an API method with a fixed JSON response
    pub async fn mock(&self, api_method: &str, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot[^/]+/{}$", api_method)))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Mock an API method failing with HTTP 400. Mount before
    /// `mock_all_telegram_api` so it takes precedence.
    pub async fn mock_error(&self, api_method: &str, description: &str) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot[^/]+/{}$", api_method)))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": description
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock every method the handlers use with successful responses
    pub async fn mock_all_telegram_api(&self) {
        let sent = bot_message(serde_json::json!({ "text": "Response" }));
        self.mock("sendMessage", ok(sent.clone())).await;
        self.mock("editMessageText", ok(sent)).await;
        self.mock("answerCallbackQuery", ok(serde_json::json!(true))).await;
        self.mock("deleteMessage", ok(serde_json::json!(true))).await;
        self.mock("setMyCommands", ok(serde_json::json!(true))).await;
        self.mock(
            "sendPhoto",
            ok(bot_message(serde_json::json!({
                "photo": [{ "file_id": "photo_id", "file_unique_id": "uid", "width": 100, "height": 100 }]
            }))),
        )
        .await;
    }

    /// All requests received so far, in order
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Names of the API methods called, in order, as `sendMessage`
    pub async fn calls(&self) -> Vec<String> {
        self.requests().await.iter().map(method_name).collect()
    }

    /// JSON bodies of all calls to one API method, in order
    pub async fn bodies(&self, api_method: &str) -> Vec<serde_json::Value> {
        self.requests()
            .await
            .iter()
            .filter(|r| method_name(r).eq_ignore_ascii_case(api_method))
            .map(|r| serde_json::from_slice(&r.body).expect("Body should be valid JSON"))
            .collect()
    }

    /// Raw bodies of all calls to one API method (multipart uploads are not JSON)
    pub async fn raw_bodies(&self, api_method: &str) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .filter(|r| method_name(r).eq_ignore_ascii_case(api_method))
            .map(|r| String::from_utf8_lossy(&r.body).to_string())
            .collect()
    }
}

/// Bot API method of a request in lower camel case. teloxide sends
/// `SendMessage`, the docs spell it `sendMessage`.
fn method_name(request: &Request) -> String {
    let name = request.url.path().rsplit('/').next().unwrap_or_default();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub fn ok(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "ok": true, "result": result })
}

fn bot_message(extra: serde_json::Value) -> serde_json::Value {
    let mut json = serde_json::json!({
        "message_id": 42,
        "from": { "id": 987654321, "is_bot": true, "first_name": "HangeulBot" },
        "chat": { "id": CHAT_ID, "type": "private" },
        "date": 1735992000
    });
    merge(&mut json, extra);
    json
}

fn merge(target: &mut serde_json::Value, extra: serde_json::Value) {
    if let (Some(obj), serde_json::Value::Object(extra)) = (target.as_object_mut(), extra) {
        obj.extend(extra);
    }
}

/// Router with the built-in content and test links
pub fn deps(admin: i64) -> HandlerDeps {
    let store = Arc::new(ContentStore::builtin().expect("embedded content must be valid"));
    let links = Links {
        topik1: TOPIK1_LINK.to_string(),
        topik2: TOPIK2_LINK.to_string(),
        premium_group: PREMIUM_LINK.to_string(),
    };
    HandlerDeps::new(Arc::new(Router::new(store, links)), ChatId(admin))
}

/// An incoming user message; `extra` supplies `text`, `photo`, `caption`...
pub fn user_message(extra: serde_json::Value) -> Message {
    let mut json = serde_json::json!({
        "message_id": 1,
        "date": 1735992000,
        "chat": { "id": CHAT_ID, "type": "private", "first_name": "Test", "username": "testuser" },
        "from": {
            "id": USER_ID,
            "is_bot": false,
            "first_name": "Test",
            "last_name": "User",
            "username": "testuser",
            "language_code": "uz"
        }
    });
    merge(&mut json, extra);
    serde_json::from_value(json).expect("Failed to deserialize message")
}

pub fn text_message(text: &str) -> Message {
    user_message(serde_json::json!({ "text": text }))
}

pub fn photo_message(caption: Option<&str>) -> Message {
    let mut extra = serde_json::json!({
        "photo": [
            { "file_id": "check_small", "file_unique_id": "s1", "width": 90, "height": 90 },
            { "file_id": "check_large", "file_unique_id": "l1", "width": 1280, "height": 960 }
        ]
    });
    if let Some(caption) = caption {
        merge(&mut extra, serde_json::json!({ "caption": caption }));
    }
    user_message(extra)
}

/// A button press on bot message 42
pub fn callback(data: &str) -> CallbackQuery {
    let json = serde_json::json!({
        "id": "callback_123",
        "from": { "id": USER_ID, "is_bot": false, "first_name": "Test", "username": "testuser" },
        "message": {
            "message_id": 42,
            "date": 1735992000,
            "chat": { "id": CHAT_ID, "type": "private", "first_name": "Test", "username": "testuser" },
            "from": { "id": 987654321, "is_bot": true, "first_name": "HangeulBot", "username": "hangeul_bot" },
            "text": "Original message"
        },
        "chat_instance": "chat_instance_123",
        "data": data
    });
    serde_json::from_value(json).expect("Failed to deserialize callback")
}

/// A button press on a message Telegram reports as inaccessible (`date` 0)
pub fn inaccessible_callback(data: &str) -> CallbackQuery {
    let json = serde_json::json!({
        "id": "callback_456",
        "from": { "id": USER_ID, "is_bot": false, "first_name": "Test", "username": "testuser" },
        "message": {
            "message_id": 42,
            "date": 0,
            "chat": { "id": CHAT_ID, "type": "private", "first_name": "Test", "username": "testuser" }
        },
        "chat_instance": "chat_instance_123",
        "data": data
    });
    serde_json::from_value(json).expect("Failed to deserialize callback")
}
