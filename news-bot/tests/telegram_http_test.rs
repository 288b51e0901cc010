//! End-to-end poll cycles over HTTP: the real BeeKuaiBao client and teloxide adapter talk to a
//! mockito server standing in for both the feed and the Telegram Bot API.
//!
//! teloxide posts to `/bot<token>/<Method>` with the method name in PascalCase (`SendMessage`);
//! the server URL is injected as TELEGRAM_API_URL via [`BaseConfig::telegram_api_url`].

mod common;

use std::time::Duration;

use chrono::Utc;
use common::init_tracing;
use mockito::Matcher;
use news_bot::{build_components, build_scheduler, BaseConfig, BotConfig, PollConfig};
use news_feed::FeedSettings;
use newsbot_core::ChannelTarget;
use serde_json::json;

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";
const FEED_PATH: &str = "/homepage/pcApi/news/list";

const SENT_MESSAGE_BODY: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 1,
        "date": 1706529600,
        "chat": {"id": 123, "type": "private"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
        "text": "news"
    }
}"#;

fn test_config(server: &mockito::ServerGuard) -> BotConfig {
    BotConfig {
        base: BaseConfig {
            bot_token: TEST_BOT_TOKEN.to_string(),
            telegram_api_url: Some(server.url()),
            log_file: "logs/news-bot-test.log".to_string(),
        },
        poll: PollConfig::new(ChannelTarget::Username("@bee_news".to_string()), 300),
        feed: FeedSettings {
            url: format!("{}{}", server.url(), FEED_PATH),
            page_size: 20,
            timeout: Duration::from_secs(5),
        },
    }
}

async fn register_feed(server: &mut mockito::ServerGuard, hits: usize) -> mockito::Mock {
    let now = Utc::now().timestamp_millis();
    let body = json!({
        "data": [
            {"id": 2, "title": "Second", "content": "b.", "publishTime": now - 1_000},
            {"id": 1, "title": "First", "content": "a!", "publishTime": now - 2_000}
        ]
    });
    server
        .mock("GET", FEED_PATH)
        .match_query(Matcher::UrlEncoded("pageSize".into(), "20".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

fn send_message_path() -> String {
    format!("/bot{}/SendMessage", TEST_BOT_TOKEN)
}

/// **Test: Both items are posted to @bee_news as MarkdownV2; a second cycle posts nothing.**
#[tokio::test]
async fn test_cycle_posts_to_channel() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let feed_mock = register_feed(&mut server, 2).await;
    let send_mock = server
        .mock("POST", send_message_path().as_str())
        .match_body(Matcher::PartialJson(json!({
            "chat_id": "@bee_news",
            "parse_mode": "MarkdownV2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE_BODY)
        .expect(2)
        .create_async()
        .await;

    let config = test_config(&server);
    let components = build_components(&config).unwrap();
    let mut scheduler = build_scheduler(&config.poll, components.feed, components.bot);

    let first = scheduler.run_cycle().await;
    let second = scheduler.run_cycle().await;

    assert_eq!(first.delivered, 2);
    assert_eq!(first.failed, 0);
    assert_eq!(second.delivered, 0);
    assert_eq!(second.unseen, 0);
    send_mock.assert_async().await;
    feed_mock.assert_async().await;
}

/// **Test: A 403 Forbidden is classified Unauthorized and not retried.**
#[tokio::test]
async fn test_forbidden_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let _feed_mock = register_feed(&mut server, 1).await;
    let send_mock = server
        .mock("POST", send_message_path().as_str())
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok": false, "error_code": 403, "description": "Forbidden: bot is not a member of the channel chat"}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let config = test_config(&server);
    let components = build_components(&config).unwrap();
    let mut scheduler = build_scheduler(&config.poll, components.feed, components.bot);

    let report = scheduler.run_cycle().await;

    // one attempt per item, no retries
    assert_eq!(report.failed, 2);
    assert_eq!(report.delivered, 0);
    send_mock.assert_async().await;
}

/// **Test: A migration response moves delivery to the new chat id.**
#[tokio::test]
async fn test_migration_resends_to_new_chat_id() {
    let mut server = mockito::Server::new_async().await;
    let _feed_mock = register_feed(&mut server, 1).await;
    let migrated_mock = server
        .mock("POST", send_message_path().as_str())
        .match_body(Matcher::PartialJson(json!({"chat_id": "@bee_news"})))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: group chat was upgraded to a supergroup chat", "parameters": {"migrate_to_chat_id": -1001234567890}}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let new_id_mock = server
        .mock("POST", send_message_path().as_str())
        .match_body(Matcher::PartialJson(json!({"chat_id": -1001234567890i64})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE_BODY)
        .expect(2)
        .create_async()
        .await;

    let config = test_config(&server);
    let components = build_components(&config).unwrap();
    let mut scheduler = build_scheduler(&config.poll, components.feed, components.bot);

    let report = scheduler.run_cycle().await;

    assert_eq!(report.delivered, 2);
    assert_eq!(
        scheduler.pipeline().deliverer().target(),
        &ChannelTarget::Id(-1001234567890)
    );
    migrated_mock.assert_async().await;
    new_id_mock.assert_async().await;
}
