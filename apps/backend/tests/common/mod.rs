//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router over an in-memory SQLite store
//! - A settable clock for moving between days
//! - A recording push sender standing in for FCM

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Duration, Local, TimeZone};
use daily_core::{Clock, DailyEngine, RandomPicker};

use daily_note_backend::config::Config;
use daily_note_backend::db::SqliteStore;
use daily_note_backend::router;
use daily_note_backend::services::push::{PushError, PushMessage, PushSender};
use daily_note_backend::AppState;

/// Cron secret configured for every test context.
pub const CRON_SECRET: &str = "test-cron-secret";

/// Clock that tests can move forward.
pub struct TestClock {
    now: Mutex<DateTime<Local>>,
}

impl TestClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.lock().unwrap();
        *now = *now + Duration::days(days);
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}

/// Push sender that records messages instead of delivering them.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<PushMessage>>,
    fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for RecordingSender {
    async fn send(&self, message: &PushMessage) -> Result<String, PushError> {
        if self.fail {
            return Err(PushError::Rejected {
                status: 400,
                body: "invalid registration token".to_string(),
            });
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(format!("projects/test/messages/{}", sent.len()))
    }
}

/// Local noon on the given date.
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid local time")
}

/// Test context holding the router and its collaborators.
pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<TestClock>,
    pub push: Arc<RecordingSender>,
    app: Router,
}

impl TestContext {
    /// Context frozen at local noon on 2025-03-01.
    pub fn new() -> Self {
        Self::at(noon(2025, 3, 1))
    }

    pub fn at(now: DateTime<Local>) -> Self {
        Self::build(now, RecordingSender::default(), test_config())
    }

    pub fn with_sender(sender: RecordingSender) -> Self {
        Self::build(noon(2025, 3, 1), sender, test_config())
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(noon(2025, 3, 1), RecordingSender::default(), config)
    }

    fn build(now: DateTime<Local>, sender: RecordingSender, config: Config) -> Self {
        let store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
        let engine = DailyEngine::new(store, RandomPicker::seeded(42));

        let clock = Arc::new(TestClock::new(now));
        let push = Arc::new(sender);
        let state = AppState::new(engine, push.clone(), clock.clone(), config);
        let app = router(state.clone());

        Self {
            state,
            clock,
            push,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

pub fn test_config() -> Config {
    Config {
        cron_secret: Some(CRON_SECRET.to_string()),
        ..Config::default()
    }
}
