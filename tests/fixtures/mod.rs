//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Each test binary uses a subset of the fixtures

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use termfolio::contact::{ContactForm, OutboundMessage, Transport};
use termfolio::models::{Category, Project};
use termfolio::notify::NotificationSink;

/// A two-entry catalog: one design project, one development project.
pub fn two_category_catalog() -> Vec<Project> {
    vec![
        Project::new(
            "brand-refresh",
            "Brand Refresh",
            "Visual identity exploration",
            Category::Design,
            "https://example.com/brand.jpg",
        )
        .with_document_url("https://example.com/brand-case-study")
        .with_design_tool_url("https://www.figma.com/design/brand-refresh"),
        Project::new(
            "inventory-service",
            "Inventory Service",
            "Warehouse stock API",
            Category::Development,
            "https://example.com/inventory.jpg",
        )
        .with_source_url("https://github.com/example/inventory-service")
        .featured(),
    ]
}

/// Notification sink that records every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

impl NotificationSink for RecordingSink {
    fn notify_success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn notify_failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

/// Transport that always reports an outage.
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn deliver(&self, _message: &OutboundMessage) -> Result<()> {
        Err(anyhow!("simulated outage"))
    }
}

/// Transport that records every message it delivers.
#[derive(Default)]
pub struct CapturingTransport {
    pub seen: Mutex<Vec<OutboundMessage>>,
}

impl Transport for CapturingTransport {
    fn deliver(&self, message: &OutboundMessage) -> Result<()> {
        self.seen.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Polls the form until the in-flight attempt resolves or a second passes.
pub fn settle(form: &mut ContactForm, sink: &mut RecordingSink) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while form.is_pending() {
        if form.poll(sink) {
            return;
        }
        assert!(Instant::now() < deadline, "submission never resolved");
        thread::sleep(Duration::from_millis(1));
    }
}
