//! Contact-form state and submission lifecycle.
//!
//! A submission runs on a background thread and reports back over a message
//! channel; the event loop polls for the outcome. The transport is injected
//! so the simulated round trip can be replaced in tests with an instant or
//! failing one.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::notify::NotificationSink;

/// Notice shown when a message is delivered.
pub const SUCCESS_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";

/// Notice shown when delivery fails.
pub const FAILURE_NOTICE: &str = "Failed to send message. Please try again.";

/// Length of the simulated network round trip.
pub const SIMULATED_ROUND_TRIP: Duration = Duration::from_secs(2);

/// Submission status of the contact form.
///
/// Success and failure are outcomes of an attempt, not resting states; both
/// return the form to [`SubmissionStatus::Idle`] as soon as they are
/// observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No submission in flight
    #[default]
    Idle,
    /// Exactly one submission in flight
    Pending,
}

/// The four required form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Sender name
    Name,
    /// Sender email address
    Email,
    /// Message subject
    Subject,
    /// Message body
    Message,
}

impl Field {
    /// All fields, in form traversal order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Display label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Placeholder text shown while the field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project or question...",
        }
    }

    /// The next field in traversal order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// The previous field in traversal order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }
}

/// Immutable snapshot of the form captured when a submission is accepted.
///
/// Field edits made while the attempt is in flight cannot reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
    /// When the submission was accepted
    pub sent_at: DateTime<Utc>,
}

/// Outcome message sent from the transport thread back to the form.
#[derive(Debug, Clone)]
enum SubmissionOutcome {
    Delivered,
    Rejected(String),
}

/// Delivery mechanism for an outbound message.
///
/// Runs on a background thread, so implementations may block. The bundled
/// [`SimulatedTransport`] stands in for a real backend integration, which is
/// outside this crate's scope; only the lifecycle contract is implemented.
pub trait Transport: Send + Sync {
    /// Delivers `message`, blocking until the attempt resolves.
    fn deliver(&self, message: &OutboundMessage) -> Result<()>;
}

/// Transport that simulates a network round trip with a fixed delay and then
/// reports success.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    /// Creates a transport with the standard simulated round trip.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: SIMULATED_ROUND_TRIP,
        }
    }

    /// Creates a transport with a custom delay. Tests use a zero delay to
    /// make the lifecycle deterministic and fast.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SimulatedTransport {
    fn deliver(&self, message: &OutboundMessage) -> Result<()> {
        thread::sleep(self.delay);
        tracing::info!(
            subject = %message.subject,
            sent_at = %message.sent_at,
            "Simulated delivery complete"
        );
        Ok(())
    }
}

/// Contact-form state machine.
///
/// Holds the four field values, the submission status, and the receiving end
/// of the in-flight attempt's channel. At most one attempt is ever in
/// flight; [`ContactForm::submit`] enforces that regardless of what the UI
/// does with its send button.
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    status: SubmissionStatus,
    receiver: Option<Receiver<SubmissionOutcome>>,
    transport: Arc<dyn Transport>,
}

impl ContactForm {
    /// Creates an empty form using the simulated transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(SimulatedTransport::new()))
    }

    /// Creates an empty form with an injected transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            status: SubmissionStatus::Idle,
            receiver: None,
            transport,
        }
    }

    /// Current submission status.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether an attempt is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    /// Current value of `field`.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replaces the value of `field`. Has no effect on submission status and
    /// never reaches an attempt already in flight.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Appends a character to `field` (terminal text entry).
    pub fn push_char(&mut self, field: Field, c: char) {
        self.field_mut(field).push(c);
    }

    /// Removes the last character of `field`, if any.
    pub fn pop_char(&mut self, field: Field) {
        self.field_mut(field).pop();
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Fields that are still empty. All four are required; submission is
    /// rejected while any remain.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Attempts to start a submission.
    ///
    /// Returns `true` if the attempt was accepted. Rejected without side
    /// effects (no status change, no notification) when a required field
    /// is empty or another attempt is already pending. On acceptance the
    /// field values are captured into an [`OutboundMessage`], the status
    /// becomes pending, and the transport runs on a background thread until
    /// it resolves; there is no cancellation path.
    pub fn submit(&mut self) -> bool {
        if self.is_pending() {
            tracing::debug!("Ignoring submit while a submission is pending");
            return false;
        }
        if !self.missing_fields().is_empty() {
            return false;
        }

        let outbound = OutboundMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            sent_at: Utc::now(),
        };

        let (sender, receiver) = channel();
        let transport = Arc::clone(&self.transport);

        // Spawn background delivery thread
        thread::spawn(move || {
            let outcome = match transport.deliver(&outbound) {
                Ok(()) => SubmissionOutcome::Delivered,
                Err(e) => SubmissionOutcome::Rejected(format!("{e:#}")),
            };
            // Send fails only when the form was dropped; nothing left to do.
            let _ = sender.send(outcome);
        });

        self.receiver = Some(receiver);
        self.status = SubmissionStatus::Pending;
        true
    }

    /// Polls the in-flight attempt, if any.
    ///
    /// Returns `true` when an outcome was observed this tick. On success all
    /// four fields reset to empty, the status returns to idle, and a success
    /// notice goes to `sink`; on failure the fields are preserved for retry,
    /// the status returns to idle, and a failure notice goes to `sink`.
    pub fn poll(&mut self, sink: &mut dyn NotificationSink) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                // Transport thread died without reporting; treat as failure.
                SubmissionOutcome::Rejected("transport thread exited".to_string())
            }
        };

        self.receiver = None;
        self.status = SubmissionStatus::Idle;

        match outcome {
            SubmissionOutcome::Delivered => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                sink.notify_success(SUCCESS_NOTICE);
            }
            SubmissionOutcome::Rejected(reason) => {
                tracing::warn!("Contact submission failed: {reason}");
                sink.notify_failure(FAILURE_NOTICE);
            }
        }
        true
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;
    use std::time::Instant;

    #[derive(Default)]
    struct RecordingSink {
        successes: Vec<String>,
        failures: Vec<String>,
    }

    impl NotificationSink for RecordingSink {
        fn notify_success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn notify_failure(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn deliver(&self, _message: &OutboundMessage) -> Result<()> {
            Err(anyhow!("simulated outage"))
        }
    }

    /// Records every message it is asked to deliver.
    #[derive(Default)]
    struct CapturingTransport {
        seen: Mutex<Vec<OutboundMessage>>,
    }

    impl Transport for CapturingTransport {
        fn deliver(&self, message: &OutboundMessage) -> Result<()> {
            self.seen.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    fn instant_form() -> ContactForm {
        ContactForm::with_transport(Arc::new(SimulatedTransport::with_delay(Duration::ZERO)))
    }

    fn fill(form: &mut ContactForm) {
        form.update_field(Field::Name, "Ana");
        form.update_field(Field::Email, "a@b.com");
        form.update_field(Field::Subject, "Hi");
        form.update_field(Field::Message, "Hello");
    }

    /// Polls until the in-flight attempt resolves or a second passes.
    fn settle(form: &mut ContactForm, sink: &mut RecordingSink) {
        let deadline = Instant::now() + Duration::from_secs(1);
        while form.is_pending() {
            if form.poll(sink) {
                return;
            }
            assert!(Instant::now() < deadline, "submission never resolved");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_submit_rejected_when_any_field_empty() {
        let mut sink = RecordingSink::default();
        for missing in Field::ALL {
            let mut form = instant_form();
            fill(&mut form);
            form.update_field(missing, "");

            assert!(!form.submit(), "{} empty should reject", missing.label());
            assert_eq!(form.status(), SubmissionStatus::Idle);
            assert_eq!(form.missing_fields(), vec![missing]);
            assert!(!form.poll(&mut sink), "rejected submit starts nothing");
        }
        assert!(sink.successes.is_empty() && sink.failures.is_empty());

        // Blank-only input counts as empty too
        let mut form = instant_form();
        fill(&mut form);
        form.update_field(Field::Subject, "   ");
        assert!(!form.submit());
    }

    #[test]
    fn test_success_resets_fields_and_notifies_once() {
        let mut form = instant_form();
        let mut sink = RecordingSink::default();
        fill(&mut form);

        assert!(form.submit());
        assert_eq!(form.status(), SubmissionStatus::Pending);
        settle(&mut form, &mut sink);

        assert_eq!(form.status(), SubmissionStatus::Idle);
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(sink.successes, vec![SUCCESS_NOTICE.to_string()]);
        assert!(sink.failures.is_empty());
    }

    #[test]
    fn test_failure_preserves_fields_and_notifies_once() {
        let mut form = ContactForm::with_transport(Arc::new(FailingTransport));
        let mut sink = RecordingSink::default();
        fill(&mut form);

        assert!(form.submit());
        settle(&mut form, &mut sink);

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.field(Field::Name), "Ana");
        assert_eq!(form.field(Field::Message), "Hello");
        assert!(sink.successes.is_empty());
        assert_eq!(sink.failures, vec![FAILURE_NOTICE.to_string()]);
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut form = ContactForm::with_transport(Arc::new(SimulatedTransport::with_delay(
            Duration::from_millis(50),
        )));
        let mut sink = RecordingSink::default();
        fill(&mut form);

        assert!(form.submit());
        assert!(!form.submit(), "second submit must be ignored");
        settle(&mut form, &mut sink);

        // Exactly one outcome for exactly one attempt
        assert_eq!(sink.successes.len(), 1);
        assert!(!form.poll(&mut sink), "no second outcome to observe");
    }

    #[test]
    fn test_attempt_captures_fields_at_acceptance() {
        let transport = Arc::new(CapturingTransport::default());
        let mut form = ContactForm::with_transport(transport.clone() as Arc<dyn Transport>);
        let mut sink = RecordingSink::default();
        fill(&mut form);

        assert!(form.submit());
        // Edits while pending reach the record but not the in-flight attempt
        form.update_field(Field::Subject, "Changed mid-flight");
        settle(&mut form, &mut sink);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].subject, "Hi");
        assert_eq!(seen[0].name, "Ana");
    }

    #[test]
    fn test_poll_without_attempt_is_noop() {
        let mut form = instant_form();
        let mut sink = RecordingSink::default();
        assert!(!form.poll(&mut sink));
        assert!(sink.successes.is_empty() && sink.failures.is_empty());
    }

    #[test]
    fn test_field_traversal_wraps() {
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.previous(), Field::Message);
        let mut field = Field::Name;
        for _ in 0..Field::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, Field::Name);
    }

    #[test]
    fn test_char_editing() {
        let mut form = instant_form();
        form.push_char(Field::Name, 'A');
        form.push_char(Field::Name, 'n');
        form.push_char(Field::Name, 'a');
        assert_eq!(form.field(Field::Name), "Ana");
        form.pop_char(Field::Name);
        assert_eq!(form.field(Field::Name), "An");
        // Popping an empty field is harmless
        form.pop_char(Field::Email);
        assert_eq!(form.field(Field::Email), "");
    }
}
