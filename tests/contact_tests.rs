//! End-to-end tests for the contact submission lifecycle.

mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use fixtures::{settle, CapturingTransport, FailingTransport, RecordingSink};
use termfolio::contact::{
    ContactForm, Field, SimulatedTransport, SubmissionStatus, FAILURE_NOTICE, SUCCESS_NOTICE,
};

fn filled_form(transport: Arc<dyn termfolio::contact::Transport>) -> ContactForm {
    let mut form = ContactForm::with_transport(transport);
    form.update_field(Field::Name, "Ana");
    form.update_field(Field::Email, "a@b.com");
    form.update_field(Field::Subject, "Hi");
    form.update_field(Field::Message, "Hello");
    form
}

#[test]
fn test_successful_submission_returns_to_idle_and_clears_fields() {
    let mut form = filled_form(Arc::new(SimulatedTransport::with_delay(Duration::ZERO)));
    let mut sink = RecordingSink::default();

    assert!(form.submit());
    assert_eq!(form.status(), SubmissionStatus::Pending);
    settle(&mut form, &mut sink);

    assert_eq!(form.status(), SubmissionStatus::Idle);
    for field in Field::ALL {
        assert_eq!(form.field(field), "", "{} should be cleared", field.label());
    }
    assert_eq!(sink.successes, vec![SUCCESS_NOTICE.to_string()]);
    assert!(sink.failures.is_empty());
}

#[test]
fn test_failed_submission_preserves_fields_for_retry() {
    let mut form = filled_form(Arc::new(FailingTransport));
    let mut sink = RecordingSink::default();

    assert!(form.submit());
    settle(&mut form, &mut sink);

    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.field(Field::Name), "Ana");
    assert_eq!(form.field(Field::Email), "a@b.com");
    assert_eq!(form.field(Field::Subject), "Hi");
    assert_eq!(form.field(Field::Message), "Hello");
    assert_eq!(sink.failures, vec![FAILURE_NOTICE.to_string()]);

    // Retry succeeds without retyping anything
    let mut retry = filled_form(Arc::new(SimulatedTransport::with_delay(Duration::ZERO)));
    assert!(retry.submit());
    settle(&mut retry, &mut sink);
    assert_eq!(sink.successes.len(), 1);
}

#[test]
fn test_empty_field_blocks_submission_without_notification() {
    let mut sink = RecordingSink::default();
    for missing in Field::ALL {
        let mut form = filled_form(Arc::new(SimulatedTransport::with_delay(Duration::ZERO)));
        form.update_field(missing, "");

        assert!(!form.submit());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.poll(&mut sink));
    }
    assert!(sink.successes.is_empty());
    assert!(sink.failures.is_empty());
}

#[test]
fn test_at_most_one_attempt_in_flight() {
    let mut form = filled_form(Arc::new(SimulatedTransport::with_delay(
        Duration::from_millis(50),
    )));
    let mut sink = RecordingSink::default();

    assert!(form.submit());
    assert!(!form.submit());
    assert!(!form.submit());
    settle(&mut form, &mut sink);

    assert_eq!(sink.successes.len(), 1, "one attempt, one notification");
    assert!(!form.poll(&mut sink), "nothing further to observe");
}

#[test]
fn test_in_flight_attempt_ignores_later_edits() {
    let transport = Arc::new(CapturingTransport::default());
    let mut form = filled_form(transport.clone() as Arc<dyn termfolio::contact::Transport>);
    let mut sink = RecordingSink::default();

    assert!(form.submit());
    form.update_field(Field::Message, "Edited while sending");
    settle(&mut form, &mut sink);

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, "Hello");
    assert_eq!(seen[0].email, "a@b.com");
}
