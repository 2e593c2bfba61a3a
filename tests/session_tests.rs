use pretty_assertions::assert_eq;

use income_entry_cli::models::field::{FieldEvent, FieldId, FormFields};
use income_entry_cli::services::calculator::{TotalRender, BLOCKED_TOTAL_MESSAGE};
use income_entry_cli::services::session::{FieldSink, FormSession};

#[derive(Default)]
struct RecordingSink {
    applies: Vec<TotalRender>,
    alerts: Vec<String>,
}

impl FieldSink for RecordingSink {
    fn apply_total(&mut self, render: &TotalRender) {
        self.applies.push(render.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

fn complete_form(subtotal: &str, discount: &str, shipping: &str) -> FormFields {
    FormFields::new()
        .with_field(FieldId::ProductSubtotal, subtotal)
        .with_field(FieldId::Discount, discount)
        .with_field(FieldId::ShippingCost, shipping)
        .with_field(FieldId::Total, "")
}

#[test]
fn test_initialization_computes_immediately() {
    let session = FormSession::initialize(
        complete_form("100", "20", "10"),
        RecordingSink::default(),
    );

    assert!(session.is_live());
    assert_eq!(session.total_text(), Some("90.00"));
    assert_eq!(session.sink().applies.len(), 1);
    assert_eq!(session.sink().applies[0].value, "90.00");
    assert!(session.sink().applies[0].is_positive());
}

#[test]
fn test_every_field_event_triggers_the_same_recompute() {
    let mut session = FormSession::initialize(
        complete_form("100", "20", "10"),
        RecordingSink::default(),
    );

    // The burst a single keystroke can produce.
    session.dispatch(FieldId::Discount, FieldEvent::Input, "30");
    session.dispatch(FieldId::Discount, FieldEvent::Change, "30");
    session.dispatch(FieldId::Discount, FieldEvent::Blur, "30");

    let applies = &session.sink().applies;
    assert_eq!(applies.len(), 4);
    assert_eq!(applies[1].value, "80.00");
    assert_eq!(applies[1], applies[2]);
    assert_eq!(applies[2], applies[3]);
    assert_eq!(session.total_text(), Some("80.00"));
}

#[test]
fn test_missing_field_leaves_the_session_inert() {
    let missing_total = FormFields::new()
        .with_field(FieldId::ProductSubtotal, "100")
        .with_field(FieldId::Discount, "20")
        .with_field(FieldId::ShippingCost, "10");
    let mut session = FormSession::initialize(missing_total, RecordingSink::default());

    assert!(!session.is_live());
    assert_eq!(session.sink().applies.len(), 0);

    // Events on present fields are stored but never recompute anything.
    session.dispatch(FieldId::ProductSubtotal, FieldEvent::Change, "500");
    assert_eq!(session.sink().applies.len(), 0);

    // Events on the unregistered field are plain no-ops.
    session.dispatch(FieldId::Total, FieldEvent::Change, "99");
    assert_eq!(session.total_text(), None);

    // No total field, no guard: submission proceeds.
    assert!(session.submit());
    assert_eq!(session.sink().alerts.len(), 0);
}

#[test]
fn test_submit_allows_a_positive_total() {
    let mut session = FormSession::initialize(
        complete_form("100", "20", "10"),
        RecordingSink::default(),
    );

    assert!(session.submit());
    assert_eq!(session.sink().alerts.len(), 0);
}

#[test]
fn test_submit_blocks_a_non_positive_total_with_the_alert() {
    let mut session =
        FormSession::initialize(complete_form("10", "15", "0"), RecordingSink::default());

    assert_eq!(session.total_text(), Some("-5.00"));
    assert!(!session.submit());
    assert_eq!(session.sink().alerts, vec![BLOCKED_TOTAL_MESSAGE.to_string()]);
}

#[test]
fn test_blank_form_starts_blocked() {
    let mut session = FormSession::initialize(complete_form("", "", ""), RecordingSink::default());

    assert_eq!(session.total_text(), Some("0.00"));
    assert!(!session.submit());
    assert_eq!(session.sink().alerts.len(), 1);
}

#[test]
fn test_manual_total_edit_wins_at_submit_time() {
    let mut session = FormSession::initialize(
        complete_form("100", "20", "10"),
        RecordingSink::default(),
    );
    assert_eq!(session.total_text(), Some("90.00"));

    // Editing the total never recomputes; the guard reads the edited text.
    session.dispatch(FieldId::Total, FieldEvent::Change, "-1");
    assert_eq!(session.sink().applies.len(), 1);
    assert_eq!(session.total_text(), Some("-1"));

    assert!(!session.submit());
    assert_eq!(session.sink().alerts, vec![BLOCKED_TOTAL_MESSAGE.to_string()]);

    // And the other way: a manual positive edit over a blocked total passes.
    session.dispatch(FieldId::Total, FieldEvent::Change, "12.00");
    assert!(session.submit());
}

#[test]
fn test_without_a_form_submission_is_never_gated() {
    let mut session =
        FormSession::without_form(complete_form("10", "15", "0"), RecordingSink::default());

    // The calculator still renders; only the guard is absent.
    assert_eq!(session.total_text(), Some("-5.00"));
    assert!(session.submit());
    assert_eq!(session.sink().alerts.len(), 0);
}
