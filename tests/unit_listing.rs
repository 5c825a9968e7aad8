// Unit tests for Reddit listing deserialization.
//
// Tests serde parsing of modqueue listings, report arrays and the
// conversion into queue items, all without network access.

use queuekeeper::queue::models::{QueueItem, Report};
use queuekeeper::reddit::client::RemovalReasonPayload;
use queuekeeper::reddit::listing::{Listing, RawReport};

fn listing(json: &str) -> Listing {
    serde_json::from_str(json).unwrap()
}

#[test]
fn deserialize_empty_listing() {
    let page = listing(r#"{"kind": "Listing", "data": {"after": null, "children": []}}"#)
        .into_page()
        .unwrap();
    assert!(page.items.is_empty());
    assert!(page.after.is_none());
}

#[test]
fn deserialize_mixed_listing() {
    let json = r#"{
        "kind": "Listing",
        "data": {
            "after": "t1_c2",
            "children": [
                {"kind": "t3", "data": {
                    "id": "p1", "name": "t3_p1", "created_utc": 1700000000.0,
                    "score": 12, "num_reports": 2,
                    "user_reports": [["Spam", 1, false, false], ["Off topic", 1, false, false]],
                    "user_reports_dismissed": [["Spam", 1, false, false]],
                    "upvote_ratio": 0.42, "title": "ignored"
                }},
                {"kind": "t1", "data": {
                    "id": "c2", "name": "t1_c2", "created_utc": 1700000100,
                    "body": "found it at https://a.co/d/abc"
                }}
            ]
        }
    }"#;

    let page = listing(json).into_page().unwrap();
    assert_eq!(page.after.as_deref(), Some("t1_c2"));
    assert_eq!(page.items.len(), 2);

    match &page.items[0] {
        QueueItem::Submission(s) => {
            assert_eq!(s.id, "p1");
            assert_eq!(s.fullname, "t3_p1");
            assert_eq!(s.score, 12);
            assert_eq!(s.num_reports, 2);
            assert_eq!(s.user_reports.len(), 2);
            assert_eq!(s.user_reports_dismissed.as_ref().map(Vec::len), Some(1));
            assert_eq!(s.effective_report_count(), 3);
            assert!((s.upvote_ratio - 0.42).abs() < 1e-9);
            assert_eq!(s.created_at.timestamp(), 1_700_000_000);
        }
        other => panic!("expected submission, got {other:?}"),
    }

    match &page.items[1] {
        QueueItem::Comment(c) => {
            assert_eq!(c.fullname, "t1_c2");
            assert!(c.body.contains("https://a.co/"));
        }
        other => panic!("expected comment, got {other:?}"),
    }
}

#[test]
fn missing_dismissed_reports_stays_absent() {
    let json = r#"{"data": {"after": null, "children": [
        {"kind": "t3", "data": {
            "id": "p1", "name": "t3_p1", "created_utc": 1700000000.0,
            "score": 0, "num_reports": 1, "user_reports": [["Spam", 1]],
            "upvote_ratio": 0.3
        }}
    ]}}"#;

    let page = listing(json).into_page().unwrap();
    let QueueItem::Submission(s) = &page.items[0] else {
        panic!("expected submission");
    };
    assert!(s.user_reports_dismissed.is_none());
    assert_eq!(s.effective_report_count(), 1);
}

#[test]
fn null_num_reports_defaults_to_zero() {
    let json = r#"{"data": {"after": null, "children": [
        {"kind": "t3", "data": {
            "id": "p1", "name": "t3_p1", "created_utc": 1700000000.0,
            "score": 3, "num_reports": null, "upvote_ratio": 1.0
        }}
    ]}}"#;

    let page = listing(json).into_page().unwrap();
    let QueueItem::Submission(s) = &page.items[0] else {
        panic!("expected submission");
    };
    assert_eq!(s.num_reports, 0);
    assert!(s.user_reports.is_empty());
}

#[test]
fn unknown_kinds_are_skipped() {
    let json = r#"{"data": {"after": null, "children": [
        {"kind": "t5", "data": {"id": "sub", "display_name": "synthesizers"}},
        {"kind": "t1", "data": {"id": "c1", "name": "t1_c1", "created_utc": 1700000000.0, "body": "hi"}}
    ]}}"#;

    let page = listing(json).into_page().unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id(), "c1");
}

#[test]
fn malformed_link_is_an_error() {
    // score missing
    let json = r#"{"data": {"after": null, "children": [
        {"kind": "t3", "data": {"id": "p1", "name": "t3_p1", "created_utc": 1700000000.0}}
    ]}}"#;
    assert!(listing(json).into_page().is_err());
}

#[test]
fn report_without_reason() {
    let raw: RawReport = serde_json::from_str(r#"[null, 2, false]"#).unwrap();
    assert_eq!(
        Report::from(raw),
        Report {
            reason: None,
            count: 2
        }
    );
}

#[test]
fn report_with_only_reason_defaults_count() {
    let raw: RawReport = serde_json::from_str(r#"["Spam"]"#).unwrap();
    assert_eq!(
        Report::from(raw),
        Report {
            reason: Some("Spam".to_string()),
            count: 1
        }
    );
}

#[test]
fn removal_reason_payload_shape() {
    let payload = RemovalReasonPayload {
        item_ids: vec!["t3_p1"],
        mod_note: "Autoremoved due to user reports and low upvote ratio.",
        reason_id: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["item_ids"][0], "t3_p1");
    assert_eq!(
        value["mod_note"],
        "Autoremoved due to user reports and low upvote ratio."
    );
    assert!(value["reason_id"].is_null());
}
