// Engine operations emit start/end and end_error events

mod common;

use common::*;
use ontologyops_core::logging_facility::init_test_capture;

#[test]
fn test_operations_are_bracketed_by_events() {
    let capture = init_test_capture();
    let (_dir, _config, mut graph) = open_shop();

    let fp = graph.capture(&shop_v1(), "alice", "logged").unwrap();
    capture.assert_event_exists("capture", "start");
    capture.assert_event_exists("capture", "end");
    let end = capture
        .events_for_op("capture")
        .into_iter()
        .find(|e| e.event.as_deref() == Some("end"))
        .unwrap();
    assert_eq!(end.field("fingerprint"), Some(fp.as_str()));
    assert_eq!(end.field("graph"), Some("shop"));

    graph.load("0000000000000000").unwrap_err();
    let failures = capture.count_events(|e| {
        e.op.as_deref() == Some("load") && e.event.as_deref() == Some("end_error")
    });
    assert_eq!(failures, 1);
    let error = capture
        .events_for_op("load")
        .into_iter()
        .find(|e| e.event.as_deref() == Some("end_error"))
        .unwrap();
    assert_eq!(error.err_code(), Some("ERR_NOT_FOUND"));
    assert!(error.duration_ms().is_some());

    let start = capture
        .events_for_op("load")
        .into_iter()
        .find(|e| e.event.as_deref() == Some("start"))
        .unwrap();
    let request_id = start.request_id().unwrap();
    assert!(request_id.parse::<ontologyops_core::core_types::RequestId>().is_ok());
}
