use super::*;

#[test]
fn wake_message_prefers_server_text() {
    let result = WakeResult { sent: true, message: Some("already awake".into()) };
    assert_eq!(wake_message("nas", &result), "nas: already awake");
}

#[test]
fn wake_message_reports_sent_flag() {
    assert_eq!(wake_message("nas", &WakeResult { sent: true, message: None }), "Magic packet sent to nas");
    assert_eq!(
        wake_message("nas", &WakeResult { sent: false, message: None }),
        "nas did not accept the wake request"
    );
}
