use formpoint::realtime::stomp::{Frame, FrameError};

#[test]
fn subscribe_frame_encodes_to_wire_text() {
    let frame = Frame::subscribe("0", "/topic/survey/7/statistics");
    assert_eq!(
        frame.encode(),
        "SUBSCRIBE\nid:0\ndestination:/topic/survey/7/statistics\n\n\0"
    );
}

#[test]
fn message_frame_round_trips() {
    let frame = Frame::new("MESSAGE")
        .header("destination", "/topic/survey/7/statistics")
        .header("message-id", "m-1")
        .body("{\"responseCnt\":4}");
    let decoded = Frame::decode(&frame.encode()).expect("round trip");
    assert_eq!(decoded, frame);
    assert_eq!(decoded.get("message-id"), Some("m-1"));
    assert_eq!(decoded.body, "{\"responseCnt\":4}");
}

#[test]
fn header_values_may_contain_colons() {
    let raw = "CONNECTED\nsession:abc:123\n\n\0";
    let frame = Frame::decode(raw).expect("decodes");
    assert_eq!(frame.get("session"), Some("abc:123"));
}

#[test]
fn decode_rejects_missing_terminator() {
    assert_eq!(
        Frame::decode("CONNECTED\n\n"),
        Err(FrameError::MissingTerminator)
    );
}

#[test]
fn decode_rejects_empty_frame() {
    assert_eq!(Frame::decode("\0"), Err(FrameError::MissingCommand));
}

#[test]
fn decode_rejects_header_without_separator() {
    assert_eq!(
        Frame::decode("CONNECTED\nnotaheader\n\n\0"),
        Err(FrameError::MalformedHeader("notaheader".to_string()))
    );
}
