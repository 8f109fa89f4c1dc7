use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn blank(width: u32, height: u32) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![0; width as usize * height as usize * 4],
        premultiplied: true,
    }
}

#[test]
fn config_rejects_empty_frames() {
    assert!(cfg(0, 4).validate().is_err());
    assert!(cfg(4, 0).validate().is_err());
    assert!(cfg(4, 4).validate().is_ok());
}

#[test]
fn in_memory_sink_collects_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(&blank(2, 2)).unwrap();
    sink.push_frame(&blank(2, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.config(), Some(cfg(2, 2)));
    assert!(sink.is_ended());
}

#[test]
fn push_before_begin_is_an_encode_error() {
    let mut sink = InMemorySink::new();
    let err = sink.push_frame(&blank(2, 2)).unwrap_err();
    assert!(matches!(err, BanimError::Encode(_)));
}

#[test]
fn mismatched_frame_size_is_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    assert!(sink.push_frame(&blank(3, 2)).is_err());

    let mut short = blank(2, 2);
    short.data.pop();
    assert!(sink.push_frame(&short).is_err());
    assert!(sink.frames().is_empty());
}
