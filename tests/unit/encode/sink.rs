use super::*;
use crate::foundation::core::Rgba8;

fn cfg() -> SinkConfig {
    let fps = Fps::whole(12).unwrap();
    SinkConfig {
        size: Size::new(4, 4),
        fps,
        frame_delay_ms: fps.frame_delay_ms(),
        total_frames: 2,
    }
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());
    sink.begin(cfg()).unwrap();
    let frame = Canvas::filled(Size::new(4, 4), Rgba8::rgb(3, 4, 5)).unwrap();
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.push_frame(FrameIndex(1), &frame).unwrap();
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().frame_delay_ms, 83);
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, FrameIndex(1));
    assert_eq!(sink.frames()[1].1, frame);
}

#[test]
fn in_memory_sink_requires_begin_and_matching_size() {
    let mut sink = InMemorySink::new();
    let frame = Canvas::new(Size::new(4, 4)).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    sink.begin(cfg()).unwrap();
    let other = Canvas::new(Size::new(5, 4)).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &other).is_err());
}
