use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Rgba8;

#[test]
fn frame_count_and_delay_follow_fps() {
    let cases = [
        (12, 6.0, 72, 83),
        (12, 8.0, 96, 83),
        (10, 6.0, 60, 100),
        (24, 2.5, 60, 42),
        (30, 1.0, 30, 33),
        (7, 1.0, 7, 143),
    ];
    for (fps, secs, frames, delay) in cases {
        let seq = Sequencer::new(Fps::whole(fps).unwrap(), secs).unwrap();
        assert_eq!(seq.frame_count(), frames, "{fps} fps over {secs}s");
        assert_eq!(seq.frame_delay_ms(), delay, "{fps} fps");
    }
}

#[test]
fn rejects_degenerate_durations() {
    let fps = Fps::whole(12).unwrap();
    assert!(Sequencer::new(fps, 0.0).is_err());
    assert!(Sequencer::new(fps, -1.0).is_err());
    assert!(Sequencer::new(fps, f64::NAN).is_err());
    // Rounds to zero frames.
    assert!(Sequencer::new(fps, 0.01).is_err());
}

#[test]
fn frame_times_are_evenly_spaced() {
    let seq = Sequencer::new(Fps::whole(12).unwrap(), 6.0).unwrap();
    let times: Vec<_> = seq.frames().collect();
    assert_eq!(times.len(), 72);
    assert_eq!(times[0].secs(), 0.0);
    assert!((times[12].secs() - 1.0).abs() < 1e-12);
    assert!((times[71].secs() - 71.0 / 12.0).abs() < 1e-12);
    assert_eq!(seq.frame_time(FrameIndex(5)).unwrap(), times[5]);
    assert!(seq.frame_time(FrameIndex(72)).is_err());
}

#[test]
fn run_streams_every_frame_in_order() {
    let seq = Sequencer::new(Fps::whole(12).unwrap(), 1.0).unwrap();
    let size = Size::new(3, 2);
    let mut sink = InMemorySink::new();
    let mut seen = Vec::new();
    let stats = seq
        .run(size, &mut sink, |t| {
            seen.push(t.index.0);
            Canvas::filled(size, Rgba8::rgb(t.index.0 as u8, 0, 0))
        })
        .unwrap();

    assert_eq!(stats, SequenceStats { frames: 12, frame_delay_ms: 83 });
    assert_eq!(seen, (0..12).collect::<Vec<_>>());
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.size, cfg.frame_delay_ms, cfg.total_frames), (size, 83, 12));
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!(frame.pixel(0, 0).unwrap()[0], i as u8);
    }
}

#[test]
fn run_rejects_frames_of_the_wrong_size() {
    let seq = Sequencer::new(Fps::whole(12).unwrap(), 1.0).unwrap();
    let mut sink = InMemorySink::new();
    let err = seq
        .run(Size::new(3, 2), &mut sink, |_| Canvas::new(Size::new(2, 2)))
        .unwrap_err();
    assert!(matches!(err, AnvilError::Render(_)));
}

#[test]
fn run_propagates_render_errors() {
    let seq = Sequencer::new(Fps::whole(12).unwrap(), 1.0).unwrap();
    let mut sink = InMemorySink::new();
    let err = seq
        .run(Size::new(3, 2), &mut sink, |t| {
            if t.index.0 == 3 {
                Err(AnvilError::render("boom"))
            } else {
                Canvas::new(Size::new(3, 2))
            }
        })
        .unwrap_err();
    assert!(err.to_string().contains("boom"));
    assert_eq!(sink.frames().len(), 3);
}
