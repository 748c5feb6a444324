use super::*;
use crate::foundation::error::{ReelError, ReelResult};
use std::cell::Cell;

const FPS: Fps = Fps::integer(30);

enum Answer {
    Secs(f64),
    Unknown,
    Fail,
}

struct FakeProbe {
    answer: Answer,
    calls: Cell<u32>,
}

impl FakeProbe {
    fn new(answer: Answer) -> Self {
        Self {
            answer,
            calls: Cell::new(0),
        }
    }
}

impl AudioProbe for FakeProbe {
    async fn duration_secs(&self, _asset: &str) -> ReelResult<Option<f64>> {
        self.calls.set(self.calls.get() + 1);
        match self.answer {
            Answer::Secs(s) => Ok(Some(s)),
            Answer::Unknown => Ok(None),
            Answer::Fail => Err(ReelError::probe("missing")),
        }
    }
}

fn run(content: u64, asset: Option<&str>, probe: &FakeProbe) -> Reconciled {
    pollster::block_on(reconcile_duration(content, asset, probe, FPS))
}

#[test]
fn no_asset_skips_probe() {
    let probe = FakeProbe::new(Answer::Secs(100.0));
    let r = run(500, None, &probe);
    assert_eq!(r.duration, 500);
    assert_eq!(r.audio, AudioOutcome::NoAudio);
    assert_eq!(probe.calls.get(), 0);
}

#[test]
fn longer_audio_extends_duration() {
    let probe = FakeProbe::new(Answer::Secs(70.01));
    let r = run(1800, Some("voiceover.wav"), &probe);
    assert_eq!(r.audio, AudioOutcome::Measured { audio_frames: 2101 });
    assert_eq!(r.duration, 2101);
    assert_eq!(probe.calls.get(), 1);
}

#[test]
fn shorter_audio_never_shortens() {
    let probe = FakeProbe::new(Answer::Secs(1.0));
    let r = run(1800, Some("voiceover.wav"), &probe);
    assert_eq!(r.duration, 1800);
    assert_eq!(r.content_total, 1800);
}

#[test]
fn unknown_duration_falls_back() {
    let probe = FakeProbe::new(Answer::Unknown);
    let r = run(900, Some("voiceover.wav"), &probe);
    assert_eq!(r.duration, 900);
    assert_eq!(r.audio, AudioOutcome::Unknown);
}

#[test]
fn probe_failure_falls_back() {
    let probe = FakeProbe::new(Answer::Fail);
    let r = run(900, Some("missing.wav"), &probe);
    assert_eq!(r.duration, 900);
    assert_eq!(r.audio, AudioOutcome::Failed);
    assert_eq!(probe.calls.get(), 1);
}

#[test]
fn non_finite_or_negative_durations_are_unknown() {
    for secs in [f64::NAN, f64::INFINITY, -5.0] {
        let probe = FakeProbe::new(Answer::Secs(secs));
        let r = run(900, Some("a.wav"), &probe);
        assert_eq!(r.duration, 900);
        assert_eq!(r.audio, AudioOutcome::Unknown);
    }
}

#[test]
fn result_is_never_below_content_total() {
    let answers = [
        Answer::Secs(0.0),
        Answer::Secs(12.3),
        Answer::Secs(1000.0),
        Answer::Unknown,
        Answer::Fail,
    ];
    for answer in answers {
        let probe = FakeProbe::new(answer);
        for content in [0, 1, 369, 30_000] {
            assert!(run(content, Some("a.wav"), &probe).duration >= content);
        }
    }
}
