use crate::config::model::{Caption, Word};
use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::math::interpolate_clamped;

pub const MAX_WORDS_PER_LINE: usize = 4;
/// Seconds spent fading a chunk in and out.
const FADE_SECS: f64 = 0.1;
/// Chunks shorter than this skip the fade.
const MIN_FADE_CHUNK_SECS: f64 = 0.3;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CaptionWordView {
    pub word: String,
    pub highlighted: bool,
}

/// Karaoke line on screen at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CaptionView {
    pub caption_id: u32,
    pub words: Vec<CaptionWordView>,
    pub opacity: f64,
}

/// Caption chunk shown at `frame`, with words highlighted once they have been spoken.
///
/// `offset_frames` delays the whole track; nothing shows before it.
pub fn karaoke_caption_at(
    captions: &[Caption],
    frame: FrameIndex,
    fps: Fps,
    offset_frames: u64,
) -> Option<CaptionView> {
    let local = frame.0.checked_sub(offset_frames)?;
    let t = fps.frames_to_secs(local);

    let caption = captions
        .iter()
        .find(|c| t >= c.start_time && t < c.end_time)?;

    let mut chunks = caption.words.chunks(MAX_WORDS_PER_LINE);
    let first = chunks.clone().next()?;
    let active = chunks
        .find(|chunk| {
            let (start, end) = chunk_span(chunk);
            t >= start && t < end
        })
        .unwrap_or(first);

    let (start, end) = chunk_span(active);
    let opacity = if end - start < MIN_FADE_CHUNK_SECS {
        1.0
    } else {
        interpolate_clamped(
            t,
            &[start, start + FADE_SECS, end - FADE_SECS, end],
            &[0.0, 1.0, 1.0, 0.0],
        )
    };

    Some(CaptionView {
        caption_id: caption.id,
        words: active
            .iter()
            .map(|w| CaptionWordView {
                word: w.word.clone(),
                highlighted: t >= w.start,
            })
            .collect(),
        opacity,
    })
}

fn chunk_span(chunk: &[Word]) -> (f64, f64) {
    match (chunk.first(), chunk.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => (0.0, 0.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/captions.rs"]
mod tests;
