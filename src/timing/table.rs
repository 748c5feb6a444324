use crate::foundation::core::{Canvas, Fps};

/// Frame rate every duration in this crate is expressed in.
pub const FPS: Fps = Fps::integer(30);

/// Portrait canvas the compositions are registered with.
pub const CANVAS: Canvas = Canvas {
    width: 1080,
    height: 1920,
};

/// Fixed scene lengths in frames at [`FPS`].
///
/// Explainer and prompt have no entry: their length is always derived from their text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimingTable {
    pub hook: u64,
    pub plug_and_play: u64,
    /// Floor for every setup variant.
    pub setup: u64,
    pub lets_play: u64,
    pub results: u64,
    pub summary: u64,
    pub end: u64,
}

pub const TIMING: TimingTable = TimingTable {
    hook: 150,
    plug_and_play: 90,
    setup: 210,
    lets_play: 72,
    results: 600,
    summary: 300,
    end: 160,
};

/// Text length in UTF-16 code units, the unit all typing rates are expressed in.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count as 2.
pub(crate) fn text_len(s: &str) -> u64 {
    s.encode_utf16().count() as u64
}
