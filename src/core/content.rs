// Static per-scene configuration records.
//
// One record per mounted scene, grouped by page section. Layout fields are
// opaque to the interaction core; only the scene manager interprets them.
// Record order within a group is render order (later records stack above
// earlier ones at equal z).
// NOTE: included verbatim by the host-side tests; keep this file free of
// inner attributes and `crate::` paths.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneDetail {
    /// First frame of the record's animation cycle (phase offset).
    pub frame_start: u32,
    /// Frames per cycle.
    pub frame_count: u32,
    /// Seconds per full cycle.
    pub cycle_secs: f64,
    /// Square canvas edge, CSS pixels.
    pub size_px: f64,
    /// Position within the section, percent of section width/height.
    pub left_pct: f64,
    pub top_pct: f64,
    pub z_index: i32,
}

/// Hero section scenes.
static HERO: &[SceneDetail] = &[
    SceneDetail {
        frame_start: 0,
        frame_count: 60,
        cycle_secs: 3.0,
        size_px: 240.0,
        left_pct: 4.0,
        top_pct: 8.0,
        z_index: 0,
    },
    SceneDetail {
        frame_start: 12,
        frame_count: 60,
        cycle_secs: 3.5,
        size_px: 180.0,
        left_pct: 62.0,
        top_pct: 4.0,
        z_index: 0,
    },
    SceneDetail {
        frame_start: 24,
        frame_count: 48,
        cycle_secs: 2.5,
        size_px: 320.0,
        left_pct: 78.0,
        top_pct: 46.0,
        z_index: 1,
    },
    SceneDetail {
        frame_start: 6,
        frame_count: 60,
        cycle_secs: 4.0,
        size_px: 140.0,
        left_pct: 30.0,
        top_pct: 64.0,
        z_index: 2,
    },
    SceneDetail {
        frame_start: 40,
        frame_count: 48,
        cycle_secs: 3.0,
        size_px: 200.0,
        left_pct: 10.0,
        top_pct: 72.0,
        z_index: 1,
    },
];

/// "About" section scenes.
static ABOUT: &[SceneDetail] = &[
    SceneDetail {
        frame_start: 0,
        frame_count: 48,
        cycle_secs: 3.0,
        size_px: 260.0,
        left_pct: 70.0,
        top_pct: 10.0,
        z_index: 0,
    },
    SceneDetail {
        frame_start: 30,
        frame_count: 60,
        cycle_secs: 4.5,
        size_px: 160.0,
        left_pct: 42.0,
        top_pct: 55.0,
        z_index: 1,
    },
    SceneDetail {
        frame_start: 18,
        frame_count: 60,
        cycle_secs: 2.8,
        size_px: 220.0,
        left_pct: 6.0,
        top_pct: 30.0,
        z_index: 0,
    },
];

/// Ordered section groups, each an ordered sequence of records. Loaded once,
/// never mutated.
pub static SECTIONS: &[&[SceneDetail]] = &[HERO, ABOUT];

/// Total records across all sections.
pub fn total_records() -> usize {
    SECTIONS.iter().map(|g| g.len()).sum()
}
