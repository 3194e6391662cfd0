//! Timeline orchestration
//!
//! A `Timeline` plays multiple scalar tracks against a shared clock. Each
//! entry occupies a window `[offset, offset + duration]` on that clock and
//! interpolates from a start to an end value with its own easing.
//!
//! Two usage modes:
//!
//! - **Clocked**: `start()` then `tick(dt_ms)` each frame. Entries appended
//!   with `then` / `then_overlap` form intro chains where a step can begin
//!   before the previous one finishes (the hero title -> subtitle -> image
//!   stagger uses 600 ms overlaps).
//! - **Scrubbed**: never started; the owner drives `seek_progress` directly
//!   from scroll position. Values are pure functions of the clock, so
//!   scrubbing backwards reverses the motion exactly.

use crate::easing::Easing;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a timeline entry
    pub struct TimelineEntryId;
}

#[derive(Clone, Copy, Debug)]
struct TimelineEntry {
    offset_ms: f32,
    duration_ms: f32,
    from: f32,
    to: f32,
    easing: Easing,
}

impl TimelineEntry {
    fn end_ms(&self) -> f32 {
        self.offset_ms + self.duration_ms
    }

    fn value_at(&self, time_ms: f32) -> f32 {
        let local = ((time_ms - self.offset_ms) / self.duration_ms.max(f32::EPSILON))
            .clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(local)
    }

    fn progress_at(&self, time_ms: f32) -> f32 {
        ((time_ms - self.offset_ms) / self.duration_ms.max(f32::EPSILON)).clamp(0.0, 1.0)
    }
}

/// Infinite loop count for `set_loop`
pub const INFINITE: i32 = -1;

/// A multi-track animation clock
pub struct Timeline {
    entries: SlotMap<TimelineEntryId, TimelineEntry>,
    time_ms: f32,
    playing: bool,
    /// Append cursor for `then` chaining
    cursor_ms: f32,
    loop_count: i32,
    completed_loops: i32,
    /// Reverse direction each loop instead of jumping back to the start
    alternate: bool,
    direction: f32,
    playback_rate: f32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            time_ms: 0.0,
            playing: false,
            cursor_ms: 0.0,
            loop_count: 1,
            completed_loops: 0,
            alternate: false,
            direction: 1.0,
            playback_rate: 1.0,
        }
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Add a track at an explicit offset on the timeline clock
    pub fn add(
        &mut self,
        offset_ms: f32,
        duration_ms: u32,
        from: f32,
        to: f32,
    ) -> TimelineEntryId {
        self.add_with_easing(offset_ms, duration_ms, from, to, Easing::Linear)
    }

    /// Add a track at an explicit offset with a specific easing
    pub fn add_with_easing(
        &mut self,
        offset_ms: f32,
        duration_ms: u32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> TimelineEntryId {
        let entry = TimelineEntry {
            offset_ms: offset_ms.max(0.0),
            duration_ms: duration_ms.max(1) as f32,
            from,
            to,
            easing,
        };
        self.cursor_ms = self.cursor_ms.max(entry.end_ms());
        self.entries.insert(entry)
    }

    /// Append a track after everything added so far
    pub fn then(
        &mut self,
        duration_ms: u32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> TimelineEntryId {
        self.then_overlap(0, duration_ms, from, to, easing)
    }

    /// Append a track that starts `overlap_ms` before the current chain end
    ///
    /// This is the negative-offset stagger: `then_overlap(600, ...)` starts
    /// the new step 600 ms before the previous one finishes.
    pub fn then_overlap(
        &mut self,
        overlap_ms: u32,
        duration_ms: u32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> TimelineEntryId {
        let offset = (self.cursor_ms - overlap_ms as f32).max(0.0);
        let entry = TimelineEntry {
            offset_ms: offset,
            duration_ms: duration_ms.max(1) as f32,
            from,
            to,
            easing,
        };
        self.cursor_ms = self.cursor_ms.max(entry.end_ms());
        self.entries.insert(entry)
    }

    // =========================================================================
    // Playback control
    // =========================================================================

    /// Number of loops; `INFINITE` (-1) repeats forever
    pub fn set_loop(&mut self, count: i32) {
        self.loop_count = count;
    }

    /// Reverse direction each loop (ping-pong) instead of restarting
    pub fn set_alternate(&mut self, enabled: bool) {
        self.alternate = enabled;
    }

    /// Playback speed multiplier (1.0 = realtime)
    pub fn set_playback_rate(&mut self, rate: f32) {
        self.playback_rate = rate.max(0.0);
    }

    /// Start playback from time zero
    pub fn start(&mut self) {
        self.time_ms = 0.0;
        self.completed_loops = 0;
        self.direction = 1.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Flip the playback direction
    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Total clock length: the latest entry end
    pub fn total_duration_ms(&self) -> f32 {
        self.entries
            .values()
            .map(TimelineEntry::end_ms)
            .fold(0.0, f32::max)
    }

    /// Jump the clock to an absolute time
    pub fn seek(&mut self, time_ms: f32) {
        self.time_ms = time_ms.clamp(0.0, self.total_duration_ms());
    }

    /// Jump the clock to a normalized position (scrub entry point)
    pub fn seek_progress(&mut self, progress: f32) {
        self.time_ms = self.total_duration_ms() * progress.clamp(0.0, 1.0);
    }

    /// Advance the clock by `dt_ms`, handling loop and alternate semantics
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        let total = self.total_duration_ms();
        if total <= 0.0 {
            self.playing = false;
            return;
        }

        self.time_ms += dt_ms * self.playback_rate * self.direction;

        loop {
            if self.direction > 0.0 && self.time_ms >= total {
                self.completed_loops += 1;
                if self.loop_count != INFINITE && self.completed_loops >= self.loop_count {
                    self.time_ms = total;
                    self.playing = false;
                    break;
                }
                if self.alternate {
                    self.direction = -1.0;
                    self.time_ms = total - (self.time_ms - total);
                } else {
                    self.time_ms -= total;
                }
            } else if self.direction < 0.0 && self.time_ms <= 0.0 {
                self.completed_loops += 1;
                if self.loop_count != INFINITE && self.completed_loops >= self.loop_count {
                    self.time_ms = 0.0;
                    self.playing = false;
                    break;
                }
                if self.alternate {
                    self.direction = 1.0;
                    self.time_ms = -self.time_ms;
                } else {
                    self.time_ms += total;
                }
            } else {
                break;
            }
        }
    }

    // =========================================================================
    // Reading values
    // =========================================================================

    /// Current value of an entry, if it exists
    pub fn value(&self, id: TimelineEntryId) -> Option<f32> {
        self.entries.get(id).map(|e| e.value_at(self.time_ms))
    }

    /// Progress of a single entry within its own window, 0.0 to 1.0
    pub fn entry_progress(&self, id: TimelineEntryId) -> Option<f32> {
        self.entries.get(id).map(|e| e.progress_at(self.time_ms))
    }

    /// Overall clock progress, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        let total = self.total_duration_ms();
        if total <= 0.0 {
            0.0
        } else {
            (self.time_ms / total).clamp(0.0, 1.0)
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry_ids(&self) -> Vec<TimelineEntryId> {
        self.entries.keys().collect()
    }
}
