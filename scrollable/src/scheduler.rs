/// Visual-update classes coalesced onto the next paint frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UpdateKind {
    /// Resize-triggered: layout write phase (plus a position refresh).
    Layout,
    /// Scroll-triggered: thumb position / edge-flag write phase.
    ScrollPosition,
    /// Gesture-triggered: drag visual state, scheduled jumps, refocus.
    Gesture,
}

/// Pending write phases taken at the start of a frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PendingUpdates {
    pub layout: bool,
    pub scroll: bool,
    pub gesture: bool,
}

/// Coalesces update requests into at most one host frame callback.
///
/// A single in-flight token is shared by all update classes: `request`
/// returns `true` only when the host must schedule a new frame callback;
/// further requests before that frame runs are recorded but request nothing.
/// The frame callback performs writes only — measurement happened
/// synchronously when the triggering event was handled.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FrameScheduler {
    frame_requested: bool,
    pending: PendingUpdates,
}

impl FrameScheduler {
    /// Marks `kind` pending. Returns whether a new frame must be requested.
    pub(crate) fn request(&mut self, kind: UpdateKind) -> bool {
        match kind {
            UpdateKind::Layout => self.pending.layout = true,
            UpdateKind::ScrollPosition => self.pending.scroll = true,
            UpdateKind::Gesture => self.pending.gesture = true,
        }
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Takes the pending set for the frame callback now running.
    pub(crate) fn begin_frame(&mut self) -> PendingUpdates {
        let pending = self.pending;
        self.pending = PendingUpdates::default();
        self.frame_requested = false;
        pending
    }

    pub(crate) fn frame_requested(&self) -> bool {
        self.frame_requested
    }
}
