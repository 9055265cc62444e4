//! Display-refresh scheduling bookkeeping
//!
//! At most one frame callback is pending at a time. Stopping hands back the
//! pending handle so the platform can cancel it, and the stop flag is checked
//! before every reschedule, so no callback outlives a pause or teardown.

/// Pending-frame tracker, generic over the platform's callback handle
#[derive(Debug, Clone)]
pub struct FrameLoop<H> {
    pending: Option<H>,
    stopped: bool,
}

impl<H: Copy> Default for FrameLoop<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy> FrameLoop<H> {
    /// A stopped loop with nothing pending
    pub fn new() -> Self {
        Self {
            pending: None,
            stopped: true,
        }
    }

    /// Allow scheduling again. Returns false if a frame is already pending,
    /// in which case the caller must not request another.
    pub fn resume(&mut self) -> bool {
        self.stopped = false;
        self.pending.is_none()
    }

    /// Record the handle of a freshly requested frame
    pub fn scheduled(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// Call first thing in the frame callback
    pub fn fired(&mut self) {
        self.pending = None;
    }

    /// Whether the callback should request the next frame
    pub fn should_reschedule(&self, keep_going: bool) -> bool {
        keep_going && !self.stopped && self.pending.is_none()
    }

    /// Stop the loop. Returns the pending handle, which must be cancelled.
    pub fn stop(&mut self) -> Option<H> {
        self.stopped = true;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loop_is_stopped() {
        let frames: FrameLoop<i32> = FrameLoop::new();
        assert!(frames.is_stopped());
        assert!(!frames.should_reschedule(true));
    }

    #[test]
    fn test_reschedule_cycle() {
        let mut frames = FrameLoop::new();
        assert!(frames.resume());
        frames.scheduled(1);
        assert!(frames.is_pending());

        frames.fired();
        assert!(frames.should_reschedule(true));
        assert!(!frames.should_reschedule(false));
    }

    #[test]
    fn test_stop_returns_pending_handle() {
        let mut frames = FrameLoop::new();
        frames.resume();
        frames.scheduled(7);
        assert_eq!(frames.stop(), Some(7));
        assert!(!frames.is_pending());
        assert_eq!(frames.stop(), None);
    }

    #[test]
    fn test_stop_inside_callback_blocks_reschedule() {
        let mut frames = FrameLoop::new();
        frames.resume();
        frames.scheduled(3);
        frames.fired();
        assert_eq!(frames.stop(), None);
        assert!(!frames.should_reschedule(true));
    }

    #[test]
    fn test_resume_with_pending_frame() {
        let mut frames = FrameLoop::new();
        frames.resume();
        frames.scheduled(9);
        assert!(!frames.resume());
    }
}
