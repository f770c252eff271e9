//! The slideshow state machine: shuffled image list, current position and
//! the single pending advance.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DeleteError;
use crate::interval::resolve_interval;
use crate::notice::{Notice, Outbox};

/// Whether an advance is scheduled.
///
/// `Playing` carries the one pending deadline; replacing the state is how a
/// pending advance gets cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing { due: Instant },
    Paused,
}

/// What leaving pause does to the current image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeBehavior {
    /// Skip ahead to the next image immediately.
    #[default]
    Advance,
    /// Keep the paused image and restart its full interval.
    InPlace,
}

pub struct Slideshow {
    images: Vec<PathBuf>,
    index: usize,
    state: PlayState,
    resume: ResumeBehavior,
    interval_text: String,
    /// Interval text we already warned about, so a bad value is reported once.
    warned_interval: Option<String>,
    outbox: Outbox,
    redraw: bool,
    closed: bool,
}

impl Slideshow {
    /// Shuffle `images` and start playing from the first one.
    ///
    /// Returns `None` for an empty list.
    pub fn new<R: Rng + ?Sized>(
        mut images: Vec<PathBuf>,
        rng: &mut R,
        interval_text: &str,
        resume: ResumeBehavior,
        now: Instant,
    ) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        images.shuffle(rng);

        let mut show = Self {
            images,
            index: 0,
            state: PlayState::Paused,
            resume,
            interval_text: interval_text.to_string(),
            warned_interval: None,
            outbox: Outbox::default(),
            redraw: true,
            closed: false,
        };
        show.schedule(now);
        tracing::debug!("Slideshow started with {} images", show.images.len());
        Some(show)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.index).map(PathBuf::as_path)
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    /// Deadline of the pending advance, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            PlayState::Playing { due } => Some(due),
            PlayState::Paused => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Update the interval text used by the next scheduling decision.
    pub fn set_interval_text(&mut self, text: &str) {
        text.clone_into(&mut self.interval_text);
    }

    /// Returns true once after every change of the displayed image.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn report(&mut self, notice: Notice) {
        self.outbox.push(notice);
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.outbox.drain()
    }

    /// Fire the pending advance if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.closed {
            return;
        }
        if let PlayState::Playing { due } = self.state {
            if now >= due {
                self.step(1);
                self.schedule(now);
            }
        }
    }

    /// Show the next image, restarting the timer when playing.
    pub fn next(&mut self, now: Instant) {
        self.navigate(1, now);
    }

    /// Show the previous image, restarting the timer when playing.
    pub fn previous(&mut self, now: Instant) {
        self.navigate(-1, now);
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        if self.closed {
            return;
        }
        match self.state {
            PlayState::Playing { .. } => {
                self.state = PlayState::Paused;
                tracing::debug!("Paused at {}", self.index);
                self.outbox.push(Notice::info("Paused"));
            }
            PlayState::Paused => {
                if self.resume == ResumeBehavior::Advance {
                    self.step(1);
                }
                self.schedule(now);
                tracing::debug!("Resumed at {}", self.index);
                self.outbox.push(Notice::info("Resumed"));
            }
        }
    }

    /// Delete the current image from disk and from the list.
    ///
    /// On failure the list is left untouched. Deleting the last remaining
    /// image closes the slideshow.
    pub fn delete_current(&mut self, now: Instant) {
        if self.closed {
            return;
        }
        let Some(path) = self.current().map(Path::to_path_buf) else {
            return;
        };
        if let Err(e) = remove_image(&path) {
            self.outbox.push(Notice::error(e.to_string()));
            return;
        }

        self.images.remove(self.index);
        self.outbox.push(Notice::info(format!(
            "Deleted {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        )));

        if self.images.is_empty() {
            self.outbox.push(Notice::info("No images left"));
            self.close();
            return;
        }
        if self.index >= self.images.len() {
            self.index = 0;
        }
        self.redraw = true;
        if !self.is_paused() {
            self.schedule(now);
        }
    }

    /// Stop the slideshow; nothing fires after this.
    pub fn close(&mut self) {
        self.state = PlayState::Paused;
        self.closed = true;
    }

    /// One-line summary for the HUD.
    pub fn status_line(&self) -> String {
        let name = self
            .current()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut line = format!("{} / {}  {}", self.index + 1, self.images.len(), name);
        if self.is_paused() {
            line.push_str("  (paused)");
        }
        line
    }

    fn navigate(&mut self, delta: isize, now: Instant) {
        if self.closed {
            return;
        }
        self.step(delta);
        if !self.is_paused() {
            self.schedule(now);
        }
    }

    fn step(&mut self, delta: isize) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.index = (self.index as isize + delta).rem_euclid(len as isize) as usize;
        self.redraw = true;
    }

    /// Replace any pending advance with a fresh one.
    fn schedule(&mut self, now: Instant) {
        let resolved = resolve_interval(&self.interval_text);
        if let Some(reason) = resolved.fallback {
            if self.warned_interval.as_deref() != Some(self.interval_text.as_str()) {
                self.warned_interval = Some(self.interval_text.clone());
                self.outbox.push(Notice::warn(format!(
                    "{reason}. Using the default of {} ms.",
                    resolved.delay.as_millis()
                )));
            }
        } else {
            self.warned_interval = None;
        }
        self.state = PlayState::Playing {
            due: now + resolved.delay,
        };
    }
}

fn remove_image(path: &Path) -> Result<(), DeleteError> {
    std::fs::remove_file(path).map_err(|source| DeleteError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Level;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n)
            .map(|i| PathBuf::from(format!("img-{i}.png")))
            .collect()
    }

    fn start(images: Vec<PathBuf>, interval: &str) -> (Slideshow, Instant) {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let show = Slideshow::new(images, &mut rng, interval, ResumeBehavior::Advance, now)
            .expect("non-empty");
        (show, now)
    }

    #[test]
    fn test_empty_list_does_not_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let show = Slideshow::new(
            Vec::new(),
            &mut rng,
            "1000",
            ResumeBehavior::Advance,
            Instant::now(),
        );
        assert!(show.is_none());
    }

    #[test]
    fn test_start_shuffles_once_and_schedules() {
        let (mut show, now) = start(paths(20), "1000");
        assert_eq!(show.len(), 20);
        assert_ne!(show.images(), paths(20).as_slice());
        assert_eq!(show.deadline(), Some(now + Duration::from_millis(1000)));
        assert!(show.take_redraw());
        assert!(!show.take_redraw());

        let order = show.images().to_vec();
        for _ in 0..25 {
            show.next(now);
        }
        for _ in 0..40 {
            show.previous(now);
        }
        assert_eq!(show.images(), order.as_slice());
    }

    #[test]
    fn test_same_seed_same_order() {
        let (a, _) = start(paths(10), "1000");
        let (b, _) = start(paths(10), "1000");
        assert_eq!(a.images(), b.images());
    }

    #[test]
    fn test_index_wraps_both_ways() {
        let (mut show, now) = start(paths(3), "1000");
        show.previous(now);
        assert_eq!(show.index(), 2);
        show.next(now);
        assert_eq!(show.index(), 0);

        for step in 0..50 {
            if step % 3 == 0 {
                show.previous(now);
            } else {
                show.next(now);
            }
            assert!(show.index() < show.len());
        }
    }

    #[test]
    fn test_tick_advances_only_after_deadline() {
        let (mut show, now) = start(paths(4), "500");
        show.take_redraw();

        show.tick(now + Duration::from_millis(499));
        assert_eq!(show.index(), 0);
        assert!(!show.take_redraw());

        let fired = now + Duration::from_millis(500);
        show.tick(fired);
        assert_eq!(show.index(), 1);
        assert!(show.take_redraw());
        assert_eq!(show.deadline(), Some(fired + Duration::from_millis(500)));
    }

    #[test]
    fn test_navigation_restarts_timer() {
        let (mut show, now) = start(paths(4), "1000");
        let later = now + Duration::from_millis(800);
        show.previous(later);
        assert_eq!(show.deadline(), Some(later + Duration::from_millis(1000)));

        // the first deadline no longer fires
        show.tick(now + Duration::from_millis(1000));
        assert_eq!(show.index(), 3);
    }

    #[test]
    fn test_pause_cancels_pending_advance() {
        let (mut show, now) = start(paths(4), "100");
        show.take_redraw();
        show.toggle_pause(now);
        assert!(show.is_paused());
        assert_eq!(show.deadline(), None);

        show.tick(now + Duration::from_secs(3600));
        assert_eq!(show.index(), 0);
        assert!(!show.take_redraw());
    }

    #[test]
    fn test_navigation_while_paused_stays_paused() {
        let (mut show, now) = start(paths(4), "100");
        show.toggle_pause(now);
        show.previous(now);
        assert_eq!(show.index(), 3);
        assert!(show.take_redraw());
        assert_eq!(show.state(), PlayState::Paused);
    }

    #[test]
    fn test_resume_advances_by_default() {
        let (mut show, now) = start(paths(4), "100");
        show.toggle_pause(now);
        show.take_redraw();

        let resumed = now + Duration::from_secs(5);
        show.toggle_pause(resumed);
        assert_eq!(show.index(), 1);
        assert!(show.take_redraw());
        assert_eq!(show.deadline(), Some(resumed + Duration::from_millis(100)));
    }

    #[test]
    fn test_resume_in_place_keeps_image() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut show =
            Slideshow::new(paths(4), &mut rng, "100", ResumeBehavior::InPlace, now).unwrap();
        show.toggle_pause(now);
        show.take_redraw();
        show.toggle_pause(now);
        assert_eq!(show.index(), 0);
        assert!(!show.take_redraw());
        assert!(show.deadline().is_some());
    }

    #[test]
    fn test_bad_interval_warns_once() {
        let (mut show, now) = start(paths(3), "abc");
        assert_eq!(show.deadline(), Some(now + Duration::from_millis(3000)));

        show.next(now);
        show.tick(now + Duration::from_secs(10));
        let notices = show.drain_notices();
        let warnings = notices.iter().filter(|n| n.level == Level::Warn).count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_interval_text_is_reread() {
        let (mut show, now) = start(paths(3), "1000");
        show.set_interval_text("250");
        show.next(now);
        assert_eq!(show.deadline(), Some(now + Duration::from_millis(250)));
    }

    #[test]
    fn test_delete_removes_file_and_entry() {
        let dir = tempfile::tempdir().unwrap();
        let images: Vec<PathBuf> = (0..3)
            .map(|i| {
                let p = dir.path().join(format!("{i}.png"));
                std::fs::write(&p, b"x").unwrap();
                p
            })
            .collect();
        let (mut show, now) = start(images, "1000");
        show.previous(now);
        let doomed = show.current().unwrap().to_path_buf();
        show.take_redraw();

        let later = now + Duration::from_millis(10);
        show.delete_current(later);
        assert!(!doomed.exists());
        assert_eq!(show.len(), 2);
        assert!(!show.images().contains(&doomed));
        // index was the last slot, so it wraps to the front
        assert_eq!(show.index(), 0);
        assert!(show.take_redraw());
        assert_eq!(show.deadline(), Some(later + Duration::from_millis(1000)));
    }

    #[test]
    fn test_delete_failure_keeps_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = vec![dir.path().join("gone.png"), dir.path().join("also.png")];
        let (mut show, now) = start(missing, "1000");
        show.drain_notices();

        show.delete_current(now);
        assert_eq!(show.len(), 2);
        assert!(!show.is_closed());
        let notices = show.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, Level::Error);
    }

    #[test]
    fn test_deleting_last_image_closes() {
        let dir = tempfile::tempdir().unwrap();
        let only = dir.path().join("only.jpg");
        std::fs::write(&only, b"x").unwrap();
        let (mut show, now) = start(vec![only.clone()], "1000");

        show.delete_current(now);
        assert!(!only.exists());
        assert!(show.is_closed());
        assert_eq!(show.len(), 0);
        assert_eq!(show.current(), None);
        assert_eq!(show.deadline(), None);

        // further input is ignored
        show.next(now);
        show.toggle_pause(now);
        show.tick(now + Duration::from_secs(60));
        assert_eq!(show.deadline(), None);
    }

    #[test]
    fn test_delete_while_paused_stays_paused() {
        let dir = tempfile::tempdir().unwrap();
        let images: Vec<PathBuf> = (0..2)
            .map(|i| {
                let p = dir.path().join(format!("{i}.bmp"));
                std::fs::write(&p, b"x").unwrap();
                p
            })
            .collect();
        let (mut show, now) = start(images, "1000");
        show.toggle_pause(now);
        show.delete_current(now);
        assert_eq!(show.len(), 1);
        assert!(show.is_paused());
    }

    #[test]
    fn test_status_line() {
        let (mut show, now) = start(vec![PathBuf::from("dir/cat.png")], "1000");
        assert_eq!(show.status_line(), "1 / 1  cat.png");
        show.toggle_pause(now);
        assert_eq!(show.status_line(), "1 / 1  cat.png  (paused)");
    }
}
