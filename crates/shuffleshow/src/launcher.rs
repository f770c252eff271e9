//! The input side of the app: the folder and interval the user typed, and
//! turning them into a running slideshow.

use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::notice::{Notice, Outbox};
use crate::scanner;
use crate::slideshow::{ResumeBehavior, Slideshow};

pub struct Launcher {
    pub directory: String,
    pub interval: String,
    resume: ResumeBehavior,
    seed: Option<u64>,
    outbox: Outbox,
}

impl Launcher {
    pub fn new(
        directory: Option<PathBuf>,
        interval: String,
        resume: ResumeBehavior,
        seed: Option<u64>,
    ) -> Self {
        Self {
            directory: directory
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            interval,
            resume,
            seed,
            outbox: Outbox::default(),
        }
    }

    /// Replace the folder text with a picked folder.
    pub fn set_directory(&mut self, dir: PathBuf) {
        self.directory = dir.display().to_string();
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.outbox.drain()
    }

    /// Scan the chosen folder and build a shuffled slideshow.
    ///
    /// Any failure is reported once and yields `None`.
    pub fn start(&mut self, now: Instant) -> Option<Slideshow> {
        let root = PathBuf::from(self.directory.trim());
        let images = match scanner::scan(&root) {
            Ok(images) => images,
            Err(e) => {
                self.outbox.push(Notice::error(e.to_string()));
                return None;
            }
        };

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let count = images.len();
        let show = Slideshow::new(images, &mut rng, &self.interval, self.resume, now);
        if show.is_some() {
            self.outbox.push(Notice::info(format!(
                "Showing {count} images from {}",
                root.display()
            )));
        }
        show
    }

    #[cfg(test)]
    fn outbox(&self) -> &Outbox {
        &self.outbox
    }
}
