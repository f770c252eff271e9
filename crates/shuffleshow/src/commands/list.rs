use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::scanner;

/// Scan `dir` and print one image path per line.
pub fn run(dir: &Path, shuffle: bool, seed: Option<u64>, quiet: bool) -> anyhow::Result<()> {
    let images = ordered(dir, shuffle, seed)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &images {
        writeln!(out, "{}", path.display())?;
    }

    if !quiet {
        eprintln!(
            "{} {} in {}",
            images.len().to_string().bold(),
            if images.len() == 1 { "image" } else { "images" },
            dir.display()
        );
    }
    Ok(())
}

fn ordered(dir: &Path, shuffle: bool, seed: Option<u64>) -> anyhow::Result<Vec<PathBuf>> {
    let mut images = scanner::scan(dir)?;
    if shuffle {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        images.shuffle(&mut rng);
    }
    Ok(images)
}
