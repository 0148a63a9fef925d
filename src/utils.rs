use dirs::home_dir;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::error::{WanderError, WanderResult};

pub fn expand_tilde(path: PathBuf) -> WanderResult<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = home_dir() {
            return Ok(home.join(stripped));
        } else {
            return Err(WanderError::Config(
                "Could not determine home directory".to_string(),
            ));
        }
    }

    Ok(path)
}

pub fn gen_progress_spinner() -> WanderResult<ProgressBar> {
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .map_err(|err| WanderError::Logger(err.to_string()))?;
    Ok(ProgressBar::new_spinner().with_style(style))
}

pub fn gen_progress_bar(len: u64) -> WanderResult<ProgressBar> {
    let style = ProgressStyle::with_template("{prefix} [{bar:40}] {pos}/{len}")
        .map_err(|err| WanderError::Logger(err.to_string()))?
        .progress_chars("=> ");
    Ok(ProgressBar::new(len).with_style(style))
}
