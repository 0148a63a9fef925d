use clap::ValueEnum;
use indicatif::{MultiProgress, ProgressBar};
use std::time::Duration;

use crate::error::WanderResult;
use crate::utils::{gen_progress_bar, gen_progress_spinner};

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq)]
pub enum LogMode {
    Quiet,
    Plain,
    Fancy,
}

pub struct Logger {
    mode: LogMode,
    multi: Option<MultiProgress>,
}

impl Logger {
    pub fn new(mode: Option<LogMode>) -> Self {
        let mode = mode.unwrap_or(LogMode::Fancy);
        let multi = match mode {
            LogMode::Fancy => Some(MultiProgress::new()),
            _ => None,
        };
        Self { mode, multi }
    }

    pub fn info(&self, msg: &str) {
        if self.mode == LogMode::Plain {
            println!("[INFO] {msg}");
        }
    }

    pub fn spinner(&self, msg: &str) -> WanderResult<Progress> {
        let inner = match self.mode {
            LogMode::Fancy => {
                let spinner = gen_progress_spinner()?;
                let spinner = match &self.multi {
                    Some(multi) => multi.add(spinner),
                    None => spinner,
                };
                spinner.set_message(msg.to_string());
                spinner.enable_steady_tick(Duration::from_millis(100));
                Some(spinner)
            }
            LogMode::Plain => {
                println!("[INFO] {msg}");
                None
            }
            LogMode::Quiet => None,
        };

        Ok(Progress {
            inner,
            mode: self.mode,
        })
    }

    pub fn bar(&self, len: u64) -> WanderResult<Progress> {
        let inner = match self.mode {
            LogMode::Fancy => {
                let bar = gen_progress_bar(len)?;
                Some(match &self.multi {
                    Some(multi) => multi.add(bar),
                    None => bar,
                })
            }
            _ => None,
        };

        Ok(Progress {
            inner,
            mode: self.mode,
        })
    }
}

pub struct Progress {
    inner: Option<ProgressBar>,
    mode: LogMode,
}

impl Progress {
    pub fn set_message(&self, msg: String) {
        match self.mode {
            LogMode::Fancy => {
                if let Some(bar) = &self.inner {
                    bar.set_message(msg);
                }
            }
            LogMode::Plain => println!("[INFO] {msg}"),
            LogMode::Quiet => {}
        }
    }

    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.inner {
            bar.inc(delta);
        }
    }

    pub fn finish_and_clear(self) {
        if let Some(bar) = self.inner {
            bar.finish_and_clear();
        }
    }
}
