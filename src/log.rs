// src/log.rs
// Leveled log lines on stderr. stdout is reserved for the report.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

static SINK: Mutex<()> = Mutex::new(());
static EPOCH: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        })
    }
}

/// Milliseconds since the first log call of the process.
fn since_epoch_ms() -> u64 {
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as u64
}

fn clock(ms: u64) -> String {
    let (secs, ms) = (ms / 1_000, ms % 1_000);
    let (mins, s) = (secs / 60, secs % 60);
    let (h, m) = (mins / 60, mins % 60);
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Writes one `[HH:MM:SS.mmm][LEVEL] msg` line.
fn emit<W: Write>(out: &mut W, at_ms: u64, level: Level, msg: &str) -> io::Result<()> {
    writeln!(out, "[{}][{level}] {msg}", clock(at_ms))
}

/// Backing function for the log macros.
pub fn write_log(level: Level, msg: &str) {
    let at = since_epoch_ms();
    let Ok(_held) = SINK.lock() else { return };
    let _ = emit(&mut io::stderr().lock(), at, level, msg);
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
