//! Run options and signal recording.
//!
//! `--record PATH` appends every emitted signal to a file as JSON lines,
//! which makes play sessions replayable for debugging.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::Signal;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Draw sequence seed; derived from the clock when absent.
    pub seed: Option<u32>,
    /// Start in fast mode.
    pub fast: bool,
    /// Signal log destination.
    pub record: Option<PathBuf>,
}

pub fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                options.seed = Some(seed);
            }
            "--fast" => {
                options.fast = true;
            }
            "--record" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --record"))?;
                options.record = Some(PathBuf::from(v));
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

/// Writes signals to a file, one JSON object per line.
pub struct SignalRecorder {
    out: BufWriter<File>,
}

impl SignalRecorder {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("cannot create record file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    pub fn write(&mut self, signal: &Signal) -> Result<()> {
        let line = serde_json::to_string(signal)?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
