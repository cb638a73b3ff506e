//! JSONL effect log
//!
//! When enabled, every effect produced by the CLI session is appended to a
//! file as one JSON object per line, tagged with the move sequence number
//! (`0` for the initial scan).

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::Effect;

#[derive(Debug, Serialize)]
pub struct EffectRecord<'a, T> {
    pub seq: u32,
    pub effect: &'a Effect<T>,
}

pub struct EffectLog<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl EffectLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open effect log {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EffectLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4096),
        }
    }

    /// Write one line per effect and flush
    pub fn record<T: Serialize>(&mut self, seq: u32, effects: &[Effect<T>]) -> Result<()> {
        for effect in effects {
            self.buf.clear();
            serde_json::to_writer(&mut self.buf, &EffectRecord { seq, effect })?;
            self.buf.push(b'\n');
            self.out.write_all(&self.buf)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
