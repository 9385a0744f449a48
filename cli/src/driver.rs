//! Line-at-a-time conversion loop shared by stdin and file input.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::Context;
use hl7_core::{ErrorPolicy, FlatRecord, FlattenConfig};
use hl7_er7::convert_message_str;
use tracing::debug;

/// How raw input bytes become characters before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputEncoding {
    /// ISO-8859-1: each byte is the code point of the same value.
    Latin1,
    /// UTF-8, replacing invalid sequences.
    Utf8,
}

impl InputEncoding {
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        match self {
            Self::Latin1 => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
            Self::Utf8 => String::from_utf8_lossy(bytes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineDriver {
    pub config: FlattenConfig,
    pub policy: ErrorPolicy,
    pub encoding: InputEncoding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read and written.
    pub lines: usize,
    /// Lines that did not parse and were written as `{}`.
    pub failed: usize,
}

impl LineDriver {
    /// Write one JSON document per input line, in input order.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> anyhow::Result<Summary> {
        let mut summary = Summary::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line_number = index + 1;
            let bytes = line.with_context(|| format!("failed to read line {line_number}"))?;
            let text = self.encoding.decode(&bytes);

            let record = match convert_message_str(&text, &self.config) {
                Ok(record) => record,
                Err(err) => match self.policy {
                    ErrorPolicy::Abort => {
                        return Err(err)
                            .with_context(|| format!("line {line_number} is not an HL7 message"));
                    }
                    ErrorPolicy::EmptyRecord => {
                        debug!(line = line_number, kind = err.kind(), "writing empty record");
                        summary.failed += 1;
                        FlatRecord::new()
                    }
                },
            };

            serde_json::to_writer(&mut writer, &record)
                .with_context(|| format!("failed to write record for line {line_number}"))?;
            writer
                .write_all(b"\n")
                .with_context(|| format!("failed to write record for line {line_number}"))?;
            summary.lines += 1;
        }

        writer.flush().context("failed to flush output")?;
        Ok(summary)
    }
}
