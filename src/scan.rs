use crate::config::{PROGRESS_INTERVAL, READ_BUFFER_SIZE};
use crate::processor::KeywordProcessor;
use crate::stats::ScanStats;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Extract,
    Replace,
}

/// Keywords found on one input line (1-based), sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatches {
    pub line: usize,
    pub keywords: Vec<String>,
}

/// Extracts keywords from every line in parallel. Output order follows input order.
pub fn extract_lines<S>(
    processor: &KeywordProcessor,
    lines: &[S],
    stats: &ScanStats,
) -> Vec<LineMatches>
where
    S: AsRef<str> + Sync,
{
    lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref();
            let mut keywords: Vec<String> =
                processor.extract_keywords(line).into_iter().collect();
            keywords.sort_unstable();

            stats.inc_lines();
            stats.add_chars(line.chars().count() as u64);
            if !keywords.is_empty() {
                stats.inc_lines_matched();
                stats.add_keywords(keywords.len() as u64);
            }

            LineMatches {
                line: i + 1,
                keywords,
            }
        })
        .collect()
}

/// Replaces keywords on every line in parallel. Output order follows input order.
pub fn replace_lines<S>(processor: &KeywordProcessor, lines: &[S], stats: &ScanStats) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    lines
        .par_iter()
        .map(|line| {
            let line = line.as_ref();
            let mut replacer = processor.replacer();
            let mut chars = 0u64;
            for c in line.chars() {
                replacer.consume(c);
                chars += 1;
            }
            let (replaced, count) = replacer.finish_with_count();

            stats.inc_lines();
            stats.add_chars(chars);
            if count > 0 {
                stats.inc_lines_matched();
                stats.add_replacements(count);
            }

            replaced
        })
        .collect()
}

/// Scans `reader` in chunks of `PROGRESS_INTERVAL` lines and writes each chunk's
/// results to `writer` before reading the next, so memory is bounded by one chunk.
pub fn scan_to_writer<R, W>(
    processor: &KeywordProcessor,
    reader: R,
    mut writer: W,
    mode: ScanMode,
    stats: &ScanStats,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let pb = ProgressBar::new_spinner();
    let mut lines = reader.lines();
    let mut chunk: Vec<String> = Vec::with_capacity(PROGRESS_INTERVAL as usize);
    let mut offset = 0;

    loop {
        chunk.clear();
        for line in lines.by_ref().take(PROGRESS_INTERVAL as usize) {
            chunk.push(line.context("Failed to read scan input")?);
        }
        if chunk.is_empty() {
            break;
        }

        match mode {
            ScanMode::Extract => {
                for mut matches in extract_lines(processor, &chunk, stats) {
                    matches.line += offset;
                    serde_json::to_writer(&mut writer, &matches)
                        .context("Failed to serialize line matches")?;
                    writeln!(writer).context("Failed to write scan output")?;
                }
            }
            ScanMode::Replace => {
                for replaced in replace_lines(processor, &chunk, stats) {
                    writeln!(writer, "{}", replaced).context("Failed to write scan output")?;
                }
            }
        }
        offset += chunk.len();
        pb.inc(chunk.len() as u64);
        debug!(lines = offset, "Chunk written");
    }

    writer.flush().context("Failed to flush scan output")?;
    pb.finish_and_clear();
    Ok(())
}

/// Scans `input` line by line and writes results to `output`, or stdout when None.
///
/// Extraction writes one JSON object per line; replacement writes the rewritten text.
pub fn run_scan(
    processor: &KeywordProcessor,
    input: &Path,
    output: Option<&Path>,
    mode: ScanMode,
    stats: &ScanStats,
) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    info!(mode = ?mode, "Scanning input: {}", input.display());

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let writer = BufWriter::with_capacity(READ_BUFFER_SIZE, sink);

    scan_to_writer(processor, reader, writer, mode, stats)
        .with_context(|| format!("Failed to scan input file: {}", input.display()))?;

    info!(
        lines = stats.lines(),
        matched = stats.lines_matched(),
        "Scan complete"
    );

    Ok(())
}
