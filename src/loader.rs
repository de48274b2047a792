use crate::config::{KEYWORD_DELIMITER, READ_BUFFER_SIZE};
use crate::processor::KeywordProcessor;
use anyhow::{Context, Result};
use memchr::memmem;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Splits a dictionary line into `(keyword, clean_name)`.
///
/// `keyword=>clean name` yields both parts when the line holds exactly one
/// delimiter with text on each side. Any other line is a keyword on its own,
/// taken whole.
pub fn parse_line(line: &str) -> (&str, &str) {
    let delimiter = KEYWORD_DELIMITER.as_bytes();
    if let Some(pos) = memmem::find(line.as_bytes(), delimiter) {
        let keyword = &line[..pos];
        let clean_name = &line[pos + delimiter.len()..];
        if !keyword.is_empty()
            && !clean_name.is_empty()
            && memmem::find(clean_name.as_bytes(), delimiter).is_none()
        {
            return (keyword, clean_name);
        }
        debug!(line, "Malformed delimiter, adding whole line as keyword");
    }
    (line, line)
}

/// Adds every line to `processor`; returns the number of lines read.
pub fn add_lines<I, S>(processor: &mut KeywordProcessor, lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0;
    for line in lines {
        let (keyword, clean_name) = parse_line(line.as_ref());
        processor.add_keyword_with_clean_name(keyword, clean_name);
        count += 1;
    }
    count
}

pub fn from_lines<I, S>(lines: I, case_sensitive: bool) -> KeywordProcessor
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut processor = KeywordProcessor::new(case_sensitive);
    add_lines(&mut processor, lines);
    processor
}

/// Builds a processor from a dictionary stream. The first read error aborts the load.
pub fn from_reader<R: BufRead>(reader: R, case_sensitive: bool) -> Result<KeywordProcessor> {
    let mut processor = KeywordProcessor::new(case_sensitive);
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read dictionary line {}", number + 1))?;
        let (keyword, clean_name) = parse_line(&line);
        processor.add_keyword_with_clean_name(keyword, clean_name);
    }
    Ok(processor)
}

pub fn from_file<P: AsRef<Path>>(path: P, case_sensitive: bool) -> Result<KeywordProcessor> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open keyword file: {}", path.display()))?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

    info!("Loading keywords from: {}", path.display());

    let processor = from_reader(reader, case_sensitive)
        .with_context(|| format!("Failed to load keyword file: {}", path.display()))?;

    info!(
        keywords = processor.len(),
        nodes = processor.node_count(),
        case_sensitive,
        "Keyword dictionary loaded"
    );

    Ok(processor)
}
