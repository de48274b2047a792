//! Flashtext: single-pass keyword extraction and replacement
//!
//! This crate finds a large dictionary of (possibly multi-word) keywords inside
//! arbitrary text in one linear pass over the characters, and either reports the
//! clean names of the keywords found or rewrites the text with each keyword
//! replaced by its clean name.
//!
//! # Architecture
//!
//! - **Character trie** -- keywords are stored in a flat node arena, one edge per
//!   character; terminal nodes carry the keyword's clean name
//! - **Build, then scan** -- insertion needs `&mut KeywordProcessor`; scans borrow
//!   an immutable [`trie::TrieView`], so a built processor can be shared across
//!   threads without locking
//! - **Streaming state machines** -- [`extract::Extractor`] and
//!   [`replace::Replacer`] consume one character at a time and never backtrack,
//!   so cost is linear in the input regardless of dictionary size
//!
//! Keywords match anywhere, including inside longer words: `java` is found in
//! `java_2e`. There are no failure links, so after a partial match breaks, the
//! extractor resumes at the next character while the replacer retries the
//! breaking character from the root.
//!
//! # Key Modules
//!
//! - [`processor`] -- `KeywordProcessor`, the public entry point
//! - [`trie`] -- Node arena and read-only view
//! - [`fold`] -- Case folding shared by insertion and both scans
//! - [`extract`] -- Keyword extraction state machine
//! - [`replace`] -- Keyword replacement state machine
//! - [`loader`] -- `keyword=>clean name` dictionary files
//! - [`scan`] -- Parallel line-by-line scanning of text files
//! - [`stats`] -- Thread-safe atomic counters for scan metrics
//! - [`config`] -- Constants for loading and scanning
//!
//! # Example Usage
//!
//! ```bash
//! # Extract keywords from every line of a file as JSON lines
//! flashtext extract -k keywords.txt -i corpus.txt -o matches.jsonl
//!
//! # Rewrite a file with clean names substituted
//! flashtext replace -k keywords.txt -i corpus.txt -o corpus.clean.txt
//! ```

pub mod config;
pub mod extract;
pub mod fold;
pub mod loader;
pub mod processor;
pub mod replace;
pub mod scan;
pub mod stats;
pub mod trie;

pub use processor::KeywordProcessor;
