/// Separates a keyword from its clean name in a dictionary line (`keyword=>clean name`)
pub const KEYWORD_DELIMITER: &str = "=>";

/// Sentence scanned by the `demo` subcommand when none is given
pub const DEMO_SENTENCE: &str =
    "With product management techniques I like Python, but I use java_2e";

/// Buffer size for dictionary and input readers
pub const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Progress update interval (tick every N lines)
pub const PROGRESS_INTERVAL: u64 = 1000;
