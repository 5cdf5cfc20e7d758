//! Dead-Function Stripper
//!
//! Removes function definitions preceded by a marker annotation
//! (by default `#[allow(dead_code)]`) from source text, using naive
//! brace counting to find where each function body ends.
//!
//! ## Algorithm
//!
//! 1. Split the text into lines on `'\n'`
//! 2. Walk the lines once with a three-state scanner
//! 3. Join the retained lines back with `'\n'`
//!
//! A marker line arms the scanner; the next line starting with `fn ` or
//! `async fn ` switches it into the function body, where lines are dropped
//! while a running brace count stays positive.
//!
//! ## Example
//!
//! ```text
//! #[allow(dead_code)]
//! fn unused() {        // dropped, together with the marker line
//!     let x = 1;       // dropped
//! }                    // dropped, closing brace ends the body
//! fn used() {          // kept
//! ```
//!
//! The scan is purely textual: braces inside string literals or comments
//! count like structural braces, and an unbalanced body drops the rest of
//! the file. That trade-off is the contract, not an oversight.

use tracing::debug;

/// Line prefix that opens a synchronous function definition.
const FN_PREFIX: &str = "fn ";

/// Line prefix that opens an asynchronous function definition.
const ASYNC_FN_PREFIX: &str = "async fn ";

/// Scanner position within the single forward pass.
///
/// Modeling the scan as one enum keeps the states mutually exclusive:
/// the scanner cannot be armed and inside a body at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Retaining lines, watching for a marker annotation.
    Scanning,
    /// Marker seen; waiting for the function-opening line.
    ArmedForOpening,
    /// Dropping body lines until the brace count closes the function.
    ///
    /// `depth` starts at 0 on the opening line itself, so the opening
    /// line's own braces are never counted. A one-line body with both
    /// braces on the opening line therefore stays open until a later
    /// line brings the count to zero or below.
    InsideDeadBody { depth: i32 },
}

/// Outcome of one strip pass.
///
/// Line counts follow the `'\n'`-split convention on both sides: a file
/// ending in a newline counts one trailing empty line, and an empty
/// output still counts as one line.
#[derive(Debug, Clone)]
pub struct StripOutcome {
    /// The retained lines, rejoined with `'\n'`.
    pub content: String,
    /// Line count of the input text.
    pub original_lines: usize,
    /// Line count of the output text.
    pub kept_lines: usize,
}

impl StripOutcome {
    /// Number of lines dropped by the pass.
    pub fn removed_lines(&self) -> usize {
        self.original_lines - self.kept_lines
    }

    /// True when the pass dropped nothing.
    pub fn is_unchanged(&self) -> bool {
        self.removed_lines() == 0
    }
}

/// Removes marker-annotated functions from source text.
pub struct DeadFunctionStripper {
    marker: String,
}

impl DeadFunctionStripper {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The marker substring this stripper matches.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Run the single forward pass over `content`.
    ///
    /// Every line is visited exactly once and is either retained or
    /// dropped; relative order of retained lines is unchanged.
    pub fn strip(&self, content: &str) -> StripOutcome {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        let mut state = ScanState::Scanning;

        for &line in &lines {
            state = match state {
                ScanState::Scanning => {
                    if line.contains(&self.marker) {
                        ScanState::ArmedForOpening
                    } else {
                        kept.push(line);
                        ScanState::Scanning
                    }
                }
                ScanState::ArmedForOpening => {
                    if line.contains(&self.marker) {
                        // A second marker before the opening line re-arms
                        // the scanner; the flag is already set, so this is
                        // a no-op beyond dropping the line.
                        ScanState::ArmedForOpening
                    } else if is_function_opening(line) {
                        debug!(line, "entering dead function body");
                        ScanState::InsideDeadBody { depth: 0 }
                    } else {
                        // No re-synchronization: the armed flag persists
                        // until an opening line appears, possibly never.
                        kept.push(line);
                        ScanState::ArmedForOpening
                    }
                }
                ScanState::InsideDeadBody { depth } => {
                    let opens = line.matches('{').count() as i32;
                    let closes = line.matches('}').count() as i32;
                    let depth = depth + opens - closes;
                    // The body ends when a closing brace brings the count
                    // to zero or below. Lines without a closing brace never
                    // end it, whatever the count says.
                    if closes > 0 && depth <= 0 {
                        ScanState::Scanning
                    } else {
                        ScanState::InsideDeadBody { depth }
                    }
                }
            };
        }

        let content = kept.join("\n");
        // An empty output still splits into one (empty) line.
        let kept_lines = kept.len().max(1);

        StripOutcome {
            content,
            original_lines: lines.len(),
            kept_lines,
        }
    }
}

impl Default for DeadFunctionStripper {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MARKER)
    }
}

/// Whether a line (ignoring surrounding whitespace) opens a function
/// definition, in either the synchronous or asynchronous style.
fn is_function_opening(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(FN_PREFIX) || trimmed.starts_with(ASYNC_FN_PREFIX)
}
