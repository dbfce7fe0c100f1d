use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Matches patterns of the form prefix[NN-MM], anchored so that trailing
// text after the closing bracket is rejected.
static RANGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)\[([0-9]+)-([0-9]+)\]$").expect("range pattern regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("malformed hostname range pattern: '{0}'")]
    Malformed(String),
    #[error("range start {start} exceeds end {end} in pattern '{pattern}'")]
    DescendingRange {
        pattern: String,
        start: u32,
        end: u32,
    },
}

/// Expands a SLURM/Bash style hostname range into an explicit list.
///
/// `lc01g[01-03]` expands to `["lc01g01", "lc01g02", "lc01g03"]`; a plain
/// literal with no bracket syntax is returned unchanged as a single
/// element. Numerals are zero-padded to at least two digits.
pub fn expand_hostname_pattern(pattern: &str) -> Result<Vec<String>, PatternError> {
    if !pattern.contains('[') {
        return Ok(vec![pattern.to_string()]);
    }

    let captures = RANGE_PATTERN
        .captures(pattern)
        .ok_or_else(|| PatternError::Malformed(pattern.to_string()))?;

    let prefix = &captures[1];
    let start = parse_bound(&captures[2], pattern)?;
    let end = parse_bound(&captures[3], pattern)?;

    if start > end {
        return Err(PatternError::DescendingRange {
            pattern: pattern.to_string(),
            start,
            end,
        });
    }

    let hostnames = (start..=end)
        .map(|i| format!("{prefix}{i:02}"))
        .collect();

    Ok(hostnames)
}

fn parse_bound(bound: &str, pattern: &str) -> Result<u32, PatternError> {
    bound
        .parse::<u32>()
        .map_err(|_| PatternError::Malformed(pattern.to_string()))
}
