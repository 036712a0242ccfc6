//! WebVTT parser.
//!
//! Covers the subset lecture subtitles use: the `WEBVTT` signature line,
//! an optional header, `NOTE`/`STYLE`/`REGION` blocks (skipped), optional
//! cue identifiers and cue settings after the end timestamp (ignored).

use super::error::ParseError;
use super::timestamp::parse_timestamp;
use super::Cue;

/// Parse a WebVTT document into cues, in file order.
pub fn parse_vtt(input: &str) -> Result<Vec<Cue>, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let lines: Vec<&str> = input.lines().map(|l| l.trim_end_matches('\r')).collect();

    let signature = lines.first().copied().unwrap_or_default();
    if !is_signature(signature) {
        return Err(ParseError::MissingSignature);
    }

    // Skip the header block (signature plus any lines up to the first blank)
    let mut idx = 1;
    while idx < lines.len() && !lines[idx].trim().is_empty() {
        idx += 1;
    }

    let mut cues = Vec::new();
    while idx < lines.len() {
        if lines[idx].trim().is_empty() {
            idx += 1;
            continue;
        }

        let block_start = idx;
        let mut block_end = idx;
        while block_end < lines.len() && !lines[block_end].trim().is_empty() {
            block_end += 1;
        }
        let block = &lines[block_start..block_end];
        idx = block_end;

        if is_skipped_block(block[0]) {
            continue;
        }

        // Optional identifier line before the timing line
        let (timing_offset, timing) = match block.iter().position(|l| l.contains("-->")) {
            Some(pos) if pos <= 1 => (pos, block[pos]),
            _ => {
                return Err(ParseError::MissingArrow {
                    line: block_start + 1,
                })
            }
        };
        let line_no = block_start + timing_offset + 1;

        let cue = parse_cue(timing, &block[timing_offset + 1..], line_no)?;
        cues.push(cue);
    }

    Ok(cues)
}

fn is_signature(line: &str) -> bool {
    match line.strip_prefix("WEBVTT") {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', '\t']),
        None => false,
    }
}

fn is_skipped_block(first_line: &str) -> bool {
    let keyword = first_line.split_whitespace().next().unwrap_or_default();
    matches!(keyword, "NOTE" | "STYLE" | "REGION") && !first_line.contains("-->")
}

fn parse_cue(timing: &str, payload: &[&str], line: usize) -> Result<Cue, ParseError> {
    let (start_raw, rest) = timing
        .split_once("-->")
        .ok_or(ParseError::MissingArrow { line })?;
    let end_raw = rest.split_whitespace().next().unwrap_or_default();

    let start = parse_timestamp(start_raw).ok_or_else(|| ParseError::InvalidTimestamp {
        value: start_raw.trim().to_string(),
        line,
    })?;
    let end = parse_timestamp(end_raw).ok_or_else(|| ParseError::InvalidTimestamp {
        value: end_raw.to_string(),
        line,
    })?;

    if end < start {
        return Err(ParseError::EndBeforeStart { line });
    }

    Ok(Cue::new(start, end, payload.join("\n")))
}
