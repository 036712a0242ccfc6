//! SRT parser for locally stored subtitle files.

use super::error::ParseError;
use super::timestamp::parse_timestamp;
use super::Cue;

/// Parse an SRT document into cues, in file order.
///
/// The numeric index line is optional. Payload lines are joined with `\n`.
pub fn parse_srt(input: &str) -> Result<Vec<Cue>, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut cues = Vec::new();
    let mut lines = input.lines().enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Index line can be omitted; the timing line then comes first
        let (timing_idx, timing) = if line.contains("-->") {
            (idx, line)
        } else {
            match lines.next() {
                Some((next_idx, next)) => (next_idx, next.trim()),
                None => return Err(ParseError::MissingArrow { line: idx + 1 }),
            }
        };
        let line_no = timing_idx + 1;

        let (start_raw, end_raw) = timing
            .split_once("-->")
            .map(|(a, b)| (a.trim(), b.trim()))
            .ok_or(ParseError::MissingArrow { line: line_no })?;

        let start = parse_timestamp(start_raw).ok_or_else(|| ParseError::InvalidTimestamp {
            value: start_raw.to_string(),
            line: line_no,
        })?;
        let end = parse_timestamp(end_raw).ok_or_else(|| ParseError::InvalidTimestamp {
            value: end_raw.to_string(),
            line: line_no,
        })?;

        if end < start {
            return Err(ParseError::EndBeforeStart { line: line_no });
        }

        let mut text_lines = Vec::new();
        while let Some((_, next)) = lines.next_if(|(_, l)| !l.trim().is_empty()) {
            text_lines.push(next.trim());
        }

        cues.push(Cue::new(start, end, text_lines.join("\n")));
    }

    Ok(cues)
}
