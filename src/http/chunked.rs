//! Reassembly of a `Transfer-Encoding: chunked` body.

use alloc::vec::Vec;

use super::ErrorKind;
use super::find_slice;

const CRLF: &[u8] = b"\r\n";

/// Decodes a complete chunked body region.
///
/// Stops at the zero-size chunk (trailers are ignored) or when the region is
/// exhausted. A missing size-line terminator, a size that is not hex, a chunk
/// longer than the remaining bytes or a chunk not followed by CRLF fail with
/// [`ErrorKind::InvalidResponse`]; whatever was decoded so far is dropped.
pub fn decode(mut data: &[u8]) -> Result<Vec<u8>, ErrorKind> {
    let mut body = Vec::new();

    while !data.is_empty() {
        let line_end = find_slice(data, CRLF).ok_or(ErrorKind::InvalidResponse)?;
        let size = parse_size(&data[..line_end])?;
        if size == 0 {
            break;
        }

        let start = line_end + CRLF.len();
        let end = start
            .checked_add(size)
            .filter(|&end| end <= data.len())
            .ok_or(ErrorKind::InvalidResponse)?;

        body.extend_from_slice(&data[start..end]);

        data = data[end..]
            .strip_prefix(CRLF)
            .ok_or(ErrorKind::InvalidResponse)?;
    }

    Ok(body)
}

/// Parses a chunk-size line, ignoring any `;` extensions.
fn parse_size(line: &[u8]) -> Result<usize, ErrorKind> {
    let line = core::str::from_utf8(line).map_err(|_| ErrorKind::InvalidResponse)?;
    let digits = line.split(';').next().unwrap_or("").trim();
    usize::from_str_radix(digits, 16).map_err(|_| ErrorKind::InvalidResponse)
}
