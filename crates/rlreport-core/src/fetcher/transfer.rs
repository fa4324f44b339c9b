//! Single authenticated GET streamed to a local file.

use super::{FetchError, TransportOptions};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str;

/// Parses the status code out of a status line (`HTTP/1.1 200 OK`, `HTTP/2 404`).
/// Returns None for ordinary header lines.
pub(super) fn parse_status_line(line: &[u8]) -> Option<u32> {
    let line = str::from_utf8(line).ok()?;
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}

/// GETs `link` with a bearer token and writes a 200 body to `path`.
///
/// The destination is created (or truncated) only once the final response is
/// known to be 200, so error statuses never touch the file. Bodies of other
/// responses are read and discarded so the connection is released cleanly.
pub(super) fn get_to_file(
    link: &str,
    token: &str,
    path: &Path,
    transport: &TransportOptions,
) -> Result<u64, FetchError> {
    // A line break would end the header line and start another one.
    if token.contains(['\r', '\n']) {
        return Err(FetchError::InvalidToken);
    }

    let status = Cell::new(0u32);
    let written = Cell::new(0u64);
    let sink: RefCell<Option<File>> = RefCell::new(None);
    let write_error: RefCell<Option<io::Error>> = RefCell::new(None);

    let mut easy = curl::easy::Easy::new();
    easy.url(link)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(t) = transport.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = transport.timeout {
        easy.timeout(t)?;
    }

    let mut list = curl::easy::List::new();
    list.append(&format!("Authorization: Bearer {}", token))?;
    easy.http_headers(list)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            // A new status line starts every response, including each redirect hop.
            if let Some(code) = parse_status_line(data) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            if status.get() != 200 {
                return Ok(data.len());
            }
            let mut out = sink.borrow_mut();
            if out.is_none() {
                match File::create(path) {
                    Ok(f) => *out = Some(f),
                    Err(e) => {
                        write_error.borrow_mut().replace(e);
                        return Ok(0); // abort transfer
                    }
                }
            }
            let Some(file) = out.as_mut() else {
                return Ok(0);
            };
            match file.write_all(data) {
                Ok(()) => {
                    written.set(written.get() + data.len() as u64);
                    Ok(data.len())
                }
                Err(e) => {
                    write_error.borrow_mut().replace(e);
                    Ok(0)
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(source) = write_error.into_inner() {
        return Err(FetchError::LocalWrite {
            path: path.to_path_buf(),
            source,
        });
    }
    performed?;

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::UnexpectedStatus(code));
    }

    let local_write = |source| FetchError::LocalWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = match sink.into_inner() {
        Some(f) => f,
        // Empty 200 body: the write callback never ran.
        None => File::create(path).map_err(local_write)?,
    };
    file.sync_all().map_err(local_write)?;

    Ok(written.get())
}
