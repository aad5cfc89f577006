//! Delimited summary-file output.
//!
//! The format is intentionally simple: a fixed header row
//! `type,package,k,i,j,value,desc`, one data row per finding in table
//! order, with the description quoted per standard delimited-text rules
//! when it contains a comma, quote, or newline.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use seep_core::CheckError;

use crate::table::SummaryTable;

/// Header row of the delimited summary format.
pub const HEADER: &str = "type,package,k,i,j,value,desc";

/// Format a finding value the way both the delimited file and the detailed
/// dump print it.
pub fn format_value(v: f64) -> String {
    format!("{v}")
}

/// Quote a field if it contains a delimiter, quote, or newline.
fn escape_field(s: &str) -> Cow<'_, str> {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

/// Render the whole table as delimited text, header included.
pub fn render_delimited(table: &SummaryTable) -> String {
    let mut out = String::with_capacity(64 * (table.len() + 1));
    out.push_str(HEADER);
    out.push('\n');
    for f in table.iter() {
        let (k, i, j) = f.indices();
        let _ = writeln!(
            out,
            "{},{},{k},{i},{j},{},{}",
            f.severity,
            escape_field(&f.package),
            format_value(f.value),
            escape_field(&f.desc),
        );
    }
    out
}

/// Write the table to `path`, whole or not at all.
///
/// The text is rendered in memory, written to a sibling temp file, and
/// renamed over the target, so an IO failure leaves the target absent or
/// untouched rather than truncated.
pub fn write_summary_file(path: &Path, table: &SummaryTable) -> Result<(), CheckError> {
    let text = render_delimited(table);
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);

    let io_err = |source: io::Error| CheckError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(tmp, text.as_bytes()).map_err(io_err)?;
    if let Err(e) = fs::rename(tmp, path) {
        let _ = fs::remove_file(tmp);
        return Err(io_err(e));
    }
    Ok(())
}
