//! HTML escaping for values interpolated into generated documents.

use minijinja::{AutoEscape, Error, ErrorKind, Output, State, Value, escape_formatter};

/// Escapes text for use in HTML element content and quoted attribute values.
///
/// Only `& < > " '` are replaced. Forward slashes are left alone so URLs and
/// base64 data URIs pass through at their original size.
///
/// # Example
///
/// ```
/// use folio::export::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(escape_html("data:image/png;base64,a/b+c="), "data:image/png;base64,a/b+c=");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Template formatter that escapes strings with [`escape_html`].
///
/// Safe values (macro output, pre-rendered fragments) and non-string values
/// go through minijinja's default formatter unchanged.
pub(crate) fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    if matches!(state.auto_escape(), AutoEscape::Html)
        && !value.is_safe()
        && let Some(s) = value.as_str()
    {
        return out
            .write_str(&escape_html(s))
            .map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write escaped value"));
    }
    escape_formatter(out, state, value)
}
