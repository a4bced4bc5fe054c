//! File naming for exported documents.

const SUFFIX: &str = "portfolio.html";

/// The download file name for a person's exported portfolio.
///
/// The name is lowercased and each run of whitespace becomes one hyphen.
/// Other characters, including punctuation, are kept. A blank name gives
/// plain `portfolio.html`.
///
/// Leading and trailing whitespace is dropped rather than turned into
/// hyphens, so `" Jane "` names `jane-portfolio.html`, not `-jane--portfolio.html`.
///
/// # Examples
///
/// ```
/// use folio::infra::export_filename;
///
/// assert_eq!(export_filename("Jane Q. Doe"), "jane-q.-doe-portfolio.html");
/// assert_eq!(export_filename("  "), "portfolio.html");
/// ```
pub fn export_filename(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if stem.is_empty() {
        SUFFIX.to_string()
    } else {
        format!("{stem}-{SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(export_filename("Alex Morgan"), "alex-morgan-portfolio.html");
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(export_filename("Jane Q. Doe"), "jane-q.-doe-portfolio.html");
        assert_eq!(export_filename("O'Brien"), "o'brien-portfolio.html");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(export_filename("  Jane \t  Doe  "), "jane-doe-portfolio.html");
    }

    #[test]
    fn edge_whitespace_is_dropped() {
        assert_eq!(export_filename(" Jane "), "jane-portfolio.html");
        assert_eq!(export_filename("\nJane Doe\t"), "jane-doe-portfolio.html");
    }

    #[test]
    fn lowercases_unicode() {
        assert_eq!(export_filename("Zoë Ångström"), "zoë-ångström-portfolio.html");
    }

    #[test]
    fn blank_name_has_no_stem() {
        assert_eq!(export_filename(""), "portfolio.html");
        assert_eq!(export_filename(" \n "), "portfolio.html");
    }
}
