//!
//! Cleanup of a freshly lifted GL String.
//!
//! Dropping an allele leaves its delimiters behind. This module removes the missing
//! markers and resolves what is left: delimiter runs at either end of the string are
//! stripped and runs in the middle collapse to their broadest delimiter, so a dropped
//! allele never joins alleles of two loci with a narrower delimiter than stood between them.
//!
use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::MISSING_ALLELE;

static LEADING_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[/~+|^]+").unwrap());
static TRAILING_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/~+|^]+$").unwrap());

// precedence order, each pattern only sees delimiters left over by the ones before it
static COLLAPSE_RULES: Lazy<[(Regex, &'static str); 5]> = Lazy::new(|| {
    [
        (Regex::new(r"[/~+|^]*\^[/~+|^]*").unwrap(), "^"),
        (Regex::new(r"[/~+|]*\|[/~+|]*").unwrap(), "|"),
        (Regex::new(r"[/~+]*\+[/~+]*").unwrap(), "+"),
        (Regex::new(r"[/~]*~[/~]*").unwrap(), "~"),
        (Regex::new(r"/+").unwrap(), "/"),
    ]
});

///
/// Remove dropped alleles from a lifted GL String and repair the delimiters around them.
///
/// Returns the empty string when every allele was dropped.
///
/// # Arguments:
/// - `raw`: GL String as produced by [`crate::render::to_target`]
///
pub fn clean(raw: &str) -> String {
    let mut glstring = raw.to_string();

    // removing one marker can splice another one together
    while glstring.contains(MISSING_ALLELE) {
        glstring = glstring.replace(MISSING_ALLELE, "");
    }

    let glstring = TRAILING_RUN.replace(&glstring, "");
    let mut glstring = LEADING_RUN.replace(&glstring, "").into_owned();

    for (pattern, delimiter) in COLLAPSE_RULES.iter() {
        glstring = pattern.replace_all(&glstring, *delimiter).into_owned();
    }

    glstring
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("HLA-nan^+HLA-nan", "")]
    #[case("HLA-nan", "")]
    #[case("HLA-nan/HLA-nan+HLA-nan", "")]
    #[case("A+HLA-nan~B", "A+B")]
    #[case("HLA-nan^A+B", "A+B")]
    #[case("A+B^HLA-nan", "A+B")]
    #[case("A/HLA-nan/B", "A/B")]
    #[case("A/HLA-nan+B", "A+B")]
    #[case("HLA-naHLA-nann+A", "A")]
    fn test_missing_markers(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean(raw), expected);
    }

    // the broader of the two delimiters around a dropped allele always survives
    #[rstest]
    #[case("A^HLA-nan|B", "A^B")]
    #[case("A^HLA-nan+B", "A^B")]
    #[case("A^HLA-nan~B", "A^B")]
    #[case("A^HLA-nan/B", "A^B")]
    #[case("A|HLA-nan+B", "A|B")]
    #[case("A|HLA-nan~B", "A|B")]
    #[case("A|HLA-nan/B", "A|B")]
    #[case("A+HLA-nan~B", "A+B")]
    #[case("A+HLA-nan/B", "A+B")]
    #[case("A~HLA-nan/B", "A~B")]
    #[case("A/HLA-nan~B", "A~B")]
    #[case("A~HLA-nan+B", "A+B")]
    #[case("A+HLA-nan|B", "A|B")]
    #[case("A|HLA-nan^B", "A^B")]
    #[case("A+HLA-nan/HLA-nan^B", "A^B")]
    fn test_dropped_allele_keeps_broader_delimiter(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean(raw), expected);
    }

    #[rstest]
    #[case("^A+B^", "A+B")]
    #[case("+/~A", "A")]
    #[case("A|~/", "A")]
    #[case("^^^", "")]
    #[case("", "")]
    fn test_strips_leading_and_trailing_runs(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean(raw), expected);
    }

    #[rstest]
    #[case("A/+^|~B", "A^B")]
    #[case("A+|/B", "A|B")]
    #[case("A~+/B", "A+B")]
    #[case("A/~/B", "A~B")]
    #[case("A///B", "A/B")]
    #[case("A^^B||C++D~~E//F", "A^B|C+D~E/F")]
    fn test_collapses_runs_by_precedence(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean(raw), expected);
    }

    #[rstest]
    #[case("HLA-A*01:01:01:01/HLA-A*01:02+HLA-A*24:03:01:01")]
    #[case("HLA-A*02:01~HLA-B*08:01|HLA-A*02:01~HLA-B*08:02")]
    fn test_valid_glstrings_are_unchanged(#[case] glstring: &str) {
        assert_eq!(clean(glstring), glstring);
    }

    #[rstest]
    #[case("HLA-nan^+HLA-nan")]
    #[case("A+HLA-nan~B")]
    #[case("^A+B^")]
    #[case("A/~+HLA-nan|HLA-nan/B~~C^")]
    #[case("HLA-naHLA-nann~HLA-nan")]
    #[case("//A^|B++C~/D//")]
    fn test_clean_is_idempotent(#[case] raw: &str) {
        let once = clean(raw);
        assert_eq!(clean(&once), once);
    }
}
