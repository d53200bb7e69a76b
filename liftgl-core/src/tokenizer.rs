use std::borrow::Cow;

use fxhash::FxHashSet as HashSet;

use crate::delimiter::is_delimiter;

///
/// Split a GL String into the distinct allele tokens it references.
///
/// Repeated alleles (e.g. a homozygous genotype) are returned once, in the order they first
/// appear. An empty or delimiter-only string yields the empty token, which no table lookup
/// will ever match.
///
/// # Arguments:
/// - `glstring`: the GL String to split
///
pub fn tokenize(glstring: &str) -> Vec<&str> {
    let mut seen = HashSet::default();
    glstring
        .split(is_delimiter)
        .filter(|token| seen.insert(*token))
        .collect()
}

///
/// Rebuild a GL String, replacing every token with `replace(token)` and copying the
/// delimiters between tokens verbatim.
///
/// Tokens are replaced by span, so a token never matches inside a longer token
/// (`HLA-A*01:01` is left alone within `HLA-A*01:01:01`).
///
pub fn substitute_tokens<'a, F>(glstring: &'a str, mut replace: F) -> String
where
    F: FnMut(&'a str) -> Cow<'a, str>,
{
    let mut out = String::with_capacity(glstring.len());
    let mut start = 0;

    for (i, c) in glstring.char_indices() {
        if is_delimiter(c) {
            out.push_str(&replace(&glstring[start..i]));
            out.push(c);
            start = i + c.len_utf8();
        }
    }
    out.push_str(&replace(&glstring[start..]));

    out
}
