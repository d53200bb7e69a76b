/// Prefix carried by every allele token in a GL String, but not by the allele history cells.
pub const HLA_PREFIX: &str = "HLA-";

/// Rendering of a stable identifier that has no allele name in the target version.
///
/// It is the stringified "missing value" of the history table with the `HLA-` prefix
/// attached, so the normalizer can remove dropped alleles with a single rule.
pub const MISSING_ALLELE: &str = "HLA-nan";

/// All GL String delimiters, broadest scope first.
pub const DELIMITERS: [char; 5] = ['^', '|', '+', '~', '/'];

pub const DEFAULT_TARGET_VERSION: &str = "3.25.0";
