use std::fmt::{self, Display};
use std::str::FromStr;

use crate::delimiter::Delimiter;

/// GL String categories, named after the broadest delimiter present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Allele,
    AlleleList,
    Haplotype,
    Genotype,
    GenotypeList,
    MultilocusUnphasedGenotype,
}

impl ResourceType {
    /// The path segment used by GL registry services for this resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Allele => "allele",
            ResourceType::AlleleList => "allele-list",
            ResourceType::Haplotype => "haplotype",
            ResourceType::Genotype => "genotype",
            ResourceType::GenotypeList => "genotype-list",
            ResourceType::MultilocusUnphasedGenotype => "multilocus-unphased-genotype",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allele" => Ok(ResourceType::Allele),
            "allele-list" => Ok(ResourceType::AlleleList),
            "haplotype" => Ok(ResourceType::Haplotype),
            "genotype" => Ok(ResourceType::Genotype),
            "genotype-list" => Ok(ResourceType::GenotypeList),
            "multilocus-unphased-genotype" => Ok(ResourceType::MultilocusUnphasedGenotype),
            _ => Err(format!("Unknown GL resource type: {}", s)),
        }
    }
}

///
/// Determine the resource type of a GL String from the delimiters it contains.
///
/// Delimiters are tested broadest first (`^`, `|`, `+`, `~`, `/`); a string without any
/// delimiter is a single allele.
///
pub fn classify(glstring: &str) -> ResourceType {
    Delimiter::PRECEDENCE
        .iter()
        .find(|d| glstring.contains(d.as_char()))
        .map(|d| d.resource_type())
        .unwrap_or(ResourceType::Allele)
}
