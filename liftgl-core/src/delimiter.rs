use crate::resource::ResourceType;

/// The five GL String delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    MultilocusUnphasedGenotype,
    GenotypeList,
    Genotype,
    Haplotype,
    AlleleList,
}

impl Delimiter {
    /// Broadest scope first. The normalizer and the classifier both walk this order.
    pub const PRECEDENCE: [Delimiter; 5] = [
        Delimiter::MultilocusUnphasedGenotype,
        Delimiter::GenotypeList,
        Delimiter::Genotype,
        Delimiter::Haplotype,
        Delimiter::AlleleList,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::MultilocusUnphasedGenotype => '^',
            Delimiter::GenotypeList => '|',
            Delimiter::Genotype => '+',
            Delimiter::Haplotype => '~',
            Delimiter::AlleleList => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '^' => Some(Delimiter::MultilocusUnphasedGenotype),
            '|' => Some(Delimiter::GenotypeList),
            '+' => Some(Delimiter::Genotype),
            '~' => Some(Delimiter::Haplotype),
            '/' => Some(Delimiter::AlleleList),
            _ => None,
        }
    }

    /// The resource type of a GL String whose broadest delimiter is this one.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Delimiter::MultilocusUnphasedGenotype => ResourceType::MultilocusUnphasedGenotype,
            Delimiter::GenotypeList => ResourceType::GenotypeList,
            Delimiter::Genotype => ResourceType::Genotype,
            Delimiter::Haplotype => ResourceType::Haplotype,
            Delimiter::AlleleList => ResourceType::AlleleList,
        }
    }
}

pub fn is_delimiter(c: char) -> bool {
    Delimiter::from_char(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DELIMITERS;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_precedence_matches_delimiter_chars() {
        let chars: Vec<char> = Delimiter::PRECEDENCE.iter().map(|d| d.as_char()).collect();
        assert_eq!(chars, DELIMITERS.to_vec());
    }

    #[rstest]
    fn test_char_round_trip() {
        for delimiter in Delimiter::PRECEDENCE {
            assert_eq!(Delimiter::from_char(delimiter.as_char()), Some(delimiter));
        }
    }

    #[rstest]
    #[case('*', false)]
    #[case(':', false)]
    #[case('-', false)]
    #[case('^', true)]
    #[case('/', true)]
    fn test_is_delimiter(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_delimiter(c), expected);
    }
}
