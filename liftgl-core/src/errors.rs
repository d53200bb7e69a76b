use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiftoverError {
    #[error("Can't read allele table {path}: {reason}")]
    TableLoad { path: String, reason: String },

    #[error("Malformed allele table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    #[error("{id} appears on more than one row of the allele table")]
    DuplicateIdentifier { id: String },

    #[error("Invalid IMGT/HLA version: {0}. Expected three dotted fields, e.g. 3.25.0")]
    InvalidVersion(String),

    #[error("IMGT/HLA version {0} is not present in the allele table")]
    UnknownVersion(String),

    #[error("{allele} does not exist in IMGT/HLA ver {version}")]
    AlleleNotFound { allele: String, version: String },

    #[error("{allele} has more than one id: {}", ids.join(", "))]
    AmbiguousAllele { allele: String, ids: Vec<String> },

    #[error("Empty target GL String, all alleles dropped")]
    EmptyTarget,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LiftoverError>;
