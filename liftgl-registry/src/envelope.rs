use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::registry::RegisteredGl;

/// The outcome of a registered liftover: both GL Strings and where the registry stored them.
///
/// Fields are declared in alphabetical key order, which is the order they serialize in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftoverEnvelope {
    pub source_gl: String,
    pub source_uri: String,
    pub target_gl: String,
    pub target_uri: String,
}

impl LiftoverEnvelope {
    pub fn new(source: RegisteredGl, target: RegisteredGl) -> Self {
        LiftoverEnvelope {
            source_gl: source.glstring,
            source_uri: source.location,
            target_gl: target.glstring,
            target_uri: target.location,
        }
    }

    /// Serialize as pretty printed JSON with four space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn envelope() -> LiftoverEnvelope {
        LiftoverEnvelope::new(
            RegisteredGl {
                glstring: "HLA-A*24:03:01".to_string(),
                location: "http://gl.nmdp.org/imgt-hla/3.20.0/allele/1".to_string(),
            },
            RegisteredGl {
                glstring: "HLA-A*24:03:01:01".to_string(),
                location: "http://gl.nmdp.org/imgt-hla/3.25.0/allele/2".to_string(),
            },
        )
    }

    #[rstest]
    fn test_json_layout(envelope: LiftoverEnvelope) {
        let expected = r#"{
    "sourceGl": "HLA-A*24:03:01",
    "sourceUri": "http://gl.nmdp.org/imgt-hla/3.20.0/allele/1",
    "targetGl": "HLA-A*24:03:01:01",
    "targetUri": "http://gl.nmdp.org/imgt-hla/3.25.0/allele/2"
}"#;
        assert_eq!(envelope.to_json().unwrap(), expected);
    }

    #[rstest]
    fn test_exactly_four_keys(envelope: LiftoverEnvelope) {
        let value = serde_json::to_value(&envelope).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["sourceGl", "sourceUri", "targetGl", "targetUri"]);
    }
}
