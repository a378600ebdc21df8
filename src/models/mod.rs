//! Records decoded from the collection API.

mod artwork;
mod exhibition;

pub use artwork::{Artist, Artwork, ArtworkId, ArtworkImage};
pub use exhibition::{Exhibition, ExhibitionImage};

use serde::{Deserialize, Deserializer};

/// List envelope shared by every list endpoint: `{ "records": [...] }`.
///
/// Other envelope fields (the API's `info` paging block) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RecordsEnvelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "deserialize_null_default")]
    pub records: Vec<T>,
}

/// Helper to deserialize a field that may be `null` into its default value.
///
/// The API sends `null` and omits fields interchangeably for empty arrays;
/// pair with `#[serde(default)]` to cover both.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_records() {
        let json = r#"{"info": {"totalrecords": 2}, "records": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]}"#;
        let envelope: RecordsEnvelope<Artwork> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.records.len(), 2);
        assert_eq!(envelope.records[1].id, ArtworkId(2));
    }

    #[test]
    fn test_envelope_null_records() {
        let envelope: RecordsEnvelope<Artwork> =
            serde_json::from_str(r#"{"records": null}"#).unwrap();
        assert!(envelope.records.is_empty());
    }

    #[test]
    fn test_envelope_missing_records_is_empty() {
        let envelope: RecordsEnvelope<Exhibition> =
            serde_json::from_str(r#"{"info": {"totalrecords": 0}}"#).unwrap();
        assert!(envelope.records.is_empty());
    }

    #[test]
    fn test_envelope_rejects_wrong_shape() {
        let result = serde_json::from_str::<RecordsEnvelope<Artwork>>(r#"{"records": {"id": 1}}"#);
        assert!(result.is_err());
    }
}
