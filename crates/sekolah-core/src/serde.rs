use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Deserializes an optional organisational ID, treating `""` the same as `null`.
///
/// Joined rows coming out of the backend occasionally carry empty strings for
/// unset foreign keys; those must read as "no ID" rather than fail.
pub fn deserialize_optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<Uuid>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(s.trim())
            .map(|uuid| Some(T::from(uuid)))
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        desa_id: Option<Uuid>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let row: Row = serde_json::from_str(r#"{"desa_id":""}"#).unwrap();
        assert_eq!(row.desa_id, None);
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.desa_id, None);
        let row: Row = serde_json::from_str(r#"{"desa_id":null}"#).unwrap();
        assert_eq!(row.desa_id, None);
    }

    #[test]
    fn test_valid_uuid_parses() {
        let row: Row =
            serde_json::from_str(r#"{"desa_id":"12345678-1234-1234-1234-123456789abc"}"#).unwrap();
        assert_eq!(
            row.desa_id,
            Some(Uuid::from_u128(0x12345678_1234_1234_1234_123456789abc))
        );
    }

    #[test]
    fn test_invalid_uuid_is_error() {
        let result: Result<Row, _> = serde_json::from_str(r#"{"desa_id":"not-a-uuid"}"#);
        assert!(result.is_err());
    }
}
