//! Uniform result shape returned by relayer write/read operations.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::message::Fields;

/// `{success, error?, result?}` as returned by the relayer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultModel {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<Fields>,
}

impl ResultModel {
    /// Decode the structured `result` into `T`. `Ok(None)` when there is none.
    pub fn decode_result<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.result
            .as_ref()
            .map(|fields| serde_json::from_value(serde_json::Value::Object(fields.clone())))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::{HotkeyStorage, MinerStorage};

    #[test]
    fn test_result_model_defaults() {
        let model: ResultModel = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(model.success);
        assert!(model.error.is_none());
        assert!(model.result.is_none());
        assert!(model.decode_result::<MinerStorage>().unwrap().is_none());
    }

    #[test]
    fn test_result_model_error() {
        let model: ResultModel =
            serde_json::from_str(r#"{"success": false, "error": "not registered"}"#).unwrap();
        assert!(!model.success);
        assert_eq!(model.error.as_deref(), Some("not registered"));
    }

    #[test]
    fn test_decode_result_into_storage() {
        let model: ResultModel = serde_json::from_str(
            r#"{"success": true, "result": {"collection_id": 12, "signature": null, "ss58_address": null}}"#,
        )
        .unwrap();
        let storage: HotkeyStorage = model.decode_result().unwrap().unwrap();
        match storage {
            HotkeyStorage::Miner(miner) => assert_eq!(miner.payload.collection_id, 12),
            other => panic!("Expected miner storage, got {other:?}"),
        }
    }

    #[test]
    fn test_result_must_be_an_object() {
        let parsed = serde_json::from_str::<ResultModel>(r#"{"success": true, "result": [1]}"#);
        assert!(parsed.is_err());
    }
}
