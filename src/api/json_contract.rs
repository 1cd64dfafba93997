use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::chart_document::ChartDocument;

pub const CHART_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope around a chart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocumentJsonContractV1 {
    pub schema_version: u32,
    pub document: ChartDocument,
}

impl ChartDocument {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDocumentJsonContractV1 {
            schema_version: CHART_DOCUMENT_JSON_SCHEMA_V1,
            document: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize document contract v1: {e}"))
        })
    }

    /// Parses either a bare document or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(document) = serde_json::from_str::<Self>(input) {
            return Ok(document);
        }
        let payload: ChartDocumentJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse document json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DOCUMENT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported document schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.document)
    }
}
