use serde::Deserialize;

/// One page of the records listing endpoint. The `offset` cursor is opaque;
/// its absence ends pagination.
#[derive(Debug, Deserialize)]
pub struct RecordsPage {
    pub records: Vec<Record>,
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Record {
    pub id: String,
    pub fields: RecordFields,
}

/// Only the two display attributes the digest needs; every other field in the
/// table is dropped during deserialization.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RecordFields {
    #[serde(rename = "Record Name")]
    pub record_name: Option<String>,
    #[serde(rename = "Phase")]
    pub phase: Option<String>,
}
