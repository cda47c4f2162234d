use serde::{Deserialize, Serialize};

/// Legacy archive record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub id: String,
    pub session_id: String,
    pub name: Option<String>,
    pub status: String,
}

/// Legacy live broadcast record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    pub id: String,
    pub session_id: String,
    pub status: String,
}

/// Legacy published stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    pub name: String,
    pub video_type: String,
    pub layout_class_list: Vec<String>,
}

/// Result of a SIP dial-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipInterconnect {
    pub id: String,
    pub connection_id: String,
    pub stream_id: String,
}
