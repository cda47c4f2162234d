use serde::{Deserialize, Serialize};

/// Switchover threshold sent when routing through the server is forced
pub const FORCED_SFU_SWITCHOVER: f64 = 0.5;

/// Room data kept from the backend's creation response.
/// The backend returns much more; only these fields are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDescriptor {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Media properties for a new room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomProperties {
    pub start_audio_off: bool,
    pub start_video_off: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfu_switchover: Option<f64>,
}

/// Body of `POST /rooms/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRoomRequest {
    pub properties: RoomProperties,
}

impl CreateRoomRequest {
    pub fn new(force_topology_switch: bool) -> Self {
        Self {
            properties: RoomProperties {
                start_audio_off: false,
                start_video_off: false,
                sfu_switchover: force_topology_switch.then_some(FORCED_SFU_SWITCHOVER),
            },
        }
    }
}

/// Subset of the account-info response
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub domain_id: Option<String>,
}
