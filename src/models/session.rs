use std::fmt;

use serde::{Deserialize, Serialize};

/// Legacy media mode. Only an explicit `Routed` forces server-forwarded
/// media on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaMode {
    Routed,
    #[default]
    Relayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveMode {
    Always,
    #[default]
    Manual,
}

/// Options accepted by `create_session`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOptions {
    #[serde(default)]
    pub media_mode: MediaMode,
    #[serde(default)]
    pub archive_mode: ArchiveMode,
}

/// Legacy session backed by a backend room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Room URL
    pub session_id: String,
    pub media_mode: MediaMode,
    pub archive_mode: ArchiveMode,
}

/// Legacy methods with no backend counterpart yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyOperation {
    AddArchiveStream,
    AddBroadcastStream,
    DeleteArchive,
    Dial,
    ForceDisconnect,
    GetArchive,
    GetBroadcast,
    GetStream,
    ListArchives,
    ListBroadcasts,
    ListStreams,
    PlayDtmf,
    RemoveArchiveStream,
    RemoveBroadcastStream,
    SetArchiveLayout,
    SetBroadcastLayout,
    SetStreamClassLists,
    Signal,
    StartArchive,
    StartBroadcast,
    StopArchive,
    StopBroadcast,
}

impl LegacyOperation {
    /// Method name as the legacy API spells it
    pub fn method_name(&self) -> &'static str {
        match self {
            LegacyOperation::AddArchiveStream => "addArchiveStream",
            LegacyOperation::AddBroadcastStream => "addBroadcastStream",
            LegacyOperation::DeleteArchive => "deleteArchive",
            LegacyOperation::Dial => "dial",
            LegacyOperation::ForceDisconnect => "forceDisconnect",
            LegacyOperation::GetArchive => "getArchive",
            LegacyOperation::GetBroadcast => "getBroadcast",
            LegacyOperation::GetStream => "getStream",
            LegacyOperation::ListArchives => "listArchives",
            LegacyOperation::ListBroadcasts => "listBroadcasts",
            LegacyOperation::ListStreams => "listStreams",
            LegacyOperation::PlayDtmf => "playDTMF",
            LegacyOperation::RemoveArchiveStream => "removeArchiveStream",
            LegacyOperation::RemoveBroadcastStream => "removeBroadcastStream",
            LegacyOperation::SetArchiveLayout => "setArchiveLayout",
            LegacyOperation::SetBroadcastLayout => "setBroadcastLayout",
            LegacyOperation::SetStreamClassLists => "setStreamClassLists",
            LegacyOperation::Signal => "signal",
            LegacyOperation::StartArchive => "startArchive",
            LegacyOperation::StartBroadcast => "startBroadcast",
            LegacyOperation::StopArchive => "stopArchive",
            LegacyOperation::StopBroadcast => "stopBroadcast",
        }
    }
}

impl fmt::Display for LegacyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
