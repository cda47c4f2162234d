//! Legacy session API surface on top of backend rooms.
//!
//! Domain resolution and token minting are two explicit steps: resolve a
//! [`DomainId`] once, then pass it in [`TokenOptions`] for every token.
//! Nothing is cached here.

use std::sync::Arc;

use crate::auth::TokenMinter;
use crate::backend::BackendClient;
use crate::config::Config;
use crate::error::{BridgeError, Result};
use crate::models::{
    Archive, ArchiveMode, Broadcast, DomainId, LegacyOperation, MediaMode, Session,
    SessionOptions, SipInterconnect, Stream, TokenOptions,
};

#[derive(Clone)]
pub struct SessionBridge {
    api_key: Arc<str>,
    backend: Arc<BackendClient>,
    minter: Arc<TokenMinter>,
}

impl SessionBridge {
    pub fn new(config: Config) -> Result<Self> {
        let backend = BackendClient::new(&config)?;
        let minter = TokenMinter::new(&config)?;
        Ok(Self::from_parts(config.api_key, backend, minter))
    }

    pub fn from_parts(
        api_key: impl Into<Arc<str>>,
        backend: BackendClient,
        minter: TokenMinter,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            backend: Arc::new(backend),
            minter: Arc::new(minter),
        }
    }

    /// Create a backend room and present it as a legacy session.
    /// The room URL becomes the session id.
    pub async fn create_session(&self, options: SessionOptions) -> Result<Session> {
        if options.archive_mode == ArchiveMode::Always {
            tracing::warn!("Archiving is not supported, session will use manual archive mode");
        }

        let force_sfu = options.media_mode == MediaMode::Routed;
        let room = self
            .backend
            .create_room(&self.api_key, force_sfu)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create session"))?;

        tracing::info!(room_id = %room.id, name = %room.name, "Session created");

        Ok(Session {
            session_id: room.url,
            media_mode: options.media_mode,
            archive_mode: ArchiveMode::Manual,
        })
    }

    /// Look up the account's domain id
    pub async fn resolve_domain_id(&self) -> Result<DomainId> {
        let domain_id = self
            .backend
            .get_domain_id(&self.api_key)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to resolve domain ID"))?;

        tracing::debug!(domain_id = %domain_id, "Domain ID resolved");
        Ok(domain_id)
    }

    /// Self-signed meeting token for `session_id`
    pub fn generate_token(&self, session_id: &str, options: &TokenOptions) -> Result<String> {
        let token = self.minter.mint(&self.api_key, session_id, Some(options), None)?;
        tracing::debug!(session_id = %session_id, role = ?options.role, "Token generated");
        Ok(token)
    }

    /// Result for any legacy method without a backend implementation
    pub fn unsupported<T>(&self, operation: LegacyOperation) -> Result<T> {
        tracing::debug!(operation = %operation, "Unsupported legacy operation called");
        Err(BridgeError::NotSupported(operation))
    }

    pub fn force_disconnect(&self, _session_id: &str, _connection_id: &str) -> Result<()> {
        self.unsupported(LegacyOperation::ForceDisconnect)
    }

    pub fn signal(
        &self,
        _session_id: &str,
        _connection_id: Option<&str>,
        _signal_type: &str,
        _data: &str,
    ) -> Result<()> {
        self.unsupported(LegacyOperation::Signal)
    }

    pub fn play_dtmf(&self, _session_id: &str, _connection_id: &str, _digits: &str) -> Result<()> {
        self.unsupported(LegacyOperation::PlayDtmf)
    }

    pub fn delete_archive(&self, _archive_id: &str) -> Result<()> {
        self.unsupported(LegacyOperation::DeleteArchive)
    }

    pub fn add_archive_stream(&self, _archive_id: &str, _stream_id: &str) -> Result<()> {
        self.unsupported(LegacyOperation::AddArchiveStream)
    }

    pub fn remove_archive_stream(&self, _archive_id: &str, _stream_id: &str) -> Result<()> {
        self.unsupported(LegacyOperation::RemoveArchiveStream)
    }

    pub fn add_broadcast_stream(&self, _broadcast_id: &str, _stream_id: &str) -> Result<()> {
        self.unsupported(LegacyOperation::AddBroadcastStream)
    }

    pub fn remove_broadcast_stream(&self, _broadcast_id: &str, _stream_id: &str) -> Result<()> {
        self.unsupported(LegacyOperation::RemoveBroadcastStream)
    }

    pub fn set_archive_layout(
        &self,
        _archive_id: &str,
        _layout_type: &str,
        _stylesheet: Option<&str>,
    ) -> Result<()> {
        self.unsupported(LegacyOperation::SetArchiveLayout)
    }

    pub fn set_broadcast_layout(
        &self,
        _broadcast_id: &str,
        _layout_type: &str,
        _stylesheet: Option<&str>,
    ) -> Result<()> {
        self.unsupported(LegacyOperation::SetBroadcastLayout)
    }

    pub fn set_stream_class_lists(
        &self,
        _session_id: &str,
        _class_lists: &[(String, Vec<String>)],
    ) -> Result<()> {
        self.unsupported(LegacyOperation::SetStreamClassLists)
    }

    pub fn dial(&self, _session_id: &str, _token: &str, _sip_uri: &str) -> Result<SipInterconnect> {
        self.unsupported(LegacyOperation::Dial)
    }

    pub fn get_archive(&self, _archive_id: &str) -> Result<Archive> {
        self.unsupported(LegacyOperation::GetArchive)
    }

    pub fn list_archives(&self, _session_id: Option<&str>) -> Result<Vec<Archive>> {
        self.unsupported(LegacyOperation::ListArchives)
    }

    pub fn start_archive(&self, _session_id: &str, _name: Option<&str>) -> Result<Archive> {
        self.unsupported(LegacyOperation::StartArchive)
    }

    pub fn stop_archive(&self, _archive_id: &str) -> Result<Archive> {
        self.unsupported(LegacyOperation::StopArchive)
    }

    pub fn get_broadcast(&self, _broadcast_id: &str) -> Result<Broadcast> {
        self.unsupported(LegacyOperation::GetBroadcast)
    }

    pub fn list_broadcasts(&self, _session_id: Option<&str>) -> Result<Vec<Broadcast>> {
        self.unsupported(LegacyOperation::ListBroadcasts)
    }

    pub fn start_broadcast(&self, _session_id: &str) -> Result<Broadcast> {
        self.unsupported(LegacyOperation::StartBroadcast)
    }

    pub fn stop_broadcast(&self, _broadcast_id: &str) -> Result<Broadcast> {
        self.unsupported(LegacyOperation::StopBroadcast)
    }

    pub fn get_stream(&self, _session_id: &str, _stream_id: &str) -> Result<Stream> {
        self.unsupported(LegacyOperation::GetStream)
    }

    pub fn list_streams(&self, _session_id: &str) -> Result<Vec<Stream>> {
        self.unsupported(LegacyOperation::ListStreams)
    }
}
