pub mod legacy;
pub mod room;
pub mod session;
pub mod token;

pub use legacy::{Archive, Broadcast, SipInterconnect, Stream};
pub use room::{AccountInfo, CreateRoomRequest, RoomDescriptor, RoomProperties};
pub use session::{ArchiveMode, LegacyOperation, MediaMode, Session, SessionOptions};
pub use token::{DomainId, Role, TokenOptions, TokenPayload};
