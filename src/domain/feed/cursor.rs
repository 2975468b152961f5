use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Keyset position of the last item a caller has seen.
///
/// On the wire it is an opaque base64url token of `"<unix secs>.<nanos>:<uuid>"`.
/// Ordering is `(published_at DESC, id DESC)`, so the id only breaks ties.
/// The timestamp must survive the round trip exactly, otherwise the decoded
/// position sorts below its own row and ties with it are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub published_at: DateTime<Utc>,
    pub id: Uuid,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("malformed cursor")]
pub struct CursorError;

impl Cursor {
    pub fn new(published_at: DateTime<Utc>, id: Uuid) -> Self {
        Self { published_at, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!(
            "{}.{:09}:{}",
            self.published_at.timestamp(),
            self.published_at.timestamp_subsec_nanos(),
            self.id
        );
        URL_SAFE_NO_PAD.encode(raw)
    }

    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| CursorError)?;
        let raw = String::from_utf8(bytes).map_err(|_| CursorError)?;
        let (instant, id) = raw.split_once(':').ok_or(CursorError)?;
        let (secs, nanos) = instant.split_once('.').ok_or(CursorError)?;

        let secs: i64 = secs.parse().map_err(|_| CursorError)?;
        let nanos: u32 = nanos.parse().map_err(|_| CursorError)?;
        if nanos >= 1_000_000_000 {
            return Err(CursorError);
        }
        let published_at = DateTime::from_timestamp(secs, nanos).ok_or(CursorError)?;
        let id = Uuid::parse_str(id).map_err(|_| CursorError)?;

        Ok(Self { published_at, id })
    }
}
