//! Local key-value session store for Mandi.
//!
//! Persists the handful of string flags the storefront keeps between
//! launches (login state, phone number, verification, language) and exposes
//! them as an immutable [`SessionSnapshot`] that is refreshed only by an
//! explicit [`SessionContext::reload`].
//!
//! # Example
//!
//! ```rust
//! use mandi_cache::{MemoryStore, SessionContext};
//!
//! let ctx = SessionContext::new(MemoryStore::new())?;
//! assert!(!ctx.current().logged_in);
//!
//! ctx.session().mark_logged_in("9876543210")?;
//! ctx.reload()?;
//! assert_eq!(ctx.current().phone.as_deref(), Some("9876543210"));
//! # Ok::<(), mandi_cache::CacheError>(())
//! ```

mod error;
mod kv;
mod session;

pub use error::CacheError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use session::{Session, SessionContext, SessionKey, SessionSnapshot};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CacheError, FileStore, KeyValueStore, MemoryStore, Session, SessionContext, SessionKey,
        SessionSnapshot,
    };
}
