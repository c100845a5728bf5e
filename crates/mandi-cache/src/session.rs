//! Session state on top of the key-value store.

use crate::{CacheError, KeyValueStore};
use mandi_i18n::Locale;
use std::sync::{Arc, PoisonError, RwLock};

/// Keys the storefront keeps in local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// `"true"` once the supplier has logged in.
    Login,
    /// The supplier's phone number, the identity for every API call.
    Phone,
    /// `"true"` once the platform has verified the supplier.
    Verify,
    /// Selected language code.
    Lang,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::Login,
        SessionKey::Phone,
        SessionKey::Verify,
        SessionKey::Lang,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::Login => "login",
            SessionKey::Phone => "phone",
            SessionKey::Verify => "verify",
            SessionKey::Lang => "lang",
        }
    }
}

const TRUE: &str = "true";

/// The session flags, read together at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub logged_in: bool,
    pub phone: Option<String>,
    pub verified: bool,
    /// Stored language choice; `None` means use the device default.
    pub lang: Option<Locale>,
}

impl SessionSnapshot {
    /// Read every key from `store`.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, CacheError> {
        let flag = |key: SessionKey| -> Result<bool, CacheError> {
            Ok(store.get(key.as_str())?.as_deref() == Some(TRUE))
        };
        let text = |key: SessionKey| -> Result<Option<String>, CacheError> {
            Ok(store
                .get(key.as_str())?
                .filter(|v| !v.trim().is_empty()))
        };
        Ok(Self {
            logged_in: flag(SessionKey::Login)?,
            phone: text(SessionKey::Phone)?,
            verified: flag(SessionKey::Verify)?,
            lang: text(SessionKey::Lang)?.map(Locale::new),
        })
    }
}

/// Typed writes to the session keys.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, CacheError> {
        SessionSnapshot::load(&self.store)
    }

    /// Record a successful login for `phone`.
    pub fn mark_logged_in(&self, phone: &str) -> Result<(), CacheError> {
        self.store.set(SessionKey::Login.as_str(), TRUE)?;
        self.store.set(SessionKey::Phone.as_str(), phone)?;
        tracing::info!(phone = %phone, "Session logged in");
        Ok(())
    }

    /// Remember the phone number without logging in (sign-up in progress).
    ///
    /// A different number than the stored one drops the `login` and
    /// `verify` flags, which belong to the previous account.
    pub fn switch_phone(&self, phone: &str) -> Result<(), CacheError> {
        let previous = self.store.get(SessionKey::Phone.as_str())?;
        if previous.as_deref() != Some(phone) {
            self.store.delete(SessionKey::Login.as_str())?;
            self.store.delete(SessionKey::Verify.as_str())?;
            if previous.is_some() {
                tracing::info!(phone = %phone, "Session switched to another phone");
            }
        }
        self.store.set(SessionKey::Phone.as_str(), phone)
    }

    /// Cache a positive verification answer.
    pub fn mark_verified(&self) -> Result<(), CacheError> {
        self.store.set(SessionKey::Verify.as_str(), TRUE)
    }

    pub fn set_language(&self, locale: &Locale) -> Result<(), CacheError> {
        self.store.set(SessionKey::Lang.as_str(), locale.as_str())?;
        tracing::debug!(locale = %locale, "Language saved");
        Ok(())
    }

    /// Sign out: forget everything, including the language choice.
    pub fn logout(&self) -> Result<(), CacheError> {
        self.store.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

/// The session store plus a snapshot of its state.
///
/// Readers call [`current`](Self::current) and keep the returned `Arc` for
/// the duration of one operation; the snapshot only changes on
/// [`reload`](Self::reload).
#[derive(Debug)]
pub struct SessionContext<S> {
    session: Session<S>,
    snapshot: RwLock<Arc<SessionSnapshot>>,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// Wrap `store` and take the first snapshot.
    pub fn new(store: S) -> Result<Self, CacheError> {
        let session = Session::new(store);
        let snapshot = session.snapshot()?;
        Ok(Self {
            session,
            snapshot: RwLock::new(Arc::new(snapshot)),
        })
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// The snapshot taken at the last reload.
    pub fn current(&self) -> Arc<SessionSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-read the store and publish a new snapshot.
    pub fn reload(&self) -> Result<Arc<SessionSnapshot>, CacheError> {
        let fresh = Arc::new(self.session.snapshot()?);
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        Ok(fresh)
    }
}
