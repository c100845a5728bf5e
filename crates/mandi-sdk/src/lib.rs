//! Mandi supplier storefront client.
//!
//! Ties the inventory and pricing model, localization, the local session
//! and the remote API together behind [`Storefront`].
//!
//! # Example
//!
//! ```rust,ignore
//! use mandi_sdk::prelude::*;
//!
//! let mut config = ClientConfig::load("mandi.toml")?;
//! config.apply_env_overrides();
//! telemetry::init_tracing(telemetry::DEFAULT_FILTER);
//!
//! let store = Storefront::connect(config)?;
//! store.login("98765 43210").await?;
//! store.ensure_verified().await?;
//!
//! let mut sheet = SlabSheet::new();
//! sheet.update_slab_field(0, SlabField::MinQuantity, "10");
//! sheet.update_slab_field(0, SlabField::Price, "22.50");
//! store
//!     .add_item(&ItemDraft::new().with_name("Tomato").with_slabs(sheet))
//!     .await?;
//!
//! for item in store.items().await? {
//!     println!("{}: {}", item.display_name, item.slab_labels.join(", "));
//! }
//! ```

pub mod alert;
pub mod api;
pub mod config;
mod error;
mod storefront;
pub mod telemetry;

pub use alert::{Operation, UserAlert};
pub use api::{HttpSupplierApi, InMemorySupplierApi, NewItem, SupplierApi};
pub use config::{ApiConfig, ClientConfig, LocaleConfig, SessionConfig};
pub use error::{SdkError, SdkResult};
pub use storefront::{
    BalanceOverview, HttpStorefront, ItemView, OrderLineView, OrderView, Storefront,
};

// Re-export the building blocks
pub use mandi_auth as auth;
pub use mandi_cache as cache;
pub use mandi_commerce as commerce;
pub use mandi_data as data;
pub use mandi_i18n as i18n;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::telemetry;
    pub use crate::{
        ClientConfig, InMemorySupplierApi, ItemView, Operation, OrderView, SdkError, SdkResult,
        Storefront, SupplierApi, UserAlert,
    };
    pub use mandi_auth::{Address, PhoneNumber, SignUpForm};
    pub use mandi_cache::{FileStore, KeyValueStore, MemoryStore};
    pub use mandi_commerce::prelude::*;
    pub use mandi_i18n::{Locale, NameResolver, Translator};
}
