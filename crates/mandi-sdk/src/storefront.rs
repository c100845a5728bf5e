//! Screen-level supplier workflows.

use crate::api::{HttpSupplierApi, NewItem, SupplierApi};
use crate::config::ClientConfig;
use crate::{SdkError, SdkResult};
use mandi_auth::{PhoneNumber, SignUpForm};
use mandi_cache::{FileStore, KeyValueStore, MemoryStore, SessionContext, SessionSnapshot};
use mandi_commerce::catalog::{Item, ItemDraft, PriceSchedule, PriceSlab, SlabSheet};
use mandi_commerce::ledger::{Balance, ChartPoint, PaymentHistory};
use mandi_commerce::orders::Order;
use mandi_commerce::{ItemId, Money, Quantity};
use mandi_i18n::{
    select_locale, Locale, LocaleOption, MessageCatalog, NameResolver, TranslationTable,
    Translator, SUPPORTED_LOCALES,
};
use std::sync::Arc;

/// An item prepared for the inventory list.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub item: Item,
    /// Item name in the active locale.
    pub display_name: String,
    /// `None` when the stored slabs do not parse.
    pub schedule: Option<PriceSchedule>,
    /// One label per slab, e.g. `10+ kg: ₹5.00/kg`.
    pub slab_labels: Vec<String>,
}

impl ItemView {
    fn new(item: Item, resolver: &NameResolver) -> Self {
        let schedule = match item.schedule() {
            Ok(schedule) => Some(schedule),
            Err(e) => {
                tracing::warn!(item_id = %item.id, error = %e, "Stored price slabs do not parse");
                None
            }
        };
        let slab_labels = schedule
            .iter()
            .flat_map(|s| s.slabs().iter().map(PriceSlab::label))
            .collect();
        Self {
            display_name: resolver.resolve_owned(&item.item_name),
            item,
            schedule,
            slab_labels,
        }
    }

    /// Unit price and total for buying `quantity` of this item.
    pub fn quote(&self, quantity: Quantity) -> SdkResult<(Money, Money)> {
        let schedule = self
            .schedule
            .as_ref()
            .ok_or(mandi_commerce::CommerceError::EmptySchedule)?;
        Ok((schedule.resolve_price(quantity)?, schedule.line_total(quantity)?))
    }
}

/// One order line with its localized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineView {
    pub display_name: String,
    pub quantity: Quantity,
    pub price: Money,
    pub line_total: Money,
}

/// An order prepared for the order history screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub order: Order,
    pub lines: Vec<OrderLineView>,
    pub total: Money,
}

impl OrderView {
    fn new(order: Order, resolver: &NameResolver) -> SdkResult<Self> {
        let lines = order
            .items
            .iter()
            .map(|line| {
                Ok(OrderLineView {
                    display_name: resolver.resolve_owned(&line.item_name),
                    quantity: line.quantity,
                    price: line.price,
                    line_total: line.line_total()?,
                })
            })
            .collect::<SdkResult<Vec<_>>>()?;
        let total = order.total()?;
        Ok(Self {
            order,
            lines,
            total,
        })
    }
}

/// Amount owed plus the payments behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceOverview {
    pub balance: Balance,
    pub history: PaymentHistory,
    pub chart: Vec<ChartPoint>,
}

impl BalanceOverview {
    /// Whether there are enough points to draw the chart.
    pub fn has_chart(&self) -> bool {
        self.chart.len() >= PaymentHistory::MIN_CHART_POINTS
    }
}

/// A storefront talking to the real API, with a file or memory session.
pub type HttpStorefront = Storefront<HttpSupplierApi, Arc<dyn KeyValueStore>>;

/// The supplier's storefront: session, localization and the remote API
/// behind one handle.
///
/// Locale-dependent views capture one session snapshot at the start of the
/// call, so a language change mid-call does not mix languages.
pub struct Storefront<A, S> {
    config: ClientConfig,
    api: A,
    context: SessionContext<S>,
    item_names: Option<Arc<TranslationTable>>,
    messages: Arc<MessageCatalog>,
    device_locale: Option<Locale>,
}

impl HttpStorefront {
    /// Build the production storefront described by `config`.
    pub fn connect(config: ClientConfig) -> SdkResult<Self> {
        let api = HttpSupplierApi::new(&config.api)?;
        let store: Arc<dyn KeyValueStore> = match &config.session.store_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(config, api, store)
    }
}

impl<A: SupplierApi, S: KeyValueStore> Storefront<A, S> {
    /// Load translation files named in `config` and read the session.
    pub fn new(config: ClientConfig, api: A, store: S) -> SdkResult<Self> {
        let item_names = config
            .locale
            .item_translations
            .as_ref()
            .map(TranslationTable::from_path)
            .transpose()?
            .map(Arc::new);

        let mut messages = MessageCatalog::builtin();
        if let Some(path) = &config.locale.messages {
            messages = messages.merge(MessageCatalog::from_path(path)?);
        }

        let context = SessionContext::new(store)?;
        tracing::info!(
            base_url = %config.api.base_url,
            logged_in = context.current().logged_in,
            "Storefront ready"
        );

        Ok(Self {
            config,
            api,
            context,
            item_names,
            messages: Arc::new(messages),
            device_locale: None,
        })
    }

    /// Use `table` for item names instead of the configured file.
    pub fn with_item_translations(mut self, table: TranslationTable) -> Self {
        self.item_names = Some(Arc::new(table));
        self
    }

    /// The device's language, consulted when no language is stored.
    pub fn with_device_locale(mut self, code: &str) -> Self {
        self.device_locale = Some(Locale::new(code));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Session state as of the last change made through this storefront.
    pub fn session(&self) -> Arc<SessionSnapshot> {
        self.context.current()
    }

    /// Re-read the session store, picking up writes made elsewhere.
    pub fn reload_session(&self) -> SdkResult<Arc<SessionSnapshot>> {
        Ok(self.context.reload()?)
    }

    // === Locale ===

    pub fn supported_locales(&self) -> &'static [LocaleOption] {
        SUPPORTED_LOCALES
    }

    /// Stored choice, else device language, else the configured default.
    pub fn active_locale(&self) -> Locale {
        let snapshot = self.context.current();
        select_locale(
            snapshot.lang.as_ref().map(Locale::as_str),
            self.device_locale.as_ref().map(Locale::as_str),
            &self.config.locale.default_locale,
        )
    }

    /// UI messages in the active locale.
    pub fn translator(&self) -> Translator {
        Translator::new(self.active_locale(), Arc::clone(&self.messages))
    }

    /// Item names in the active locale.
    pub fn name_resolver(&self) -> NameResolver {
        NameResolver::new(self.active_locale(), self.item_names.clone())
    }

    /// Persist a language choice and make it active.
    pub fn change_language(&self, code: &str) -> SdkResult<Locale> {
        let locale = Locale::new(code);
        self.context.session().set_language(&locale)?;
        self.context.reload()?;
        tracing::info!(locale = %locale, "Language changed");
        Ok(locale)
    }

    // === Account ===

    /// Sign in with a phone number.
    ///
    /// The number is remembered either way so an unregistered supplier can
    /// continue to sign-up with it. Flags left by a different number are
    /// dropped before the server is asked.
    pub async fn login(&self, phone: &str) -> SdkResult<PhoneNumber> {
        let phone = PhoneNumber::parse(phone)?;
        let session = self.context.session();
        session.switch_phone(phone.as_str())?;
        self.context.reload()?;

        if !self.api.is_user(&phone, self.config.api.user_type).await? {
            tracing::info!(phone = %phone, "Phone number not registered");
            return Err(SdkError::NotRegistered(phone.to_string()));
        }

        session.mark_logged_in(phone.as_str())?;
        self.context.reload()?;
        Ok(phone)
    }

    /// Register a new supplier and sign them in.
    pub async fn sign_up(&self, form: &SignUpForm) -> SdkResult<()> {
        form.validate()?;
        self.api.sign_up(form).await?;
        let session = self.context.session();
        session.switch_phone(form.phone_number.as_str())?;
        session.mark_logged_in(form.phone_number.as_str())?;
        self.context.reload()?;
        Ok(())
    }

    /// Forget the whole session, language choice included.
    pub fn logout(&self) -> SdkResult<()> {
        self.context.session().logout()?;
        self.context.reload()?;
        Ok(())
    }

    /// Succeeds once the platform has verified the supplier.
    ///
    /// A positive answer is cached in the session and never asked again.
    pub async fn ensure_verified(&self) -> SdkResult<()> {
        if self.context.current().verified {
            return Ok(());
        }
        let phone = self.phone()?;
        if !self.api.is_verified(&phone).await? {
            return Err(SdkError::NotVerified);
        }
        self.context.session().mark_verified()?;
        self.context.reload()?;
        tracing::info!(phone = %phone, "Supplier verified");
        Ok(())
    }

    fn phone(&self) -> SdkResult<PhoneNumber> {
        let snapshot = self.context.current();
        let phone = snapshot.phone.as_deref().ok_or(SdkError::PhoneNotFound)?;
        Ok(PhoneNumber::parse(phone)?)
    }

    // === Inventory ===

    pub async fn items(&self) -> SdkResult<Vec<ItemView>> {
        let phone = self.phone()?;
        let resolver = self.name_resolver();
        let items = self.api.list_items(&phone).await?;
        tracing::debug!(count = items.len(), "Fetched items");
        Ok(items
            .into_iter()
            .map(|item| ItemView::new(item, &resolver))
            .collect())
    }

    /// Validate the add-item form and submit it.
    pub async fn add_item(&self, draft: &ItemDraft) -> SdkResult<()> {
        let phone = self.phone()?;
        let schedule = draft.validate()?;
        warn_thresholds(&schedule);

        let item = NewItem {
            phone_number: phone,
            item_name: draft.item_name.trim().to_string(),
            quality: draft.quality.trim().to_string(),
            price_slabs: schedule,
            item_image: draft.item_image.clone(),
        };
        self.api.add_item(&item).await?;
        tracing::info!(
            item_name = %item.item_name,
            slabs = item.price_slabs.slabs().len(),
            "Item added"
        );
        Ok(())
    }

    /// Replace an item's schedule with the edited sheet.
    pub async fn update_price_slabs(&self, item_id: &ItemId, sheet: &SlabSheet) -> SdkResult<()> {
        let schedule = sheet.parse()?;
        warn_thresholds(&schedule);
        self.api.update_price_slabs(item_id, &schedule).await?;
        tracing::info!(item_id = %item_id, slabs = schedule.slabs().len(), "Price slabs updated");
        Ok(())
    }

    pub async fn remove_item(&self, item_id: &ItemId) -> SdkResult<()> {
        let phone = self.phone()?;
        self.api.remove_item(&phone, item_id).await?;
        tracing::info!(item_id = %item_id, "Item removed");
        Ok(())
    }

    // === Orders and payments ===

    pub async fn past_orders(&self) -> SdkResult<Vec<OrderView>> {
        let phone = self.phone()?;
        let resolver = self.name_resolver();
        let orders = self.api.past_orders(&phone).await?;
        orders
            .into_iter()
            .map(|order| OrderView::new(order, &resolver))
            .collect()
    }

    /// Balance and payment history, fetched together.
    pub async fn balance_overview(&self) -> SdkResult<BalanceOverview> {
        let phone = self.phone()?;
        let (balance, history) = futures::try_join!(
            self.api.balance(&phone),
            self.api.payment_history(&phone)
        )?;
        let chart = history.chart_series();
        Ok(BalanceOverview {
            balance,
            history,
            chart,
        })
    }
}

fn warn_thresholds(schedule: &PriceSchedule) {
    for warning in schedule.threshold_warnings() {
        tracing::warn!(?warning, "Unusual price slab thresholds");
    }
}
