//! Record store over the key-value persistence boundary.
//!
//! # Responsibility
//! - Provide CRUD operations for pharmacies, products and price-list entries.
//! - Assign pharmacy identities and enforce duplicate-key rules.
//! - Rewrite the affected collection's payload after every mutation.
//!
//! # Invariants
//! - Price-list composite keys `(pharmacy_id, product_id)` stay unique.
//! - Product ids stay unique.
//! - Primary keys never change across an update; the stored key always wins
//!   over whatever the replacement record carries.
//! - A store write failure leaves the in-memory mutation in place; memory and
//!   persisted state may diverge until the next successful write.

use crate::model::pharmacy::{NewPharmacy, Pharmacy, PharmacyId};
use crate::model::price_list::PriceListEntry;
use crate::model::product::{Product, ProductId};
use crate::store::KeyValueStore;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PHARMACIES_KEY: &str = "pharmacies";
const PRODUCTS_KEY: &str = "products";
const PRICELIST_KEY: &str = "pricelist";

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic error for record-store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A price-list entry with this composite key already exists.
    DuplicateEntry {
        pharmacy_id: PharmacyId,
        product_id: ProductId,
    },
    /// A product with this id already exists.
    DuplicateProductId(ProductId),
    PharmacyNotFound(PharmacyId),
    ProductNotFound(ProductId),
    EntryNotFound {
        pharmacy_id: PharmacyId,
        product_id: ProductId,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntry {
                pharmacy_id,
                product_id,
            } => write!(
                f,
                "a price list entry for pharmacy {pharmacy_id} and product {product_id} already exists"
            ),
            Self::DuplicateProductId(id) => write!(f, "a product with id {id} already exists"),
            Self::PharmacyNotFound(id) => write!(f, "pharmacy not found: {id}"),
            Self::ProductNotFound(id) => write!(f, "product not found: {id}"),
            Self::EntryNotFound {
                pharmacy_id,
                product_id,
            } => write!(
                f,
                "price list entry not found: pharmacy {pharmacy_id}, product {product_id}"
            ),
        }
    }
}

impl Error for RepoError {}

/// Owns the three record collections and their backing store.
///
/// Constructed explicitly and handed to the workflow layer; there is no
/// process-wide instance.
pub struct RecordStore<S: KeyValueStore> {
    store: S,
    pharmacies: Vec<Pharmacy>,
    products: Vec<Product>,
    price_list: Vec<PriceListEntry>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Loads all three collections from the backing store.
    ///
    /// An absent key yields an empty collection. A malformed payload or a
    /// store read failure is logged and also yields an empty collection;
    /// opening never fails.
    pub fn open(store: S) -> Self {
        let pharmacies = load_collection(&store, PHARMACIES_KEY);
        let products = load_collection(&store, PRODUCTS_KEY);
        let price_list = load_collection(&store, PRICELIST_KEY);
        info!(
            "event=store_load module=repo status=ok pharmacies={} products={} entries={}",
            pharmacies.len(),
            products.len(),
            price_list.len()
        );
        Self {
            store,
            pharmacies,
            products,
            price_list,
        }
    }

    pub fn pharmacies(&self) -> &[Pharmacy] {
        &self.pharmacies
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn price_list(&self) -> &[PriceListEntry] {
        &self.price_list
    }

    /// Inserts a pharmacy, assigning the next id (max existing + 1, or 1 for
    /// an empty collection). Returns the assigned id.
    pub fn add_pharmacy(&mut self, pharmacy: NewPharmacy) -> PharmacyId {
        let id = self
            .pharmacies
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1);
        self.pharmacies.push(pharmacy.assign_id(id));
        self.persist_pharmacies();
        info!("event=pharmacy_add module=repo status=ok id={id}");
        id
    }

    /// Replaces the pharmacy stored under `id` wholesale.
    ///
    /// The stored id is forced to `id` regardless of the replacement record.
    pub fn update_pharmacy(&mut self, id: PharmacyId, pharmacy: Pharmacy) -> RepoResult<()> {
        let slot = self
            .pharmacies
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::PharmacyNotFound(id))?;
        *slot = Pharmacy { id, ..pharmacy };
        self.persist_pharmacies();
        info!("event=pharmacy_update module=repo status=ok id={id}");
        Ok(())
    }

    /// Removes the pharmacy with `id`. Idempotent: removing an absent id is
    /// not an error, and the collection is persisted either way.
    pub fn delete_pharmacy(&mut self, id: PharmacyId) {
        self.pharmacies.retain(|p| p.id != id);
        self.persist_pharmacies();
        info!("event=pharmacy_delete module=repo status=ok id={id}");
    }

    /// Inserts a product with its caller-supplied id.
    pub fn add_product(&mut self, product: Product) -> RepoResult<()> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(RepoError::DuplicateProductId(product.id));
        }
        let id = product.id;
        self.products.push(product);
        self.persist_products();
        info!("event=product_add module=repo status=ok id={id}");
        Ok(())
    }

    /// Replaces the product stored under `id` wholesale, keeping `id`.
    pub fn update_product(&mut self, id: ProductId, product: Product) -> RepoResult<()> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::ProductNotFound(id))?;
        *slot = Product { id, ..product };
        self.persist_products();
        info!("event=product_update module=repo status=ok id={id}");
        Ok(())
    }

    /// Removes the product with `id`. Idempotent.
    pub fn delete_product(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
        self.persist_products();
        info!("event=product_delete module=repo status=ok id={id}");
    }

    /// Inserts a price-list entry, rejecting an existing composite key
    /// without mutating or persisting anything.
    pub fn add_price_list_entry(&mut self, entry: PriceListEntry) -> RepoResult<()> {
        if self.price_list.iter().any(|e| e.key() == entry.key()) {
            return Err(RepoError::DuplicateEntry {
                pharmacy_id: entry.pharmacy_id,
                product_id: entry.product_id,
            });
        }
        let (pharmacy_id, product_id) = entry.key();
        self.price_list.push(entry);
        self.persist_price_list();
        info!(
            "event=entry_add module=repo status=ok pharmacy_id={pharmacy_id} product_id={product_id}"
        );
        Ok(())
    }

    /// Replaces the entry stored under the composite key wholesale, keeping
    /// the key itself.
    pub fn update_price_list_entry(
        &mut self,
        pharmacy_id: PharmacyId,
        product_id: ProductId,
        entry: PriceListEntry,
    ) -> RepoResult<()> {
        let slot = self
            .price_list
            .iter_mut()
            .find(|e| e.key() == (pharmacy_id, product_id))
            .ok_or(RepoError::EntryNotFound {
                pharmacy_id,
                product_id,
            })?;
        *slot = PriceListEntry {
            pharmacy_id,
            product_id,
            ..entry
        };
        self.persist_price_list();
        info!(
            "event=entry_update module=repo status=ok pharmacy_id={pharmacy_id} product_id={product_id}"
        );
        Ok(())
    }

    /// Removes the entry under the composite key. Idempotent.
    pub fn delete_price_list_entry(&mut self, pharmacy_id: PharmacyId, product_id: ProductId) {
        self.price_list
            .retain(|e| e.key() != (pharmacy_id, product_id));
        self.persist_price_list();
        info!(
            "event=entry_delete module=repo status=ok pharmacy_id={pharmacy_id} product_id={product_id}"
        );
    }

    fn persist_pharmacies(&mut self) {
        persist_collection(&mut self.store, PHARMACIES_KEY, &self.pharmacies);
    }

    fn persist_products(&mut self) {
        persist_collection(&mut self.store, PRODUCTS_KEY, &self.products);
    }

    fn persist_price_list(&mut self) {
        persist_collection(&mut self.store, PRICELIST_KEY, &self.price_list);
    }
}

fn load_collection<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Vec<T> {
    let payload = match store.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("event=store_load module=repo status=error key={key} error_code=read_failed error={err}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&payload) {
        Ok(records) => records,
        Err(err) => {
            error!("event=store_load module=repo status=error key={key} error_code=malformed_payload error={err}");
            Vec::new()
        }
    }
}

fn persist_collection<S: KeyValueStore, T: Serialize>(store: &mut S, key: &str, records: &[T]) {
    let payload = match serde_json::to_string(records) {
        Ok(payload) => payload,
        Err(err) => {
            error!("event=store_save module=repo status=error key={key} error_code=serialize_failed error={err}");
            return;
        }
    };
    if let Err(err) = store.put(key, &payload) {
        error!("event=store_save module=repo status=error key={key} error_code=write_failed error={err}");
    }
}
