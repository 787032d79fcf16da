//! Dashboard workflow controller.
//!
//! # Responsibility
//! - Run the ordered validation gates for every add/update workflow.
//! - Apply record-store mutations and reload all collections afterwards.
//! - Resolve foreign keys to display values for presentation.
//!
//! # Invariants
//! - The first failing gate aborts the whole operation; at most one
//!   field-keyed message is recorded per workflow run.
//! - Every successful mutation is followed by a full reload of all three
//!   cached collections, so presentation state matches the record store.
//! - Lookup helpers are pure and never fail; dangling foreign keys resolve
//!   to fallback values.

use crate::model::pharmacy::{NewPharmacy, Pharmacy, PharmacyId};
use crate::model::price_list::{PaymentMethod, PriceListEntry};
use crate::model::product::{Product, ProductId};
use crate::repo::record_store::RecordStore;
use crate::service::validation;
use crate::store::KeyValueStore;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const UNKNOWN_PHARMACY: &str = "unknown pharmacy";
const UNKNOWN_PRODUCT: &str = "unknown product";
const NOT_AVAILABLE: &str = "N/A";

/// A rejected workflow: one field key plus a human-readable message.
///
/// The same pair is recorded in the dashboard error map for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowError {
    pub field: &'static str,
    pub message: String,
}

impl Display for WorkflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Error for WorkflowError {}

/// String-typed pharmacy form fields as supplied by presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PharmacyForm {
    pub name: String,
    pub contact_info: String,
    pub address: String,
    pub director_full_name: String,
}

/// Product form fields. `pharmacy_id` is select-backed; `0` means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub pharmacy_id: PharmacyId,
    /// Caller-typed id; parsed as a positive number on add only.
    pub id: String,
    pub name: String,
}

/// Price-list form fields. Both ids are select-backed; `0` means unselected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceListForm {
    pub pharmacy_id: PharmacyId,
    pub product_id: ProductId,
    pub cost: String,
    pub payment_method: PaymentMethod,
}

/// Pharmacy detail projection used to decorate rows referencing a pharmacy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PharmacyDetails {
    pub contact_info: String,
    pub address: String,
    pub director_full_name: String,
}

impl PharmacyDetails {
    fn placeholder() -> Self {
        Self {
            contact_info: NOT_AVAILABLE.to_string(),
            address: NOT_AVAILABLE.to_string(),
            director_full_name: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Workflow controller over a record store.
///
/// Holds cached copies of the three collections for enumeration and lookup;
/// the cache is re-derived from the record store after every mutation.
pub struct Dashboard<S: KeyValueStore> {
    store: RecordStore<S>,
    pharmacies: Vec<Pharmacy>,
    products: Vec<Product>,
    price_list: Vec<PriceListEntry>,
    errors: BTreeMap<&'static str, String>,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Creates the controller and loads the current collections.
    pub fn new(store: RecordStore<S>) -> Self {
        let mut dashboard = Self {
            store,
            pharmacies: Vec::new(),
            products: Vec::new(),
            price_list: Vec::new(),
            errors: BTreeMap::new(),
        };
        dashboard.load_all();
        dashboard
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

    /// Field-keyed message for the most recently failed workflow, empty when
    /// the last workflow succeeded.
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Validates and inserts a pharmacy; returns the assigned id.
    pub fn add_pharmacy(&mut self, form: &PharmacyForm) -> Result<PharmacyId, WorkflowError> {
        self.errors.clear();
        self.validate_pharmacy_form(form)?;
        let id = self.store.add_pharmacy(NewPharmacy {
            name: form.name.clone(),
            contact_info: form.contact_info.clone(),
            address: form.address.clone(),
            director_full_name: form.director_full_name.clone(),
        });
        self.load_all();
        Ok(id)
    }

    /// Validates and replaces the pharmacy stored under `id`.
    pub fn update_pharmacy(
        &mut self,
        id: PharmacyId,
        form: &PharmacyForm,
    ) -> Result<(), WorkflowError> {
        self.errors.clear();
        self.validate_pharmacy_form(form)?;
        let pharmacy = Pharmacy {
            id,
            name: form.name.clone(),
            contact_info: form.contact_info.clone(),
            address: form.address.clone(),
            director_full_name: form.director_full_name.clone(),
        };
        match self.store.update_pharmacy(id, pharmacy) {
            Ok(()) => {
                self.load_all();
                Ok(())
            }
            Err(err) => Err(self.reject("pharmacy_missing", err.to_string())),
        }
    }

    /// Removes a pharmacy. Products and price-list entries referencing it are
    /// left in place; lookups resolve them to fallback values.
    pub fn delete_pharmacy(&mut self, id: PharmacyId) {
        self.store.delete_pharmacy(id);
        self.load_all();
    }

    /// Validates and inserts a product; returns the parsed product id.
    pub fn add_product(&mut self, form: &ProductForm) -> Result<ProductId, WorkflowError> {
        self.errors.clear();
        self.validate_product_form(form)?;
        let id = match validation::parse_positive_id(&form.id) {
            Some(id) => id,
            None => {
                return Err(self.reject("product_id", "product id must be a positive number"))
            }
        };
        let product = Product {
            id,
            pharmacy_id: form.pharmacy_id,
            name: form.name.clone(),
        };
        match self.store.add_product(product) {
            Ok(()) => {
                self.load_all();
                Ok(id)
            }
            Err(err) => Err(self.reject("product_id", err.to_string())),
        }
    }

    /// Validates and replaces the product stored under `id`.
    ///
    /// Unlike add, the form id is only checked for presence; the stored id is
    /// the lookup key and never changes.
    pub fn update_product(&mut self, id: ProductId, form: &ProductForm) -> Result<(), WorkflowError> {
        self.errors.clear();
        self.validate_product_form(form)?;
        let product = Product {
            id,
            pharmacy_id: form.pharmacy_id,
            name: form.name.clone(),
        };
        match self.store.update_product(id, product) {
            Ok(()) => {
                self.load_all();
                Ok(())
            }
            Err(err) => Err(self.reject("product_missing", err.to_string())),
        }
    }

    pub fn delete_product(&mut self, id: ProductId) {
        self.store.delete_product(id);
        self.load_all();
    }

    /// Validates and inserts a price-list entry.
    pub fn add_price_list_entry(&mut self, form: &PriceListForm) -> Result<(), WorkflowError> {
        self.errors.clear();
        let cost = self.validate_price_list_form(form)?;
        let entry = PriceListEntry {
            pharmacy_id: form.pharmacy_id,
            product_id: form.product_id,
            cost,
            payment_method: form.payment_method,
        };
        match self.store.add_price_list_entry(entry) {
            Ok(()) => {
                self.load_all();
                Ok(())
            }
            Err(err) => Err(self.reject("entry_duplicate", err.to_string())),
        }
    }

    /// Validates and replaces the entry stored under the composite key.
    pub fn update_price_list_entry(
        &mut self,
        pharmacy_id: PharmacyId,
        product_id: ProductId,
        form: &PriceListForm,
    ) -> Result<(), WorkflowError> {
        self.errors.clear();
        let cost = self.validate_price_list_form(form)?;
        let entry = PriceListEntry {
            pharmacy_id,
            product_id,
            cost,
            payment_method: form.payment_method,
        };
        match self.store.update_price_list_entry(pharmacy_id, product_id, entry) {
            Ok(()) => {
                self.load_all();
                Ok(())
            }
            Err(err) => Err(self.reject("entry_missing", err.to_string())),
        }
    }

    pub fn delete_price_list_entry(&mut self, pharmacy_id: PharmacyId, product_id: ProductId) {
        self.store.delete_price_list_entry(pharmacy_id, product_id);
        self.load_all();
    }

    /// Display name of a pharmacy, or a fallback for a dangling id.
    pub fn pharmacy_name(&self, id: PharmacyId) -> &str {
        self.pharmacies
            .iter()
            .find(|p| p.id == id)
            .map_or(UNKNOWN_PHARMACY, |p| p.name.as_str())
    }

    /// Display name of a product, or a fallback for a dangling id.
    pub fn product_name(&self, id: ProductId) -> &str {
        self.products
            .iter()
            .find(|p| p.id == id)
            .map_or(UNKNOWN_PRODUCT, |p| p.name.as_str())
    }

    /// Detail projection of a pharmacy, or an `N/A` placeholder.
    pub fn pharmacy_details(&self, id: PharmacyId) -> PharmacyDetails {
        self.pharmacies
            .iter()
            .find(|p| p.id == id)
            .map_or_else(PharmacyDetails::placeholder, |p| PharmacyDetails {
                contact_info: p.contact_info.clone(),
                address: p.address.clone(),
                director_full_name: p.director_full_name.clone(),
            })
    }

    fn load_all(&mut self) {
        self.pharmacies = self.store.pharmacies().to_vec();
        self.products = self.store.products().to_vec();
        self.price_list = self.store.price_list().to_vec();
    }

    fn reject(&mut self, field: &'static str, message: impl Into<String>) -> WorkflowError {
        let message = message.into();
        self.errors.insert(field, message.clone());
        WorkflowError { field, message }
    }

    fn validate_pharmacy_form(&mut self, form: &PharmacyForm) -> Result<(), WorkflowError> {
        if form.name.is_empty() {
            return Err(self.reject("pharmacy_name", "pharmacy name is required"));
        }
        if !validation::is_valid_name(&form.name) {
            return Err(self.reject(
                "pharmacy_name",
                "pharmacy name must contain letters and spaces only",
            ));
        }
        if !validation::is_valid_name(&form.director_full_name) {
            return Err(self.reject(
                "pharmacy_director",
                "director full name must contain letters and spaces only",
            ));
        }
        if form.contact_info.is_empty() {
            return Err(self.reject("pharmacy_contact", "contact info is required"));
        }
        if !validation::is_valid_phone(&form.contact_info) {
            return Err(self.reject(
                "pharmacy_contact",
                "enter a valid phone number: +7 or 8 followed by 10 digits",
            ));
        }
        Ok(())
    }

    fn validate_product_form(&mut self, form: &ProductForm) -> Result<(), WorkflowError> {
        if form.pharmacy_id == 0 {
            return Err(self.reject("product_pharmacy", "select a pharmacy"));
        }
        if form.name.is_empty() {
            return Err(self.reject("product_name", "product name is required"));
        }
        if form.id.is_empty() {
            return Err(self.reject("product_id", "product id is required"));
        }
        Ok(())
    }

    fn validate_price_list_form(&mut self, form: &PriceListForm) -> Result<f64, WorkflowError> {
        if form.pharmacy_id == 0 {
            return Err(self.reject("entry_pharmacy", "select a pharmacy"));
        }
        if form.product_id == 0 {
            return Err(self.reject("entry_product", "select a product"));
        }
        if form.cost.is_empty() {
            return Err(self.reject("entry_cost", "cost is required"));
        }
        match validation::parse_positive_number(&form.cost) {
            Some(cost) => Ok(cost),
            None => Err(self.reject("entry_cost", "cost must be a positive number")),
        }
    }
}
