//! The collection store: authoritative owner of all product records.
//!
//! A single `RwLock` guards the collection and the id counter, giving the
//! single-writer / concurrent-reader access the service needs: every
//! operation sees an atomic snapshot, and concurrent creates can never hand
//! out the same id. Ids are monotonically increasing and never reused, even
//! after deletion.
//!
//! Absence is absence here: lookups return `Option`, deletion returns a
//! bool. Payloads are expected to be validated upstream (see
//! [`crate::validate`]); the store itself has no error path.

use crate::model::{demo_catalog, Category, Product, ProductDraft, ProductPatch};
use crate::query::{self, ListParams, Page};
use chrono::Utc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct StoreInner {
    products: Vec<Product>,
    next_id: u64,
}

/// Thread-safe in-memory product collection.
#[derive(Debug)]
pub struct ProductStore {
    inner: RwLock<StoreInner>,
}

impl ProductStore {
    /// Empty store; the first created record gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store pre-seeded with the twelve-record demonstration set.
    pub fn with_demo_catalog() -> Self {
        let products = demo_catalog();
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(StoreInner { products, next_id }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create a record from an already-validated draft.
    ///
    /// Assigns the next sequential id and stamps `created_at = updated_at`.
    /// If an unvalidated draft sneaks in with an unknown category label it is
    /// stored as [`Category::Other`] so the stored value stays inside the
    /// closed set; this path never fires for validated payloads.
    pub fn create(&self, draft: &ProductDraft) -> Product {
        let now = Utc::now();
        let mut inner = self.write();
        let product = Product {
            id: inner.next_id,
            name: draft.name.clone(),
            price: draft.price,
            description: draft.description.clone(),
            category: Category::parse(&draft.category).unwrap_or(Category::Other),
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.products.push(product.clone());
        product
    }

    /// Fetch a record by id.
    pub fn get(&self, id: u64) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    /// Fully replace the mutable fields of a record. `id` and `created_at`
    /// are untouched; `updated_at` is stamped. `None` if no such record.
    pub fn update(&self, id: u64, draft: &ProductDraft) -> Option<Product> {
        let mut inner = self.write();
        let product = inner.products.iter_mut().find(|p| p.id == id)?;
        product.name = draft.name.clone();
        product.price = draft.price;
        product.description = draft.description.clone();
        product.category = Category::parse(&draft.category).unwrap_or(Category::Other);
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Replace only the fields present in the patch.
    ///
    /// `updated_at` is stamped regardless of which fields changed: an empty
    /// patch still marks the record as touched. Callers rely on that.
    pub fn patch(&self, id: u64, patch: &ProductPatch) -> Option<Product> {
        let mut inner = self.write();
        let product = inner.products.iter_mut().find(|p| p.id == id)?;
        if let Some(name) = &patch.name {
            product.name = name.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(category) = &patch.category {
            product.category = Category::parse(category).unwrap_or(Category::Other);
        }
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Remove a record. Returns whether a removal occurred; deleting an
    /// absent id is an idempotent `false`, not an error.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.write();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        inner.products.len() < before
    }

    /// Whether a record with this id is currently stored.
    pub fn exists(&self, id: u64) -> bool {
        self.read().products.iter().any(|p| p.id == id)
    }

    /// One filtered/sorted page over a snapshot of the full collection.
    pub fn list(&self, params: &ListParams) -> Page<Product> {
        let inner = self.read();
        query::execute(&inner.products, params)
    }

    /// Current record count.
    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
