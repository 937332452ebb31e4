//! List view state: the fetched collection, its sort order, and the local
//! add/delete flows.
//!
//! Nothing here writes back to the catalog service. Added and deleted
//! products exist only in this view's memory.

use std::sync::Arc;

use shared::domain::{NewProduct, Product, ProductId};
use tracing::{debug, info, warn};

use crate::{
    ids::IdGenerator,
    load_state::{LoadState, LoadTicket},
    sort::{sort_products, SortKey},
    CatalogSource, FetchError,
};

#[derive(Debug)]
pub struct CatalogView {
    ids: Arc<IdGenerator>,
    generation: u64,
    /// Number of products the last successful fetch delivered.
    load: LoadState<usize>,
    products: Vec<Product>,
    sort_key: SortKey,
    delete_candidate: Option<ProductId>,
    add_draft: Option<NewProduct>,
}

impl CatalogView {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            ids,
            generation: 0,
            load: LoadState::Idle,
            products: Vec::new(),
            sort_key: SortKey::default(),
            delete_candidate: None,
            add_draft: None,
        }
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn load_state(&self) -> &LoadState<usize> {
        &self.load
    }

    /// The collection in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.product(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// The collection ordered by the current sort key.
    pub fn sorted(&self) -> Vec<Product> {
        sort_products(&self.products, self.sort_key)
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.load.start() {
            debug!("catalog load already started for this activation");
            return None;
        }
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies a fetch result. On failure the collection keeps its previous
    /// contents. Results from a previous activation are dropped.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!("ignoring catalog response from a deactivated view");
            return false;
        }
        if !self.load.is_loading() {
            return false;
        }

        match result {
            Ok(products) => {
                let count = products.len();
                info!(count, "catalog loaded");
                self.products = products;
                self.load.finish::<FetchError>(Ok(count))
            }
            Err(error) => {
                warn!(%error, "error loading products");
                self.load.finish(Err(error))
            }
        }
    }

    /// Fetches the collection once per activation. Returns whether a result
    /// was applied.
    pub async fn activate<S>(&mut self, source: &S) -> bool
    where
        S: CatalogSource + ?Sized,
    {
        let Some(ticket) = self.begin_load() else {
            return false;
        };
        let result = source.fetch_products().await;
        self.complete_load(ticket, result)
    }

    /// Ends the current activation; in-flight results become stale and the
    /// next `activate` fetches again. The collection keeps its contents.
    pub fn deactivate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.load = LoadState::Idle;
    }

    /// Appends a valid draft under a fresh id. Invalid drafts are ignored.
    pub fn add_product(&mut self, draft: NewProduct) -> Option<ProductId> {
        let id = ProductId(self.ids.next_unused(|id| self.contains(ProductId(id))));
        match draft.into_product(id) {
            Ok(product) => {
                debug!(product_id = %id, "added product locally");
                self.products.push(product);
                Some(id)
            }
            Err(reason) => {
                debug!(%reason, "rejected product draft");
                None
            }
        }
    }

    /// Removes the product with `product_id`, keeping the order of the rest.
    pub fn delete_product(&mut self, product_id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == product_id)?;
        Some(self.products.remove(index))
    }

    pub fn delete_candidate(&self) -> Option<ProductId> {
        self.delete_candidate
    }

    /// Stages `product_id` for deletion, replacing any earlier candidate.
    pub fn request_delete(&mut self, product_id: ProductId) {
        self.delete_candidate = Some(product_id);
    }

    pub fn confirm_delete(&mut self) -> Option<Product> {
        let candidate = self.delete_candidate.take()?;
        self.delete_product(candidate)
    }

    pub fn cancel_delete(&mut self) -> Option<ProductId> {
        self.delete_candidate.take()
    }

    pub fn is_adding(&self) -> bool {
        self.add_draft.is_some()
    }

    /// Opens the add form with an empty draft. An open form is left as is.
    pub fn open_add(&mut self) {
        if self.add_draft.is_none() {
            self.add_draft = Some(NewProduct::default());
        }
    }

    pub fn add_draft(&self) -> Option<&NewProduct> {
        self.add_draft.as_ref()
    }

    pub fn add_draft_mut(&mut self) -> Option<&mut NewProduct> {
        self.add_draft.as_mut()
    }

    /// Submits the open draft. The form closes only when the draft is
    /// accepted.
    pub fn confirm_add(&mut self) -> Option<ProductId> {
        let draft = self.add_draft.as_ref()?;
        if let Err(reason) = draft.validate() {
            debug!(%reason, "add form is not submittable");
            return None;
        }
        let draft = self.add_draft.take()?;
        self.add_product(draft)
    }

    pub fn cancel_add(&mut self) -> Option<NewProduct> {
        self.add_draft.take()
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(Arc::new(IdGenerator::new()))
    }
}

#[cfg(test)]
#[path = "tests/catalog_view_tests.rs"]
mod tests;
