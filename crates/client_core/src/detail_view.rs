//! Single-product view with a local edit form and comment thread.

use std::sync::Arc;

use chrono::Utc;
use shared::domain::{Comment, CommentId, Product, ProductEdit, ProductId};
use tracing::{debug, info, warn};

use crate::{
    ids::IdGenerator,
    load_state::{LoadState, LoadTicket},
    CatalogSource, FetchError,
};

/// Every action other than loading is a no-op until the product is loaded.
#[derive(Debug)]
pub struct DetailView {
    product_id: ProductId,
    ids: Arc<IdGenerator>,
    generation: u64,
    load: LoadState<Product>,
    edit: Option<ProductEdit>,
}

impl DetailView {
    pub fn new(product_id: ProductId, ids: Arc<IdGenerator>) -> Self {
        Self {
            product_id,
            ids,
            generation: 0,
            load: LoadState::Idle,
            edit: None,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn load_state(&self) -> &LoadState<Product> {
        &self.load
    }

    pub fn product(&self) -> Option<&Product> {
        self.load.loaded()
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.load.start() {
            return None;
        }
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Product, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(product_id = %self.product_id, "ignoring product response from a deactivated view");
            return false;
        }
        if !self.load.is_loading() {
            return false;
        }
        if let Err(error) = &result {
            if error.is_not_found() {
                info!(product_id = %self.product_id, "product not found");
            } else {
                warn!(product_id = %self.product_id, %error, "error loading product");
            }
        } else {
            info!(product_id = %self.product_id, "product loaded");
        }
        self.load.finish(result)
    }

    pub async fn activate<S>(&mut self, source: &S) -> bool
    where
        S: CatalogSource + ?Sized,
    {
        let Some(ticket) = self.begin_load() else {
            return false;
        };
        let result = source.fetch_product(self.product_id).await;
        self.complete_load(ticket, result)
    }

    /// Drops the loaded product and any open edit; the next `activate`
    /// fetches again.
    pub fn deactivate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.load = LoadState::Idle;
        self.edit = None;
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Seeds the edit form from the loaded product.
    pub fn open_edit(&mut self) -> bool {
        let Some(product) = self.load.loaded() else {
            return false;
        };
        self.edit = Some(ProductEdit::from(product));
        true
    }

    pub fn edit_draft(&self) -> Option<&ProductEdit> {
        self.edit.as_ref()
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut ProductEdit> {
        self.edit.as_mut()
    }

    /// Copies the draft onto the loaded product and closes the form.
    pub fn save_edit(&mut self) -> bool {
        let Some(product) = self.load.loaded_mut() else {
            return false;
        };
        let Some(edit) = self.edit.take() else {
            return false;
        };
        edit.apply_to(product);
        debug!(product_id = %product.id, "saved product edit locally");
        true
    }

    pub fn cancel_edit(&mut self) -> Option<ProductEdit> {
        self.edit.take()
    }

    /// Appends a comment with the trimmed `text`. Blank text is ignored.
    pub fn add_comment(&mut self, text: &str) -> Option<CommentId> {
        let description = text.trim();
        if description.is_empty() {
            return None;
        }
        let product = self.load.loaded_mut()?;
        let id = CommentId(
            self.ids
                .next_unused(|id| product.has_comment(CommentId(id))),
        );
        product.comments.push(Comment {
            id,
            product_id: product.id,
            description: description.to_string(),
            date: Utc::now(),
        });
        Some(id)
    }

    pub fn delete_comment(&mut self, comment_id: CommentId) -> Option<Comment> {
        self.load.loaded_mut()?.remove_comment(comment_id)
    }
}

#[cfg(test)]
#[path = "tests/detail_view_tests.rs"]
mod tests;
