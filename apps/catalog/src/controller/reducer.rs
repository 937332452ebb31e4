//! Applies shell commands to the list and detail views of one session.

use std::sync::Arc;

use client_core::{CatalogSource, CatalogView, DetailView, IdGenerator, Route, SortKey};
use shared::domain::{ProductId, Size};
use tracing::debug;

use super::commands::{DraftField, ShellCommand, HELP};
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }
}

/// Interactive session state. The list view stays mounted for the whole
/// session, so local additions and deletions survive visiting a product.
pub struct Session<S> {
    source: S,
    ids: Arc<IdGenerator>,
    catalog: CatalogView,
    detail: Option<DetailView>,
}

impl<S: CatalogSource> Session<S> {
    pub fn new(source: S, sort_key: SortKey) -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            source,
            catalog: CatalogView::new(Arc::clone(&ids)).with_sort_key(sort_key),
            ids,
            detail: None,
        }
    }

    pub fn route(&self) -> Route {
        match &self.detail {
            Some(detail) => Route::Product(detail.product_id()),
            None => Route::List,
        }
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Loads the list page and renders it.
    pub async fn start(&mut self) -> String {
        self.catalog.activate(&self.source).await;
        render::catalog(&self.catalog)
    }

    pub async fn apply(&mut self, command: ShellCommand) -> Reply {
        debug!(command = command.name(), route = %self.route(), "applying shell command");
        match command {
            ShellCommand::Help => Reply::text(HELP),
            ShellCommand::Quit => Reply::Quit,
            ShellCommand::List => Reply::Output(self.render_current()),
            ShellCommand::Sort(sort_key) => {
                self.catalog.set_sort_key(sort_key);
                Reply::Output(render::catalog(&self.catalog))
            }
            ShellCommand::Add => {
                if self.detail.is_some() {
                    return Reply::text("go `back` to the list to add a product");
                }
                self.catalog.open_add();
                Reply::Output(render::catalog(&self.catalog))
            }
            ShellCommand::Set { field, value } => self.set_field(field, &value),
            ShellCommand::Submit => self.submit(),
            ShellCommand::Discard => match self.detail.as_mut() {
                Some(detail) => {
                    if detail.cancel_edit().is_none() {
                        return Reply::text("no open form");
                    }
                    Reply::Output(render::detail(detail))
                }
                None => {
                    if self.catalog.cancel_add().is_none() {
                        return Reply::text("no open form");
                    }
                    Reply::Output(render::catalog(&self.catalog))
                }
            },
            ShellCommand::Delete(raw_id) => {
                if self.detail.is_some() {
                    return Reply::text("go `back` to the list to delete a product");
                }
                self.catalog.request_delete(ProductId(raw_id));
                Reply::Output(render::catalog(&self.catalog))
            }
            ShellCommand::Confirm | ShellCommand::Cancel if self.detail.is_some() => {
                Reply::text("no delete is pending on this page")
            }
            ShellCommand::Confirm => match self.catalog.confirm_delete() {
                Some(product) => Reply::Output(format!(
                    "deleted {}\n{}",
                    product.name,
                    render::catalog(&self.catalog)
                )),
                None => Reply::Output(render::catalog(&self.catalog)),
            },
            ShellCommand::Cancel => {
                self.catalog.cancel_delete();
                Reply::Output(render::catalog(&self.catalog))
            }
            ShellCommand::Go(Route::List) | ShellCommand::Back => {
                self.close_detail();
                Reply::Output(render::catalog(&self.catalog))
            }
            ShellCommand::Go(Route::Product(product_id)) => {
                Reply::Output(self.open_detail(product_id).await)
            }
            ShellCommand::Edit => {
                let Some(detail) = self.detail.as_mut() else {
                    return Reply::text("open a product first");
                };
                // Before the product loads this just re-renders the loading state.
                detail.open_edit();
                Reply::Output(render::detail(detail))
            }
            ShellCommand::Save => {
                let Some(detail) = self.detail.as_mut() else {
                    return Reply::text("open a product first");
                };
                if !detail.save_edit() {
                    return Reply::text("nothing to save; type `edit` first");
                }
                Reply::Output(render::detail(detail))
            }
            ShellCommand::Comment(text) => {
                let Some(detail) = self.detail.as_mut() else {
                    return Reply::text("open a product first");
                };
                if !detail.load_state().is_loaded() {
                    return Reply::Output(render::detail(detail));
                }
                match detail.add_comment(&text) {
                    Some(_) => Reply::Output(render::detail(detail)),
                    None => Reply::text("comment text must not be blank"),
                }
            }
            ShellCommand::Uncomment(comment_id) => {
                let Some(detail) = self.detail.as_mut() else {
                    return Reply::text("open a product first");
                };
                match detail.delete_comment(comment_id) {
                    Some(_) => Reply::Output(render::detail(detail)),
                    None => Reply::text(format!("no comment {comment_id}")),
                }
            }
        }
    }

    fn render_current(&self) -> String {
        match &self.detail {
            Some(detail) => render::detail(detail),
            None => render::catalog(&self.catalog),
        }
    }

    /// Leaving the list closes its add form and delete prompt; the
    /// collection itself is kept.
    async fn open_detail(&mut self, product_id: ProductId) -> String {
        self.close_detail();
        self.catalog.cancel_add();
        self.catalog.cancel_delete();
        let mut detail = DetailView::new(product_id, Arc::clone(&self.ids));
        detail.activate(&self.source).await;
        let out = render::detail(&detail);
        self.detail = Some(detail);
        out
    }

    fn close_detail(&mut self) {
        if let Some(mut detail) = self.detail.take() {
            detail.deactivate();
        }
    }

    /// Field edits go to the form of the current page: the edit form on a
    /// product page, the add form on the list.
    fn set_field(&mut self, field: DraftField, value: &str) -> Reply {
        if let Some(detail) = self.detail.as_mut() {
            return set_edit_field(detail, field, value);
        }
        if !self.catalog.is_adding() {
            return Reply::text("no open form; type `add` first");
        }
        let Some(draft) = self.catalog.add_draft_mut() else {
            return Reply::text("no open form; type `add` first");
        };
        match field {
            DraftField::Name => draft.name = value.to_string(),
            DraftField::ImageUrl => draft.image_url = value.to_string(),
            DraftField::Weight => draft.weight = value.into(),
            DraftField::Count => match value.parse::<i64>() {
                Ok(count) => draft.count = count,
                Err(_) => return bad_value(field, value),
            },
            DraftField::Width | DraftField::Height => {
                if let Err(reply) = set_dimension(&mut draft.size, field, value) {
                    return reply;
                }
            }
        }
        Reply::Output(render::new_product_form(draft))
    }

    fn submit(&mut self) -> Reply {
        let Some(draft) = self.catalog.add_draft() else {
            return Reply::text("no open form; type `add` first");
        };
        if let Err(reason) = draft.validate() {
            return Reply::text(format!("cannot submit: {reason}"));
        }
        match self.catalog.confirm_add() {
            Some(product_id) => Reply::Output(format!(
                "added product {product_id}\n{}",
                render::catalog(&self.catalog)
            )),
            None => Reply::text("cannot submit the form"),
        }
    }
}

fn set_edit_field(detail: &mut DetailView, field: DraftField, value: &str) -> Reply {
    if !detail.is_editing() {
        return Reply::text("no open form; type `edit` first");
    }
    let Some(edit) = detail.edit_draft_mut() else {
        return Reply::text("no open form; type `edit` first");
    };
    match field {
        DraftField::Name => edit.name = value.to_string(),
        DraftField::ImageUrl => edit.image_url = value.to_string(),
        DraftField::Weight => edit.weight = value.into(),
        DraftField::Count => match value.parse::<u32>() {
            Ok(count) => edit.count = count,
            Err(_) => return bad_value(field, value),
        },
        DraftField::Width | DraftField::Height => {
            if let Err(reply) = set_dimension(&mut edit.size, field, value) {
                return reply;
            }
        }
    }
    Reply::Output(render::edit_form(edit))
}

fn set_dimension(size: &mut Size, field: DraftField, value: &str) -> Result<(), Reply> {
    let parsed = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| bad_value(field, value))?;
    if field == DraftField::Width {
        size.width = parsed;
    } else {
        size.height = parsed;
    }
    Ok(())
}

fn bad_value(field: DraftField, value: &str) -> Reply {
    Reply::text(format!("'{value}' is not a valid {}", field.as_str()))
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
