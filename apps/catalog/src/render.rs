//! Plain-text rendering of the catalog views.

use std::fmt::Write as _;

use client_core::{CatalogView, DetailView, LoadState, Route};
use shared::domain::{NewProduct, Product, ProductEdit};

pub fn product_line(product: &Product) -> String {
    format!(
        "{name}  count: {count}  size: {size}  weight: {weight}  {link}",
        name = product.name,
        count = product.count,
        size = product.size,
        weight = product.weight,
        link = Route::Product(product.id),
    )
}

pub fn catalog(view: &CatalogView) -> String {
    let mut out = format!("Products (sorted by {})\n", view.sort_key());
    match view.load_state() {
        LoadState::Idle | LoadState::Loading => out.push_str("Loading...\n"),
        LoadState::Failed(reason) => {
            let _ = writeln!(out, "(could not load products: {reason})");
        }
        LoadState::Loaded(_) => {}
    }
    let sorted = view.sorted();
    if sorted.is_empty() {
        out.push_str("  no products\n");
    }
    for product in &sorted {
        let _ = writeln!(out, "  {}", product_line(product));
    }
    if let Some(candidate) = view.delete_candidate() {
        let _ = writeln!(
            out,
            "Delete product {candidate}? Type `confirm` or `cancel`."
        );
    }
    if let Some(draft) = view.add_draft() {
        out.push_str(&new_product_form(draft));
    }
    out
}

pub fn new_product_form(draft: &NewProduct) -> String {
    let mut out = String::from("Add Product\n");
    let _ = writeln!(out, "  name: {}", draft.name);
    let _ = writeln!(out, "  image: {}", draft.image_url);
    let _ = writeln!(out, "  count: {}", draft.count);
    let _ = writeln!(out, "  width: {}", draft.size.width);
    let _ = writeln!(out, "  height: {}", draft.size.height);
    let _ = writeln!(out, "  weight: {}", draft.weight);
    match draft.validate() {
        Ok(()) => out.push_str("  ready to submit\n"),
        Err(reason) => {
            let _ = writeln!(out, "  not ready: {reason}");
        }
    }
    out
}

pub fn edit_form(edit: &ProductEdit) -> String {
    let mut out = String::from("Edit Product\n");
    let _ = writeln!(out, "  name: {}", edit.name);
    let _ = writeln!(out, "  image: {}", edit.image_url);
    let _ = writeln!(out, "  count: {}", edit.count);
    let _ = writeln!(out, "  width: {}", edit.size.width);
    let _ = writeln!(out, "  height: {}", edit.size.height);
    let _ = writeln!(out, "  weight: {}", edit.weight);
    out
}

pub fn product_detail(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "  image: {}", product.image_url);
    let _ = writeln!(out, "  count: {}", product.count);
    let _ = writeln!(out, "  size: {} x {}", product.size.width, product.size.height);
    let _ = writeln!(out, "  weight: {}", product.weight);
    out.push_str("Comments\n");
    if product.comments.is_empty() {
        out.push_str("  none yet\n");
    }
    for comment in &product.comments {
        let _ = writeln!(
            out,
            "  [{}] {} ({})",
            comment.id,
            comment.description,
            comment.date.to_rfc3339()
        );
    }
    out
}

pub fn detail(view: &DetailView) -> String {
    match view.load_state() {
        LoadState::Idle | LoadState::Loading => "Loading...\n".to_string(),
        LoadState::Failed(reason) => {
            format!("could not load product {}: {reason}\n", view.product_id())
        }
        LoadState::Loaded(product) => {
            let mut out = product_detail(product);
            if let Some(edit) = view.edit_draft() {
                out.push_str(&edit_form(edit));
            }
            out
        }
    }
}
