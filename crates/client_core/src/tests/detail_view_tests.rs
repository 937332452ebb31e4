use super::*;
use crate::test_support::{product, StubCatalog};
use shared::domain::{Size, Weight};

fn with_comments(mut base: Product, ids: &[i64]) -> Product {
    let date = "2024-05-01T10:00:00Z".parse().expect("date");
    for id in ids {
        base.comments.push(Comment {
            id: CommentId(*id),
            product_id: base.id,
            description: format!("comment {id}"),
            date,
        });
    }
    base
}

fn loaded_view(product: Product) -> DetailView {
    let mut view = DetailView::new(product.id, Arc::new(IdGenerator::new()));
    let ticket = view.begin_load().expect("ticket");
    assert!(view.complete_load(ticket, Ok(product)));
    view
}

fn comment_ids(view: &DetailView) -> Vec<i64> {
    view.product()
        .expect("loaded")
        .comments
        .iter()
        .map(|c| c.id.0)
        .collect()
}

#[tokio::test]
async fn activation_fetches_the_routed_product_once() {
    let source = StubCatalog::ok(vec![product(1, "pear", 2), product(2, "fig", 3)]);
    let mut view = DetailView::new(ProductId(2), Arc::new(IdGenerator::new()));
    assert!(!view.load_state().is_settled());

    assert!(view.activate(&source).await);
    assert!(!view.activate(&source).await);

    assert_eq!(source.calls(), 1);
    assert!(view.load_state().is_settled());
    assert_eq!(view.product().map(|p| p.name.as_str()), Some("fig"));
}

#[tokio::test]
async fn missing_product_ends_in_failed_state() {
    let source = StubCatalog::ok(Vec::new());
    let mut view = DetailView::new(ProductId(9), Arc::new(IdGenerator::new()));

    view.activate(&source).await;

    assert!(view.product().is_none());
    assert!(view.load_state().failure().is_some());
    assert!(view.load_state().is_settled());
}

#[test]
fn actions_are_no_ops_while_loading() {
    let mut view = DetailView::new(ProductId(1), Arc::new(IdGenerator::new()));
    let _ticket = view.begin_load().expect("ticket");

    assert!(view.load_state().is_loading());
    assert!(!view.open_edit());
    assert!(!view.save_edit());
    assert!(view.add_comment("Great product").is_none());
    assert!(view.delete_comment(CommentId(1)).is_none());
    assert!(view.load_state().is_loading());
}

#[test]
fn late_response_after_deactivate_is_ignored() {
    let mut view = DetailView::new(ProductId(1), Arc::new(IdGenerator::new()));
    let ticket = view.begin_load().expect("ticket");
    view.deactivate();

    assert!(!view.complete_load(ticket, Ok(product(1, "pear", 1))));
    assert!(view.product().is_none());
    assert!(view.load_state().is_idle());
}

#[tokio::test]
async fn reactivation_fetches_the_product_again() {
    let source = StubCatalog::ok(vec![product(1, "pear", 1)]);
    let mut view = DetailView::new(ProductId(1), Arc::new(IdGenerator::new()));
    assert!(view.activate(&source).await);
    assert!(view.open_edit());

    view.deactivate();
    assert!(view.product().is_none());
    assert!(!view.is_editing());

    assert!(view.activate(&source).await);
    assert_eq!(source.calls(), 2);
    assert_eq!(view.product().map(|p| p.name.as_str()), Some("pear"));
}

#[test]
fn edit_save_applies_draft_and_keeps_comments() {
    let mut view = loaded_view(with_comments(product(1, "pear", 2), &[1]));

    assert!(view.open_edit());
    {
        let draft = view.edit_draft_mut().expect("draft");
        draft.name = "Golden pear".to_string();
        draft.count = 12;
        draft.size = Size::new(4.0, 5.0);
        draft.weight = Weight::new("1kg");
    }
    assert_eq!(view.product().map(|p| p.name.as_str()), Some("pear"));

    assert!(view.save_edit());

    let saved = view.product().expect("loaded");
    assert!(!view.is_editing());
    assert_eq!(saved.id, ProductId(1));
    assert_eq!(saved.name, "Golden pear");
    assert_eq!(saved.count, 12);
    assert_eq!(saved.size, Size::new(4.0, 5.0));
    assert_eq!(saved.weight, Weight::new("1kg"));
    assert_eq!(saved.comments.len(), 1);
}

#[test]
fn edit_cancel_leaves_product_untouched() {
    let mut view = loaded_view(product(1, "pear", 2));
    let before = view.product().cloned();

    view.open_edit();
    view.edit_draft_mut().expect("draft").name = "discarded".to_string();
    assert!(view.cancel_edit().is_some());

    assert!(!view.is_editing());
    assert_eq!(view.product().cloned(), before);
    assert!(!view.save_edit());
}

#[test]
fn blank_comment_is_rejected() {
    let mut view = loaded_view(with_comments(product(1, "pear", 2), &[1]));

    assert!(view.add_comment("").is_none());
    assert!(view.add_comment(" \t\n ").is_none());
    assert_eq!(comment_ids(&view), vec![1]);
}

#[test]
fn comment_is_appended_with_back_reference() {
    let mut view = loaded_view(with_comments(product(4, "pear", 2), &[1]));

    let id = view.add_comment("  Great product ").expect("accepted");

    let comments = &view.product().expect("loaded").comments;
    assert_eq!(comments.len(), 2);
    let added = comments.last().expect("appended");
    assert_eq!(added.id, id);
    assert_eq!(added.description, "Great product");
    assert_eq!(added.product_id, ProductId(4));
}

#[test]
fn consecutive_comments_get_distinct_ids() {
    let mut view = loaded_view(product(1, "pear", 2));
    let first = view.add_comment("one").expect("first");
    let second = view.add_comment("two").expect("second");
    assert_ne!(first, second);
}

#[test]
fn delete_comment_preserves_order() {
    let mut view = loaded_view(with_comments(product(1, "pear", 2), &[1, 2, 3]));

    let removed = view.delete_comment(CommentId(2)).expect("removed");

    assert_eq!(removed.id, CommentId(2));
    assert_eq!(comment_ids(&view), vec![1, 3]);
}

#[test]
fn delete_unknown_comment_is_a_no_op() {
    let mut view = loaded_view(with_comments(product(1, "pear", 2), &[1, 2]));
    assert!(view.delete_comment(CommentId(7)).is_none());
    assert_eq!(comment_ids(&view), vec![1, 2]);
}
