use super::*;
use shared::domain::{Size, Weight};

fn setup() -> ApiContext {
    let products = [(1, "Lamp"), (2, "Desk")]
        .into_iter()
        .map(|(id, name)| Product {
            id: ProductId(id),
            image_url: format!("http://img/{id}.png"),
            name: name.to_string(),
            count: 1,
            size: Size::new(1.0, 1.0),
            weight: Weight::new("1kg"),
            comments: Vec::new(),
        })
        .collect();
    ApiContext {
        catalog: CatalogStore::from_products(products),
    }
}

#[test]
fn list_products_keeps_catalog_order() {
    let ctx = setup();
    let names: Vec<_> = list_products(&ctx).into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Lamp", "Desk"]);
}

#[test]
fn get_product_returns_match() {
    let ctx = setup();
    let product = get_product(&ctx, ProductId(2)).expect("product");
    assert_eq!(product.name, "Desk");
}

#[test]
fn unknown_product_is_not_found() {
    let ctx = setup();
    let err = get_product(&ctx, ProductId(3)).expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::NotFound));
}

#[test]
fn non_numeric_id_is_a_validation_error() {
    let err = parse_product_id("abc").expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::Validation));
    assert_eq!(parse_product_id(" 7 ").expect("id"), ProductId(7));
}
