use agri_storefront::{
    cart::Cart,
    models::{Category, Product},
};
use rust_decimal::Decimal;

fn product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: "test product".into(),
        price: Decimal::from(price),
        category: Category::Seeds,
        image_url: String::new(),
        stock: 10,
        rating: None,
        reviews: None,
    }
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let mut cart = Cart::new();
    let a = product("a", 10);
    for qty in [1, 4, 2, 7] {
        cart.add_to_cart(a.clone(), qty);
    }

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.line("a").map(|l| l.quantity), Some(14));
    assert_eq!(cart.total_items(), 14);
}

#[test]
fn add_then_remove_scenario() {
    let mut cart = Cart::new();
    let a = product("a", 10);

    cart.add_to_cart(a.clone(), 2);
    cart.add_to_cart(a, 3);
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 5);
    assert_eq!(cart.subtotal(), Decimal::from(50));

    assert!(cart.remove_from_cart("a"));
    assert!(cart.is_empty());
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(cart.total_items(), 0);
}

#[test]
fn removing_unknown_product_is_a_noop() {
    let mut cart = Cart::new();
    cart.add_to_cart(product("a", 3), 1);
    cart.add_to_cart(product("b", 4), 2);
    let before: Vec<_> = cart.lines().to_vec();

    assert!(!cart.remove_from_cart("missing"));
    assert_eq!(cart.lines(), before.as_slice());
}

#[test]
fn subtotal_tracks_every_mutation() {
    let mut cart = Cart::new();
    let seeds = Product {
        price: Decimal::new(299, 2),
        ..product("1", 0)
    };
    let fertilizer = Product {
        price: Decimal::new(1549, 2),
        ..product("2", 0)
    };

    cart.add_to_cart(seeds, 3);
    assert_eq!(cart.subtotal(), Decimal::new(897, 2));

    cart.add_to_cart(fertilizer, 1);
    assert_eq!(cart.subtotal(), Decimal::new(2446, 2));

    assert!(cart.update_quantity("2", 2));
    assert_eq!(cart.subtotal(), Decimal::new(3995, 2));
    assert_eq!(cart.total_items(), 5);

    let expected: Decimal = cart
        .lines()
        .iter()
        .map(|l| l.product.price * Decimal::from(l.quantity))
        .sum();
    assert_eq!(cart.subtotal(), expected);
}

#[test]
fn update_quantity_ignores_unknown_and_drops_on_zero() {
    let mut cart = Cart::new();
    cart.add_to_cart(product("a", 1), 2);

    assert!(!cart.update_quantity("missing", 9));
    assert_eq!(cart.total_items(), 2);

    assert!(cart.update_quantity("a", 0));
    assert!(cart.line("a").is_none());
}

#[test]
fn lines_keep_insertion_order_and_zero_adds_nothing() {
    let mut cart = Cart::new();
    cart.add_to_cart(product("c", 1), 1);
    cart.add_to_cart(product("a", 1), 1);
    cart.add_to_cart(product("b", 1), 0);
    cart.add_to_cart(product("c", 1), 1);

    let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, ["c", "a"]);

    cart.clear();
    assert!(cart.is_empty());
}
