//! The fixed coffee menu.
//!
//! The catalog is compiled in and built once on first access. It has no
//! persistence and no mutation, so there is no service layer in front of it:
//! handlers read it directly.

pub mod error;

pub use error::*;

use crate::model::Product;
use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use tracing::debug;

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        coffee(
            "1",
            "Caffe Mocha",
            "Machiato",
            "Deep Foam",
            453,
            48,
            230,
            "/images/2.png",
            "A cappuccino is an approximately 150 ml (5 oz) beverage, with 25 ml of espresso coffee and 85ml of fresh milk the foaming milk is poured on top of the espresso through the spout of the steam wand.",
        ),
        coffee(
            "2",
            "Flat White",
            "Latte",
            "Espresso",
            353,
            48,
            189,
            "/images/3.png",
            "A flat white is a coffee drink consisting of espresso with microfoam. It is similar to a latte but smaller in volume and with less microfoam.",
        ),
        coffee(
            "3",
            "Caffe Latte",
            "Latte",
            "Smooth Milk",
            399,
            49,
            312,
            "/images/4.png",
            "Caffe latte is a coffee drink made with espresso and steamed milk. The term comes from the Italian caffè e latte, meaning coffee and milk.",
        ),
        coffee(
            "4",
            "Americano",
            "Americano",
            "Bold Espresso",
            299,
            47,
            156,
            "/images/5.png",
            "Caffè Americano is a type of coffee drink prepared by diluting an espresso with hot water, giving it a similar strength to but different flavor from brewed coffee.",
        ),
    ]
});

/// Prices are given in cents and ratings in tenths.
#[allow(clippy::too_many_arguments)]
fn coffee(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    price_cents: i64,
    rating_tenths: i64,
    reviews: u32,
    image: &str,
    full_description: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price: BigDecimal::new(price_cents.into(), 2),
        rating: BigDecimal::new(rating_tenths.into(), 1),
        reviews,
        image: image.to_string(),
        full_description: Some(full_description.to_string()),
    }
}

/// Returns every product, always in the same order.
pub fn list_products() -> &'static [Product] {
    &PRODUCTS
}

/// Looks up a single product by its id.
pub fn get_product(id: &str) -> Result<&'static Product, CatalogError> {
    let product = PRODUCTS.iter().find(|p| p.id == id);
    debug!(id, found = product.is_some(), "Get product");
    product.ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_is_fixed_and_ordered() {
        let ids: Vec<&str> = list_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(list_products(), list_products());
    }

    #[test]
    fn test_get_product_flat_white() {
        let product = get_product("2").unwrap();
        assert_eq!(product.name, "Flat White");
        assert_eq!(product.price.to_string(), "3.53");
        assert_eq!(product.rating.to_string(), "4.8");
        assert_eq!(product.reviews, 189);
    }

    #[test]
    fn test_get_product_unknown_id() {
        assert_eq!(get_product("99"), Err(CatalogError::NotFound("99".to_string())));
    }

    #[test]
    fn test_product_wire_format() {
        let json = serde_json::to_value(get_product("4").unwrap()).unwrap();
        assert_eq!(json["price"], "2.99");
        assert_eq!(json["rating"], "4.7");
        assert_eq!(json["reviews"], "156");
        assert_eq!(json["image"], "/images/5.png");
        assert!(json["fullDescription"].as_str().unwrap().starts_with("Caffè Americano"));
    }
}
