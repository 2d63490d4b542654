use rust_decimal::Decimal;

use crate::models::{Category, Product};

const RELATED_LIMIT: usize = 4;

/// Narrowing criteria for catalog queries.
///
/// Every criterion is combined with AND. The default admits every product:
/// no category, an empty search term, the price range `[0, +inf)` and stock
/// ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Decimal,
    /// `None` means unbounded.
    pub max_price: Option<Decimal>,
    pub in_stock: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: Decimal::ZERO,
            max_price: None,
            in_stock: false,
        }
    }
}

impl ProductFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn price_range(mut self, min: Decimal, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock = true;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category.as_deref() {
            if !product.category.as_str().eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }

        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if product.price < self.min_price {
            return false;
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }

        !self.in_stock || product.in_stock()
    }

    /// Applies the filter, keeping the input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Read-only product list backing every browsing view.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in storefront assortment.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn query(&self, filter: &ProductFilter) -> Vec<Product> {
        filter.apply(&self.products).into_iter().cloned().collect()
    }

    /// Up to four other products from the same category.
    pub fn related(&self, product: &Product) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RELATED_LIMIT)
            .cloned()
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: Category,
    image: &str,
    stock: u32,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        category,
        image_url: format!(
            "https://images.unsplash.com/{image}?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60"
        ),
        stock,
        rating: Some(rating),
        reviews: Some(reviews),
    }
}

fn seed_products() -> Vec<Product> {
    use Category::*;

    vec![
        product(
            "1",
            "Organic Tomato Seeds",
            "High-quality organic tomato seeds for planting. Produces juicy, red tomatoes with excellent flavor.",
            299,
            Seeds,
            "photo-1592921871007-303b15ec8bb3",
            50,
            4.5,
            28,
        ),
        product(
            "2",
            "NPK Fertilizer - All Purpose",
            "Balanced NPK fertilizer suitable for most crops. Provides essential nutrients for healthy plant growth.",
            1549,
            Fertilizers,
            "photo-1615921511258-0aa98c84d400",
            30,
            4.8,
            42,
        ),
        product(
            "3",
            "Organic Pesticide Spray",
            "Natural pesticide made from plant extracts. Safe for organic farming and effective against common pests.",
            1299,
            Pesticides,
            "photo-1586093127013-5af2578a2179",
            15,
            4.2,
            19,
        ),
        product(
            "4",
            "Corn Seeds - High Yield Variety",
            "Premium corn seeds that produce high yields. Resistant to common corn diseases.",
            599,
            Seeds,
            "photo-1551754655-cd27e38d2076",
            45,
            4.6,
            35,
        ),
        product(
            "5",
            "Insecticide for Fruit Trees",
            "Specially formulated to protect fruit trees from harmful insects without affecting the fruit quality.",
            1899,
            Insecticides,
            "photo-1597916829826-02e5bb4a54e0",
            20,
            4.4,
            23,
        ),
        product(
            "6",
            "Phosphorus-Rich Fertilizer",
            "High phosphorus fertilizer ideal for flowering and fruiting stages of plant growth.",
            1449,
            Fertilizers,
            "photo-1474440692490-2e83ae13dbc5",
            25,
            4.7,
            31,
        ),
        product(
            "7",
            "Wheat Seeds - Drought Resistant",
            "Drought-resistant wheat seeds suitable for areas with limited water supply.",
            699,
            Seeds,
            "photo-1598694730964-b6164435cd43",
            40,
            4.3,
            27,
        ),
        product(
            "8",
            "Fungicide for Vegetable Gardens",
            "Protects vegetables from fungal diseases. Safe to use up to harvest time.",
            1399,
            Pesticides,
            "photo-1566385101042-1a0aa0c1268c",
            18,
            4.5,
            22,
        ),
        product(
            "9",
            "Organic Cotton Seeds",
            "Non-GMO, organic cotton seeds. Produces high-quality cotton fibers.",
            899,
            Seeds,
            "photo-1563380276-18da890577cc",
            0,
            4.1,
            16,
        ),
        product(
            "10",
            "Nitrogen Booster",
            "Quickly boosts nitrogen levels in soil. Ideal for leafy vegetables and early growth stages.",
            1199,
            Fertilizers,
            "photo-1518640467707-6811f4a6ab73",
            22,
            4.9,
            38,
        ),
        product(
            "11",
            "Potato Seeds - Russet Variety",
            "High-quality potato seeds for growing russet potatoes. Good for baking and frying.",
            749,
            Seeds,
            "photo-1518977676601-b53f82aba655",
            35,
            4.4,
            29,
        ),
        product(
            "12",
            "Eco-friendly Insecticide",
            "Biodegradable insecticide that targets harmful insects while protecting beneficial ones.",
            1699,
            Insecticides,
            "photo-1584390962032-f4639ec49b61",
            0,
            4.6,
            25,
        ),
    ]
}
