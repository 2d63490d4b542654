use rust_decimal::Decimal;

use crate::models::{CartLine, Product};

/// Session cart held in memory only.
///
/// Lines keep insertion order and there is at most one line per product id.
/// Totals are derived on every call, never cached.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Merges into the existing line for the product, or appends a new one.
    /// Stock is not checked here. A zero quantity changes nothing.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    /// Sets the quantity of an existing line; zero drops the line.
    /// Returns whether a line matched.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_from_cart(product_id);
        }
        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
