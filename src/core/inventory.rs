//! In-memory product collection and its operations.
//!
//! The [`Inventory`] is an ordered sequence of [`Product`]s, insertion
//! order preserved (it drives the numbering in the listing). Names are
//! unique case-insensitively; price and quantity are never negative.
//! Expected conditions (duplicate, not-found) come back as error values,
//! never panics.

use serde::{Deserialize, Serialize};

use crate::core::error::InventoryError;

/// A named, priced, quantified inventory line item.
///
/// Names have no identity beyond their text: rename is not supported, so
/// a product's name is immutable for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Construct a product, rejecting empty names and negative prices.
    ///
    /// The shell's prompts already screen numeric input, but this path is
    /// also reachable directly (tests, future callers), so it validates
    /// on its own.
    pub fn new(name: &str, price: f64, quantity: u32) -> Result<Self, InventoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::Validation(
                "product name cannot be empty".to_string(),
            ));
        }
        if price < 0.0 {
            return Err(InventoryError::Validation(
                "price cannot be negative".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            price,
            quantity,
        })
    }

    /// Case-folded name comparison. Display keeps the original casing.
    pub fn matches_name(&self, needle: &str) -> bool {
        self.name.to_lowercase() == needle.trim().to_lowercase()
    }
}

/// Derived totals over the collection, recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_value: f64,
}

/// The ordered product collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Append a new product at the end of the collection.
    ///
    /// Rejects, in order: empty name (after trimming), then a name equal
    /// case-insensitively to an existing product's. The collection is
    /// unchanged on any rejection.
    pub fn add(&mut self, name: &str, price: f64, quantity: u32) -> Result<(), InventoryError> {
        let product = Product::new(name, price, quantity)?;
        if self.find_by_name(&product.name).is_some() {
            return Err(InventoryError::Duplicate(product.name));
        }
        self.products.push(product);
        Ok(())
    }

    /// First case-insensitive name match in insertion order. Uniqueness
    /// means there is at most one.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_name(name))
    }

    /// Replace the quantity of the named product, returning the previous
    /// value. The collection is unchanged when the name is not found.
    pub fn update_quantity(
        &mut self,
        name: &str,
        new_quantity: u32,
    ) -> Result<u32, InventoryError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.matches_name(name))
            .ok_or_else(|| InventoryError::NotFound(name.trim().to_string()))?;
        let previous = product.quantity;
        product.quantity = new_quantity;
        Ok(previous)
    }

    /// Product count and total value (`price * quantity` summed).
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.products.len(),
            total_value: self
                .products
                .iter()
                .map(|p| p.price * f64::from(p.quantity))
                .sum(),
        }
    }

    /// True when every record is well formed and names are unique
    /// case-insensitively. Deserialization bypasses [`Product::new`],
    /// so the load path checks this before accepting persisted data.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Vec::with_capacity(self.products.len());
        for product in &self.products {
            let folded = product.name.to_lowercase();
            if product.name.trim().is_empty() || product.price < 0.0 || seen.contains(&folded) {
                return false;
            }
            seen.push(folded);
        }
        true
    }
}
