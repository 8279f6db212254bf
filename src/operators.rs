//! Operator overloading through `std::ops`.

use crate::error::OperatorError;
use crate::profile::{Describe, Profile};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Counter
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn new(count: i64) -> Self {
        Self { count }
    }

    pub fn value(&self) -> i64 {
        self.count
    }

    /// Pre-increment: bumps the counter and returns the new value.
    /// Saturates at `i64::MAX`.
    pub fn increment(&mut self) -> Self {
        self.count = self.count.saturating_add(1);
        *self
    }

    pub fn checked_add(self, other: Counter) -> Result<Counter, OperatorError> {
        self.count
            .checked_add(other.count)
            .map(Counter::new)
            .ok_or(OperatorError::Overflow {
                lhs: self.count,
                rhs: other.count,
            })
    }
}

/// Saturating; use [`Counter::checked_add`] to detect overflow.
impl Add for Counter {
    type Output = Counter;

    fn add(self, other: Counter) -> Counter {
        Counter::new(self.count.saturating_add(other.count))
    }
}

impl AddAssign for Counter {
    fn add_assign(&mut self, other: Counter) {
        self.count = self.count.saturating_add(other.count);
    }
}

impl From<i64> for Counter {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}

// =============================================================================
// Point3D
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Unary plus from the exercise: every coordinate made non-negative.
    pub fn positive(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl Add for Point3D {
    type Output = Point3D;

    fn add(self, other: Point3D) -> Point3D {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// =============================================================================
// Cart and Product
// =============================================================================

pub const BASE_PRICE: f64 = 10.0;
pub const MEMBERSHIP_DISCOUNT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn named(name: impl Into<String>) -> Self {
        Self::categorized(name, 0.0, "N/A")
    }

    pub fn priced(name: impl Into<String>, price: f64) -> Self {
        Self::categorized(name, price, "N/A")
    }

    pub fn categorized(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// The three `add_item` overloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pricing {
    Base,
    Discounted(f64),
    Member { discount: f64 },
}

impl Pricing {
    pub fn unit_price(self) -> f64 {
        match self {
            Pricing::Base => BASE_PRICE,
            Pricing::Discounted(discount) => BASE_PRICE - discount,
            Pricing::Member { discount } => BASE_PRICE - discount - MEMBERSHIP_DISCOUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, name: &str, quantity: usize, pricing: Pricing) -> &mut Self {
        let price = pricing.unit_price();
        self.items
            .extend(std::iter::repeat_with(|| Product::priced(name, price)).take(quantity));
        self
    }

    pub fn push(&mut self, product: Product) -> &mut Self {
        self.items.push(product);
        self
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.price).sum()
    }
}

impl Add for Cart {
    type Output = Cart;

    fn add(mut self, other: Cart) -> Cart {
        self.items.extend(other.items);
        self
    }
}

impl<'a> Add<&'a Cart> for &'a Cart {
    type Output = Cart;

    fn add(self, other: &'a Cart) -> Cart {
        self.clone() + other.clone()
    }
}

impl Describe for Cart {
    fn describe(&self) -> Profile {
        let profile = self
            .items
            .iter()
            .fold(Profile::new("Cart"), |profile, item| {
                profile.field("Product", format!("{}, Price: {}", item.name, item.price))
            });
        profile.field("Total Price", self.total())
    }
}
