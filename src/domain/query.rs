use crate::error::{Result, SalesError};
use rust_decimal::Decimal;

pub const DEFAULT_TOP_N: usize = 3;

/// Total sales for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyQuery {
    month: u32,
    year: i32,
}

impl MonthlyQuery {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SalesError::InvalidParameterError(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

/// The `n` best-selling products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopProductsQuery {
    n: usize,
}

impl TopProductsQuery {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SalesError::InvalidParameterError(
                "n must be a positive integer".to_string(),
            ));
        }
        Ok(Self { n })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl Default for TopProductsQuery {
    fn default() -> Self {
        Self { n: DEFAULT_TOP_N }
    }
}

/// Running totals for one product group.
///
/// Revenue is the sum of prices times the sum of quantities for the group,
/// which is not the same as summing each row's price times quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedProduct {
    pub product: String,
    pub price_total: Decimal,
    pub quantity_total: Decimal,
}

impl RankedProduct {
    pub fn new(product: String) -> Self {
        Self {
            product,
            price_total: Decimal::ZERO,
            quantity_total: Decimal::ZERO,
        }
    }

    pub fn add(&mut self, price: Decimal, quantity: Decimal) -> Result<()> {
        self.price_total = self
            .price_total
            .checked_add(price)
            .ok_or_else(|| overflow(&self.product))?;
        self.quantity_total = self
            .quantity_total
            .checked_add(quantity)
            .ok_or_else(|| overflow(&self.product))?;
        Ok(())
    }

    pub fn revenue(&self) -> Result<Decimal> {
        self.price_total
            .checked_mul(self.quantity_total)
            .ok_or_else(|| overflow(&self.product))
    }
}

fn overflow(product: &str) -> SalesError {
    SalesError::ComputationError(format!("revenue overflow for product {:?}", product))
}
