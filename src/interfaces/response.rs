use rust_decimal::Decimal;
use serde::Serialize;

/// Response body of the monthly sales query.
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlySalesResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_sales: Decimal,
}

/// Response body of the top products query.
#[derive(Debug, Serialize, PartialEq)]
pub struct TopProductsResponse {
    pub top_products: Vec<String>,
}
