use crate::domain::dataset::{Dataset, PRICE, PRODUCT, QUANTITY, TIMESTAMP, Value};
use crate::domain::query::{MonthlyQuery, RankedProduct, TopProductsQuery};
use crate::domain::timestamp;
use crate::error::{Result, SalesError};
use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Total sales (`Σ Price × Quantity`) of the rows falling in the queried
/// month and year.
///
/// Every row's `Timestamp` must coerce to a date/time; the first one that does
/// not fails the whole call with `TimestampParseError`. A month without sales
/// yields zero. The dataset is only read; coerced timestamps live in a working
/// vector owned by this call.
pub fn compute_monthly_revenue(dataset: &Dataset, query: MonthlyQuery) -> Result<Decimal> {
    let ts_idx = column(dataset, TIMESTAMP)?;
    let price_idx = column(dataset, PRICE)?;
    let quantity_idx = column(dataset, QUANTITY)?;

    let stamps = dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            timestamp::coerce(&row[ts_idx]).ok_or_else(|| SalesError::TimestampParseError {
                row: i + 1,
                value: row[ts_idx].to_string(),
            })
        })
        .collect::<Result<Vec<NaiveDateTime>>>()?;

    let mut total = Decimal::ZERO;
    let mut matched = 0usize;
    for (i, (row, stamp)) in dataset.rows().iter().zip(&stamps).enumerate() {
        let price = numeric(&row[price_idx], PRICE, i)?;
        let quantity = numeric(&row[quantity_idx], QUANTITY, i)?;

        if stamp.month() != query.month() || stamp.year() != query.year() {
            continue;
        }

        total = price
            .checked_mul(quantity)
            .and_then(|revenue| total.checked_add(revenue))
            .ok_or_else(|| {
                SalesError::ComputationError(format!("revenue overflow at row {}", i + 1))
            })?;
        matched += 1;
    }

    debug!(
        month = query.month(),
        year = query.year(),
        matched,
        %total,
        "monthly revenue computed"
    );
    Ok(total)
}

/// The `n` product labels with the highest group revenue, best first.
///
/// Group revenue is `Σ Price × Σ Quantity` over the group's rows. Labels are
/// grouped verbatim (no case folding) and rows without a product label are
/// left out. Ties keep the order in which products first appear.
pub fn compute_top_products(dataset: &Dataset, query: TopProductsQuery) -> Result<Vec<String>> {
    let price_idx = column(dataset, PRICE)?;
    let quantity_idx = column(dataset, QUANTITY)?;
    let product_idx = column(dataset, PRODUCT)?;

    // Groups in first-appearance order, plus a label -> position lookup.
    let mut groups: Vec<RankedProduct> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (i, row) in dataset.rows().iter().enumerate() {
        let price = numeric(&row[price_idx], PRICE, i)?;
        let quantity = numeric(&row[quantity_idx], QUANTITY, i)?;

        let Some(label) = row[product_idx].label() else {
            continue;
        };
        let pos = *positions.entry(label.clone()).or_insert_with(|| {
            groups.push(RankedProduct::new(label));
            groups.len() - 1
        });
        groups[pos].add(price, quantity)?;
    }

    let mut ranked = groups
        .into_iter()
        .map(|group| Ok((group.revenue()?, group.product)))
        .collect::<Result<Vec<(Decimal, String)>>>()?;

    // `sort_by` is stable, so equal revenues stay in first-appearance order.
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(groups = ranked.len(), n = query.n(), "products ranked");
    Ok(ranked
        .into_iter()
        .take(query.n())
        .map(|(_, product)| product)
        .collect())
}

fn column(dataset: &Dataset, name: &str) -> Result<usize> {
    dataset
        .column_index(name)
        .ok_or_else(|| SalesError::ComputationError(format!("missing column {:?}", name)))
}

fn numeric(value: &Value, name: &str, row: usize) -> Result<Decimal> {
    value.as_decimal().ok_or_else(|| {
        SalesError::ComputationError(format!(
            "non-numeric {} {:?} in row {}",
            name,
            value.to_string(),
            row + 1
        ))
    })
}
