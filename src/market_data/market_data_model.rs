use chrono::NaiveDate;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single historical close price for a security.
/// One row exists per (security, date); the series is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub id: String,
    pub security_id: String,
    pub price_date: NaiveDate,
    pub close_price: Decimal,
}

impl PricePoint {
    pub fn new(security_id: &str, price_date: NaiveDate, close_price: Decimal) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            security_id: security_id.to_string(),
            price_date,
            close_price,
        }
    }
}

/// Database model for price history rows
#[derive(Queryable, QueryableByName, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::prices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PriceDB {
    pub id: String,
    pub security_id: String,
    pub price_date: NaiveDate,
    pub close_price: f64,
}

impl From<PriceDB> for PricePoint {
    fn from(db: PriceDB) -> Self {
        Self {
            id: db.id,
            security_id: db.security_id,
            price_date: db.price_date,
            close_price: Decimal::from_f64_retain(db.close_price).unwrap_or_default(),
        }
    }
}

impl From<&PricePoint> for PriceDB {
    fn from(point: &PricePoint) -> Self {
        Self {
            id: point.id.clone(),
            security_id: point.security_id.clone(),
            price_date: point.price_date,
            close_price: point.close_price.to_f64().unwrap_or_default(),
        }
    }
}
