use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain model for a listed security
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub id: String,
    pub ticker: String,
    pub company_name: String,
    pub sector: Option<String>,
    pub listed_in: Option<String>,
    pub is_active: bool,
}

/// Database model for securities
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::securities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SecurityDB {
    pub id: String,
    pub ticker: String,
    pub company_name: String,
    pub sector: Option<String>,
    pub listed_in: Option<String>,
    pub is_active: bool,
}

impl From<SecurityDB> for Security {
    fn from(db: SecurityDB) -> Self {
        Self {
            id: db.id,
            ticker: db.ticker,
            company_name: db.company_name,
            sector: db.sector,
            listed_in: db.listed_in,
            is_active: db.is_active,
        }
    }
}
