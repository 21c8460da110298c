use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::accounts_errors::{AccountError, Result};

/// Domain model representing a brokerage account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Domain model representing an account owner
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Account joined with its owner, as presented to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,
    pub account_name: String,
    pub user_name: String,
    pub account_type: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// User with account counts, as presented to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub account_count: usize,
    pub active_account_count: usize,
}

/// Input model for creating a new account together with its owning user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub account_name: String,
    pub account_type: String,
}

impl NewAccount {
    /// Validates the new account data
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(AccountError::InvalidData(
                "Username cannot be empty".to_string(),
            ));
        }
        if self.account_name.trim().is_empty() {
            return Err(AccountError::InvalidData(
                "Account name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for accounts
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for users
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            account_type: db.account_type,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            full_name: db.full_name,
            email: db.email,
            role: db.role,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<(AccountDB, UserDB)> for AccountSummary {
    fn from((account, user): (AccountDB, UserDB)) -> Self {
        Self {
            account_id: account.id,
            account_name: account.name,
            user_name: user.username,
            account_type: account.account_type,
            is_active: account.is_active,
            created_at: account.created_at,
        }
    }
}
