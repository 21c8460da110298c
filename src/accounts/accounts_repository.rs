use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;

use crate::accounts::{AccountError, Result};
use crate::db::get_connection;
use crate::schema::{accounts, users};

use super::accounts_traits::AccountRepositoryTrait;
use super::accounts_model::{AccountDB, AccountSummary, NewAccount, User, UserDB, UserSummary};

/// Repository for managing account and user data in the database
pub struct AccountRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    /// Lists all active accounts joined with their owners
    fn list_accounts(&self) -> Result<Vec<AccountSummary>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        accounts::table
            .inner_join(users::table)
            .filter(accounts::is_active.eq(true))
            .order((users::username.asc(), accounts::name.asc()))
            .load::<(AccountDB, UserDB)>(&mut conn)
            .map_err(AccountError::from)
            .map(|rows| rows.into_iter().map(AccountSummary::from).collect())
    }

    /// Retrieves a single active account by its ID
    fn get_account(&self, account_id: &str) -> Result<AccountSummary> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        accounts::table
            .inner_join(users::table)
            .filter(accounts::id.eq(account_id))
            .filter(accounts::is_active.eq(true))
            .first::<(AccountDB, UserDB)>(&mut conn)
            .map(AccountSummary::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => AccountError::NotFound(format!(
                    "Account with id {} not found",
                    account_id
                )),
                _ => AccountError::DatabaseError(e.to_string()),
            })
    }

    /// Retrieves a user by its ID
    fn get_user(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map(User::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AccountError::NotFound(format!("User with id {} not found", user_id))
                }
                _ => AccountError::DatabaseError(e.to_string()),
            })
    }

    /// Creates a new user and its first account in a single transaction
    fn create_account(&self, new_account: NewAccount) -> Result<AccountSummary> {
        new_account.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        let now = chrono::Utc::now().naive_utc();
        let user_db = UserDB {
            id: uuid::Uuid::new_v4().to_string(),
            username: new_account.username,
            full_name: new_account.full_name,
            email: new_account.email,
            role: "User".to_string(),
            created_at: now,
            updated_at: now,
        };
        let account_db = AccountDB {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_db.id.clone(),
            name: new_account.account_name,
            account_type: new_account.account_type,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        conn.transaction::<_, diesel::result::Error, _>(|tx_conn| {
            diesel::insert_into(users::table)
                .values(&user_db)
                .execute(tx_conn)?;
            diesel::insert_into(accounts::table)
                .values(&account_db)
                .execute(tx_conn)?;
            Ok(())
        })
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(AccountSummary::from((account_db, user_db)))
    }

    /// Lists all users with their account counts
    fn list_users(&self) -> Result<Vec<UserSummary>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        let user_rows = users::table
            .order(users::username.asc())
            .load::<UserDB>(&mut conn)
            .map_err(AccountError::from)?;

        let account_rows = accounts::table
            .select((accounts::user_id, accounts::is_active))
            .load::<(String, bool)>(&mut conn)
            .map_err(AccountError::from)?;

        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for (owner_id, active) in account_rows {
            let entry = counts.entry(owner_id).or_default();
            entry.0 += 1;
            if active {
                entry.1 += 1;
            }
        }

        Ok(user_rows
            .into_iter()
            .map(|u| {
                let (account_count, active_account_count) =
                    counts.get(&u.id).copied().unwrap_or((0, 0));
                UserSummary {
                    user_id: u.id,
                    username: u.username,
                    full_name: u.full_name,
                    email: u.email,
                    account_count,
                    active_account_count,
                }
            })
            .collect())
    }

    /// Soft-deletes a user by deactivating all of their accounts.
    /// Returns false when the user does not exist.
    fn deactivate_user(&self, user_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        let exists = users::table
            .find(user_id)
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(AccountError::from)?
            > 0;
        if !exists {
            return Ok(false);
        }

        diesel::update(accounts::table.filter(accounts::user_id.eq(user_id)))
            .set((
                accounts::is_active.eq(false),
                accounts::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(AccountError::from)?;

        Ok(true)
    }
}
