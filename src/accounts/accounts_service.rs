use log::debug;
use std::sync::Arc;

use super::accounts_model::{AccountSummary, NewAccount, UserSummary};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::accounts::Result;

/// Service for managing accounts and their owners
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl AccountServiceTrait for AccountService {
    fn list_accounts(&self) -> Result<Vec<AccountSummary>> {
        debug!("Listing active accounts");
        self.repository.list_accounts()
    }

    fn get_account(&self, account_id: &str) -> Result<AccountSummary> {
        debug!("Fetching account {}", account_id);
        self.repository.get_account(account_id)
    }

    fn create_account(&self, new_account: NewAccount) -> Result<AccountSummary> {
        debug!("Creating account {} for user {}", new_account.account_name, new_account.username);
        self.repository.create_account(new_account)
    }

    fn list_users(&self) -> Result<Vec<UserSummary>> {
        debug!("Listing users");
        self.repository.list_users()
    }

    fn deactivate_user(&self, user_id: &str) -> Result<bool> {
        debug!("Deactivating user {}", user_id);
        self.repository.deactivate_user(user_id)
    }
}
