use super::accounts_model::{AccountSummary, NewAccount, User, UserSummary};
use super::accounts_errors::Result;

/// Trait defining the contract for account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    fn list_accounts(&self) -> Result<Vec<AccountSummary>>;
    fn get_account(&self, account_id: &str) -> Result<AccountSummary>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn create_account(&self, new_account: NewAccount) -> Result<AccountSummary>;
    fn list_users(&self) -> Result<Vec<UserSummary>>;
    fn deactivate_user(&self, user_id: &str) -> Result<bool>;
}

/// Trait defining the public interface of the account service.
pub trait AccountServiceTrait: Send + Sync {
    fn list_accounts(&self) -> Result<Vec<AccountSummary>>;
    fn get_account(&self, account_id: &str) -> Result<AccountSummary>;
    fn create_account(&self, new_account: NewAccount) -> Result<AccountSummary>;
    fn list_users(&self) -> Result<Vec<UserSummary>>;
    fn deactivate_user(&self, user_id: &str) -> Result<bool>;
}
