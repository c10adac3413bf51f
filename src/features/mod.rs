use thiserror::Error;

use crate::{
    account::{AccountError, AccountId},
    repository::RepositoryError,
};

pub mod transfer_money;
pub mod withdraw_money;

pub use transfer_money::TransferMoney;
pub use withdraw_money::WithdrawMoney;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    #[error(transparent)]
    RepositoryErr(#[from] RepositoryError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error("Cannot transfer from account {0} to itself")]
    SelfTransfer(AccountId),
}
