//! Drives [`money_transfer`](crate) from CSV files: accounts are loaded into
//! an in-memory repository, operations are executed one by one and the final
//! accounts are written back as CSV.

use std::io::{Read, Write};

use crate::{
    account::{Account, AccountLimits, User},
    command::{CommandError, MoneyCommand},
    features::{FeatureError, TransferMoney, WithdrawMoney},
    notification::NotificationService,
    repository::{AccountRepository, in_memory_repository::InMemoryAccountRepository},
};
use anyhow::{Context, Result};
use csv_parser::{AccountRow, CsvParser, OperationRow};
use csv_printer::{AccountRecord, print_accounts};
use thiserror::Error;
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    FeatureErr(#[from] FeatureError),
}

pub struct Service<'w, A, O, W: 'w, N> {
    pub accounts: A,
    pub operations: O,
    pub output: &'w mut W,
    pub notifications: &'w N,
    pub limits: AccountLimits,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, A, O, W, N> Service<'w, A, O, W, N>
where
    A: Read,
    O: Read,
    W: Write + 'w,
    N: NotificationService,
{
    pub fn run(mut self) -> Result<()> {
        let mut repository = InMemoryAccountRepository::default();
        for row in CsvParser::<_, AccountRow>::new(self.accounts) {
            let (_, row) = row.context("Failed to read accounts")?;
            repository.insert(
                Account::new(row.id, User::new(row.email))
                    .with_balance(row.balance)
                    .with_withdrawn(row.withdrawn)
                    .with_paid_in(row.paid_in)
                    .with_limits(self.limits),
            );
        }
        tracing::info!(accounts = repository.len(), "accounts loaded");

        for row in CsvParser::<_, OperationRow>::new(self.operations) {
            let (line, row) = row.context("Failed to read operations")?;
            if let Err(err) = execute_operation(&mut repository, self.notifications, row) {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(self.output, repository.accounts().map(AccountRecord::from))
    }
}

fn execute_operation<R, N>(
    repository: &mut R,
    notifications: &N,
    row: OperationRow,
) -> Result<(), OperationError>
where
    R: AccountRepository,
    N: NotificationService,
{
    match MoneyCommand::parse_command(row.kind, row.from, row.to, row.amount)? {
        MoneyCommand::Withdraw(cmd) => {
            WithdrawMoney::new(repository, notifications).execute(cmd.from, cmd.amount)?
        }
        MoneyCommand::Transfer(cmd) => TransferMoney::new(repository, notifications)
            .execute(cmd.from, cmd.to, cmd.amount)?,
    }
    Ok(())
}
