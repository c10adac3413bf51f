use std::io::Write;

use anyhow::Context;
use crate::account::{Account, AccountId};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub email: String,
    pub balance: Decimal,
    pub withdrawn: Decimal,
    pub paid_in: Decimal,
}

impl From<&Account> for AccountRecord {
    fn from(acc: &Account) -> Self {
        Self {
            id: acc.id(),
            email: acc.user().email().to_owned(),
            balance: acc.balance(),
            withdrawn: acc.withdrawn(),
            paid_in: acc.paid_in(),
        }
    }
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRecord>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for acc in accounts {
        writer
            .serialize(acc)
            .context("Failed to write account to CSV")?;
    }
    writer.flush().context("Failed to flush CSV writer")
}
