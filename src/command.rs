use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Withdraw,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawCommand {
    pub from: AccountId,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCommand {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Destination account is required for Transfer")]
    DestinationRequired,
    #[error("Withdraw does not take a destination account, got {0}")]
    UnexpectedDestination(AccountId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyCommand {
    Withdraw(WithdrawCommand),
    Transfer(TransferCommand),
}

impl MoneyCommand {
    /// Amount signs are left for the account to judge.
    pub fn parse_command(
        kind: OperationKind,
        from: AccountId,
        to: Option<AccountId>,
        amount: Option<Decimal>,
    ) -> Result<Self, CommandError> {
        let amount = amount.ok_or(CommandError::AmountRequired { kind })?;
        match (kind, to) {
            (OperationKind::Withdraw, None) => Ok(Self::Withdraw(WithdrawCommand { from, amount })),
            (OperationKind::Withdraw, Some(to)) => Err(CommandError::UnexpectedDestination(to)),
            (OperationKind::Transfer, Some(to)) => {
                Ok(Self::Transfer(TransferCommand { from, to, amount }))
            }
            (OperationKind::Transfer, None) => Err(CommandError::DestinationRequired),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;

    const A: Uuid = Uuid::from_u128(1);
    const B: Uuid = Uuid::from_u128(2);

    #[test]
    fn parse_commands() {
        assert_eq!(
            MoneyCommand::parse_command(OperationKind::Withdraw, A, None, Some(dec!(1.5)))
                .unwrap(),
            MoneyCommand::Withdraw(WithdrawCommand {
                from: A,
                amount: dec!(1.5)
            })
        );
        assert_eq!(
            MoneyCommand::parse_command(OperationKind::Transfer, A, Some(B), Some(dec!(3)))
                .unwrap(),
            MoneyCommand::Transfer(TransferCommand {
                from: A,
                to: B,
                amount: dec!(3)
            })
        );
    }

    #[test]
    fn reject_incomplete_rows() {
        let err =
            MoneyCommand::parse_command(OperationKind::Transfer, A, Some(B), None).unwrap_err();
        assert_eq!(
            err,
            CommandError::AmountRequired {
                kind: OperationKind::Transfer
            }
        );
        assert_eq!(err.to_string(), "Amount is required for Transfer");

        assert_eq!(
            MoneyCommand::parse_command(OperationKind::Transfer, A, None, Some(dec!(1))),
            Err(CommandError::DestinationRequired)
        );
        assert_eq!(
            MoneyCommand::parse_command(OperationKind::Withdraw, A, Some(B), Some(dec!(1))),
            Err(CommandError::UnexpectedDestination(B))
        );
    }
}
