use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use uuid::Uuid;

use crate::listeners::Listeners;

pub type AccountId = Uuid;

pub const PAY_IN_LIMIT: Decimal = dec!(4000);
pub const FUNDS_LOW_THRESHOLD: Decimal = dec!(500);
pub const PAY_IN_LIMIT_THRESHOLD: Decimal = dec!(500);

/// Account holder, only used to route notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Ceiling and notification thresholds an account is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Ceiling on the cumulative paid in amount.
    pub pay_in_limit: Decimal,
    /// A withdrawal leaving less than this raises [`AccountEvent::FundsLow`].
    pub funds_low_threshold: Decimal,
    /// A pay in leaving less than this much room under the limit raises
    /// [`AccountEvent::ApproachingPayInLimit`].
    pub pay_in_limit_threshold: Decimal,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            pay_in_limit: PAY_IN_LIMIT,
            funds_low_threshold: FUNDS_LOW_THRESHOLD,
            pay_in_limit_threshold: PAY_IN_LIMIT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEvent {
    /// Notice only, state is untouched.
    FundsLow,
    /// Notice only, state is untouched.
    ApproachingPayInLimit,
    Withdrawn { amount: Decimal },
    PaidIn { amount: Decimal },
}

impl AccountEvent {
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::FundsLow | Self::ApproachingPayInLimit)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds to withdraw {requested}, balance is {balance}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("Pay in of {requested} exceeds the limit of {limit}, already paid in {paid_in}")]
    PayInLimitExceeded {
        paid_in: Decimal,
        requested: Decimal,
        limit: Decimal,
    },
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("Amount {0} is out of range for this account")]
    AmountOutOfRange(Decimal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    user: User,
    balance: Decimal,
    withdrawn: Decimal,
    paid_in: Decimal,
    limits: AccountLimits,
}

impl Account {
    pub fn new(id: AccountId, user: User) -> Self {
        Self {
            id,
            user,
            balance: Decimal::ZERO,
            withdrawn: Decimal::ZERO,
            paid_in: Decimal::ZERO,
            limits: AccountLimits::default(),
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_withdrawn(mut self, withdrawn: Decimal) -> Self {
        self.withdrawn = withdrawn;
        self
    }

    pub fn with_paid_in(mut self, paid_in: Decimal) -> Self {
        self.paid_in = paid_in;
        self
    }

    pub fn with_limits(mut self, limits: AccountLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Running total that goes down with every withdrawal.
    pub fn withdrawn(&self) -> Decimal {
        self.withdrawn
    }

    pub fn paid_in(&self) -> Decimal {
        self.paid_in
    }

    /// Events are expected to come from [`Account::handle_withdraw`] or
    /// [`Account::handle_pay_in`], which reject anything that would overflow.
    pub fn apply(&mut self, event: &AccountEvent) {
        match event {
            AccountEvent::FundsLow | AccountEvent::ApproachingPayInLimit => {}
            AccountEvent::Withdrawn { amount } => {
                self.balance -= amount;
                self.withdrawn -= amount;
            }
            AccountEvent::PaidIn { amount } => {
                self.paid_in += amount;
                self.balance += amount;
            }
        }
    }

    /// Validates a withdrawal against the projected balance.
    ///
    /// Notices come before the mutating event in the returned list.
    pub fn handle_withdraw(&self, amount: Decimal) -> Result<Vec<AccountEvent>, AccountError> {
        ensure_not_negative(amount)?;
        let insufficient = AccountError::InsufficientFunds {
            balance: self.balance,
            requested: amount,
        };
        let Some(estimated_balance) = self.balance.checked_sub(amount) else {
            return Err(insufficient);
        };
        if estimated_balance < Decimal::ZERO {
            return Err(insufficient);
        }
        if self.withdrawn.checked_sub(amount).is_none() {
            return Err(AccountError::AmountOutOfRange(amount));
        }

        let mut events = Vec::with_capacity(2);
        if estimated_balance < self.limits.funds_low_threshold {
            events.push(AccountEvent::FundsLow);
        }
        events.push(AccountEvent::Withdrawn { amount });
        Ok(events)
    }

    /// Validates a pay in against the projected paid in total.
    pub fn handle_pay_in(&self, amount: Decimal) -> Result<Vec<AccountEvent>, AccountError> {
        ensure_not_negative(amount)?;
        let exceeded = AccountError::PayInLimitExceeded {
            paid_in: self.paid_in,
            requested: amount,
            limit: self.limits.pay_in_limit,
        };
        let Some(estimated_paid_in) = self.paid_in.checked_add(amount) else {
            return Err(exceeded);
        };
        if estimated_paid_in > self.limits.pay_in_limit {
            return Err(exceeded);
        }
        if self.balance.checked_add(amount).is_none() {
            return Err(AccountError::AmountOutOfRange(amount));
        }

        let mut events = Vec::with_capacity(2);
        let close_to_limit = self
            .limits
            .pay_in_limit
            .checked_sub(estimated_paid_in)
            .is_some_and(|room| room < self.limits.pay_in_limit_threshold);
        if close_to_limit {
            events.push(AccountEvent::ApproachingPayInLimit);
        }
        events.push(AccountEvent::PaidIn { amount });
        Ok(events)
    }

    pub fn withdraw(
        &mut self,
        amount: Decimal,
        listeners: &mut Listeners<'_>,
    ) -> Result<(), AccountError> {
        let events = self.handle_withdraw(amount)?;
        self.dispatch(&events, listeners);
        Ok(())
    }

    pub fn pay_in(
        &mut self,
        amount: Decimal,
        listeners: &mut Listeners<'_>,
    ) -> Result<(), AccountError> {
        let events = self.handle_pay_in(amount)?;
        self.dispatch(&events, listeners);
        Ok(())
    }

    // listeners see the account as it was before the mutation
    fn dispatch(&mut self, events: &[AccountEvent], listeners: &mut Listeners<'_>) {
        for event in events {
            if event.is_notice() {
                listeners.publish(event, self);
            } else {
                self.apply(event);
            }
        }
    }
}

fn ensure_not_negative(amount: Decimal) -> Result<(), AccountError> {
    if amount < Decimal::ZERO {
        Err(AccountError::NegativeAmount(amount))
    } else {
        Ok(())
    }
}
