use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountError, AccountId},
    listeners::Listeners,
    notification::NotificationService,
    repository::AccountRepository,
};

use super::FeatureError;

/// Moves money between two accounts.
pub struct TransferMoney<'a, R, N> {
    repository: &'a mut R,
    notifications: &'a N,
}

impl<'a, R, N> TransferMoney<'a, R, N>
where
    R: AccountRepository,
    N: NotificationService,
{
    pub fn new(repository: &'a mut R, notifications: &'a N) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Neither account is persisted unless both the withdrawal and the pay in
    /// succeed.
    ///
    /// A transfer to the same account is refused with
    /// [`FeatureError::SelfTransfer`] rather than debiting and crediting it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), FeatureError> {
        if from_account_id == to_account_id {
            return Err(FeatureError::SelfTransfer(from_account_id));
        }
        let mut from = self.repository.get_account_by_id(from_account_id)?;
        let mut to = self.repository.get_account_by_id(to_account_id)?;

        let notifications = self.notifications;
        let mut from_listeners = Listeners::default();
        from_listeners
            .on_funds_low(move |acc| notifications.notify_funds_low(acc.user().email()));
        let mut to_listeners = Listeners::default();
        to_listeners.on_approaching_pay_in_limit(move |acc| {
            notifications.notify_approaching_pay_in_limit(acc.user().email())
        });

        transfer_between(
            &mut from,
            &mut to,
            amount,
            &mut from_listeners,
            &mut to_listeners,
        )?;

        self.repository.update(&from)?;
        self.repository.update(&to)?;
        tracing::debug!(
            from_balance = %from.balance(),
            to_balance = %to.balance(),
            "transfer committed"
        );
        Ok(())
    }
}

/// Debits `from`, then credits `to`.
///
/// When the pay in fails `from` has already been debited, callers must drop
/// both accounts rather than persist them.
pub fn transfer_between(
    from: &mut Account,
    to: &mut Account,
    amount: Decimal,
    from_listeners: &mut Listeners<'_>,
    to_listeners: &mut Listeners<'_>,
) -> Result<(), AccountError> {
    from.withdraw(amount, from_listeners)?;
    to.pay_in(amount, to_listeners)
}
