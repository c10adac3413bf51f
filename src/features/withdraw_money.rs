use rust_decimal::Decimal;

use crate::{
    account::AccountId, listeners::Listeners, notification::NotificationService,
    repository::AccountRepository,
};

use super::FeatureError;

/// Takes money out of a single account.
pub struct WithdrawMoney<'a, R, N> {
    repository: &'a mut R,
    notifications: &'a N,
}

impl<'a, R, N> WithdrawMoney<'a, R, N>
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

    /// The account is only persisted when the withdrawal succeeds.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute(
        &mut self,
        from_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), FeatureError> {
        let mut from = self.repository.get_account_by_id(from_account_id)?;

        let notifications = self.notifications;
        let mut listeners = Listeners::default();
        listeners.on_funds_low(move |acc| notifications.notify_funds_low(acc.user().email()));

        from.withdraw(amount, &mut listeners)?;

        self.repository.update(&from)?;
        tracing::debug!(balance = %from.balance(), "withdrawal committed");
        Ok(())
    }
}
