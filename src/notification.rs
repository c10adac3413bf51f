/// Delivers notices to an account holder.
///
/// Fire and forget: nothing is returned and delivery failures are the
/// implementation's business.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService {
    fn notify_funds_low(&self, address: &str);

    fn notify_approaching_pay_in_limit(&self, address: &str);
}

/// Records every notice as a `tracing` event instead of delivering it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationService;

impl NotificationService for TracingNotificationService {
    fn notify_funds_low(&self, address: &str) {
        tracing::info!(address, "funds low");
    }

    fn notify_approaching_pay_in_limit(&self, address: &str) {
        tracing::info!(address, "approaching pay in limit");
    }
}
