use std::fs::File;

use anyhow::{Context, Result};
use money_transfer::{
    account::AccountLimits,
    bin_utils::{OperationError, Service},
    features::FeatureError,
    notification::TracingNotificationService,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let accounts_path = args
        .next()
        .context("Expected the accounts file name as the first argument")?;
    let operations_path = args
        .next()
        .context("Expected the operations file name as the second argument")?;
    let accounts = File::open(&accounts_path)
        .with_context(|| format!("Failed to open `{accounts_path}`"))?;
    let operations = File::open(&operations_path)
        .with_context(|| format!("Failed to open `{operations_path}`"))?;

    let service = Service {
        accounts,
        operations,
        output: &mut std::io::stdout(),
        notifications: &TracingNotificationService,
        limits: AccountLimits::default(),
        error_printer: Box::new(|line, err| match err {
            // business outcomes rather than failures
            OperationError::FeatureErr(FeatureError::AccountErr(err)) => {
                tracing::debug!(line, %err, "operation rejected")
            }
            err => tracing::warn!(line, %err, "operation failed"),
        }),
    };
    service.run()
}
