/// Account balance rules: withdrawals, pay ins and the notices they raise.
/// State is modified using events, which are created by handling a request
/// against the projected balance.
pub mod account;

/// Subscriptions to account notices.
pub mod listeners;

pub mod notification;

/// Account storage interface, plus "in memory" implementation.
pub mod repository;

/// Withdraw and transfer use cases, composing [`account`] with a
/// [`repository`] and a [`notification`] service.
pub mod features;

/// Operations read by the binary, validated before they reach [`features`].
pub mod command;

/// Bootstraps the core logic from CSV input. Kept in the library so the
/// integration tests can run it.
pub mod bin_utils;
