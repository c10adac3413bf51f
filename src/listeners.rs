use crate::account::{Account, AccountEvent};

type Listener<'a> = Box<dyn FnMut(&Account) + 'a>;

/// Per-account subscriptions to account notices.
///
/// Any number of listeners can be attached to each notice; they are
/// invoked in registration order.
#[derive(Default)]
pub struct Listeners<'a> {
    funds_low: Vec<Listener<'a>>,
    approaching_pay_in_limit: Vec<Listener<'a>>,
}

impl<'a> Listeners<'a> {
    pub fn on_funds_low(&mut self, listener: impl FnMut(&Account) + 'a) -> &mut Self {
        self.funds_low.push(Box::new(listener));
        self
    }

    pub fn on_approaching_pay_in_limit(
        &mut self,
        listener: impl FnMut(&Account) + 'a,
    ) -> &mut Self {
        self.approaching_pay_in_limit.push(Box::new(listener));
        self
    }

    pub fn publish(&mut self, event: &AccountEvent, account: &Account) {
        let listeners = match event {
            AccountEvent::FundsLow => &mut self.funds_low,
            AccountEvent::ApproachingPayInLimit => &mut self.approaching_pay_in_limit,
            AccountEvent::Withdrawn { .. } | AccountEvent::PaidIn { .. } => return,
        };
        for listener in listeners.iter_mut() {
            listener(account);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::account::User;

    use super::*;

    #[test]
    fn publish_in_registration_order() {
        let acc = Account::new(Uuid::from_u128(7), User::new("a@email.com"));
        let calls = RefCell::new(Vec::new());
        let mut listeners = Listeners::default();
        listeners
            .on_funds_low(|_| calls.borrow_mut().push("first"))
            .on_funds_low(|_| calls.borrow_mut().push("second"))
            .on_approaching_pay_in_limit(|_| calls.borrow_mut().push("limit"));

        listeners.publish(&AccountEvent::FundsLow, &acc);
        assert_eq!(*calls.borrow(), vec!["first", "second"]);

        listeners.publish(&AccountEvent::ApproachingPayInLimit, &acc);
        assert_eq!(*calls.borrow(), vec!["first", "second", "limit"]);

        // state changes are not notices
        listeners.publish(&AccountEvent::Withdrawn { amount: dec!(1) }, &acc);
        listeners.publish(&AccountEvent::PaidIn { amount: dec!(1) }, &acc);
        assert_eq!(calls.borrow().len(), 3);
    }
}
