//! Property-based tests for the ticket machine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use ticketmachine::{MachineError, TicketMachine};

/// One caller action against a machine
#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Print,
    Refund,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1i64..=200).prop_map(Op::Insert),
        Just(Op::Print),
        Just(Op::Refund),
    ]
}

proptest! {
    /// Any positive price is kept as given
    #[test]
    fn positive_price_is_kept(price in 1i64..=i64::MAX) {
        let machine = TicketMachine::new(price).unwrap();
        prop_assert_eq!(machine.price(), price);
        prop_assert_eq!(machine.balance(), 0);
        prop_assert_eq!(machine.total(), 0);
    }

    /// Any non-positive price is rejected
    #[test]
    fn non_positive_price_is_rejected(price in i64::MIN..=0) {
        prop_assert_eq!(TicketMachine::new(price), Err(MachineError::NonPositivePrice(price)));
    }

    /// Balance equals insertions minus consumed prices minus refunds
    #[test]
    fn balance_is_conserved(price in 1i64..=100, ops in prop::collection::vec(op(), 0..64)) {
        let mut machine = TicketMachine::new(price).unwrap();
        let mut inserted = 0;
        let mut consumed = 0;
        let mut refunded = 0;

        for op in ops {
            match op {
                Op::Insert(amount) => {
                    machine.insert_money(amount).unwrap();
                    inserted += amount;
                }
                Op::Print => {
                    if machine.print_ticket() {
                        consumed += price;
                    }
                }
                Op::Refund => refunded += machine.refund(),
            }
            prop_assert!(machine.balance() >= 0);
            prop_assert_eq!(machine.balance(), inserted - consumed - refunded);
            prop_assert_eq!(machine.total(), consumed);
        }
    }

    /// Printing succeeds exactly when the balance covers the price
    #[test]
    fn print_outcome_follows_balance(price in 1i64..=100, balance in 0i64..=300) {
        let mut machine = TicketMachine::new(price).unwrap();
        if balance > 0 {
            machine.insert_money(balance).unwrap();
        }

        let printed = machine.print_ticket();
        if balance < price {
            prop_assert!(!printed);
            prop_assert_eq!(machine.balance(), balance);
            prop_assert_eq!(machine.total(), 0);
        } else {
            prop_assert!(printed);
            prop_assert_eq!(machine.balance(), balance - price);
            prop_assert_eq!(machine.total(), price);
        }
    }

    /// Total never decreases
    #[test]
    fn total_is_monotonic(price in 1i64..=100, ops in prop::collection::vec(op(), 0..64)) {
        let mut machine = TicketMachine::new(price).unwrap();
        let mut last_total = machine.total();

        for op in ops {
            match op {
                Op::Insert(amount) => machine.insert_money(amount).unwrap(),
                Op::Print => {
                    machine.print_ticket();
                }
                Op::Refund => {
                    machine.refund();
                }
            }
            prop_assert!(machine.total() >= last_total);
            last_total = machine.total();
        }
    }

    /// Refund hands back the whole balance, then nothing
    #[test]
    fn refund_empties_balance(price in 1i64..=100, amount in 1i64..=1000) {
        let mut machine = TicketMachine::new(price).unwrap();
        machine.insert_money(amount).unwrap();

        prop_assert_eq!(machine.refund(), amount);
        prop_assert_eq!(machine.balance(), 0);
        prop_assert_eq!(machine.refund(), 0);
    }

    /// Amount due plus balance reaches the price until the machine is ready
    #[test]
    fn amount_due_covers_shortfall(price in 1i64..=100, balance in 0i64..=300) {
        let mut machine = TicketMachine::new(price).unwrap();
        if balance > 0 {
            machine.insert_money(balance).unwrap();
        }

        if machine.is_ready() {
            prop_assert_eq!(machine.amount_due(), 0);
        } else {
            prop_assert_eq!(machine.amount_due() + machine.balance(), price);
        }
    }
}
