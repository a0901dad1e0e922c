//! Property tests for the wallet's capacity invariant.

use proptest::prelude::*;

use crate::domain::resources::{ResourceKind, ResourceWallet};

proptest! {
    #[test]
    fn capped_pool_never_exceeds_capacity(
        cap in 0u32..1000,
        ops in prop::collection::vec((0u32..3, 0u32..2000), 0..64),
    ) {
        let mut wallet = ResourceWallet::new(cap, cap, cap);
        for (op, amount) in ops {
            match op {
                0 => {
                    let _ = wallet.credit(ResourceKind::Light, amount);
                }
                1 => wallet.debit(ResourceKind::Light, amount),
                _ => wallet.raise_capacity(ResourceKind::Light, amount),
            }
            prop_assert!(
                wallet.amount(ResourceKind::Light)
                    <= wallet.pool(ResourceKind::Light).max_capacity
            );
        }
    }

    #[test]
    fn debit_floors_at_zero(credit in 0u32..500, debit in 0u32..1000) {
        let mut wallet = ResourceWallet::new(1000, 1000, 1000);
        wallet.credit(ResourceKind::Light, credit).unwrap();
        wallet.debit(ResourceKind::Light, debit);
        prop_assert_eq!(
            wallet.amount(ResourceKind::Light),
            credit.saturating_sub(debit)
        );
    }

    #[test]
    fn rejected_credit_never_mutates(
        cap in 0u32..100,
        first in 0u32..100,
        second in 0u32..200,
    ) {
        let mut wallet = ResourceWallet::new(cap, cap, cap);
        let _ = wallet.credit(ResourceKind::Rainbow, first);
        let before = wallet.amount(ResourceKind::Rainbow);
        if wallet.credit(ResourceKind::Rainbow, second).is_err() {
            prop_assert_eq!(wallet.amount(ResourceKind::Rainbow), before);
        }
    }
}
