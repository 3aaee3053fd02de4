#![cfg(test)]
extern crate std;

use proptest::prelude::*;

use rental_lib::ListingStatus;

use crate::test::{EscrowTest, MAX_DAYS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fine_is_price_times_overdue_seconds(price in 1i128..10_000, late in 0u64..200_000) {
        let t = EscrowTest::setup();
        t.list();
        t.escrow.update_listing(&t.asset_id, &t.owner, &price, &MAX_DAYS, &60);
        let expiry = t.rent(0);

        t.set_time(expiry + late);
        let first = t.escrow.turn_in_by_owner(&t.asset_id, &t.owner);
        prop_assert_eq!(first.fine, price * late as i128);
        prop_assert!(!first.settled);
        t.assert_occupancy_consistent();

        let second = t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);
        prop_assert_eq!(second.fine, 0);
        prop_assert!(second.settled);

        prop_assert_eq!(t.listing().status, ListingStatus::Listed);
        prop_assert!(t.escrow.get_rental(&t.asset_id).is_none());
        prop_assert_eq!(
            t.escrow.get_fine_listings(&t.asset_id, &t.borrower),
            price * late as i128
        );
    }

    #[test]
    fn early_return_is_never_fined(price in 1i128..10_000, early in 0u64..3_600) {
        let t = EscrowTest::setup();
        t.list();
        t.escrow.update_listing(&t.asset_id, &t.owner, &price, &MAX_DAYS, &60);
        let expiry = t.rent(0);

        t.set_time(expiry - early);
        let outcome = t.escrow.turn_in_by_borrower(&t.asset_id, &t.borrower);
        prop_assert_eq!(outcome.fine, 0);
        t.assert_occupancy_consistent();
    }
}
