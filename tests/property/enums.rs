// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of the closed enumerations

use proptest::prelude::*;

use publiccloud_infrastructure::domain::{
    AutoScalingGroupType, Balance, ContractBillingFrequency, ContractState, ContractTerm,
    ContractType, ImageId, Method, NetworkType, RootDiskStorageType, State,
};

proptest! {
    /// Unknown strings are always rejected with the lookup error
    #[test]
    fn unknown_strings_are_rejected(value in "[a-z]{1,16}") {
        // Canonical representations are all upper-case, so any lower-case
        // candidate is outside every declared set
        prop_assert!(State::try_from_str(&value).is_err());
        prop_assert!(ContractType::try_from_str(&value).is_err());
        prop_assert!(ContractState::try_from_str(&value).is_err());
        prop_assert!(NetworkType::try_from_str(&value).is_err());
        prop_assert!(RootDiskStorageType::try_from_str(&value).is_err());
        prop_assert!(Method::try_from_str(&value).is_err());
        prop_assert!(Balance::try_from_str(&value).is_err());
        prop_assert!(AutoScalingGroupType::try_from_str(&value).is_err());
        prop_assert!(ImageId::try_from_str(&value).is_err());
    }

    /// Integer lookups succeed only on declared month counts
    #[test]
    fn term_lookup_succeeds_iff_declared(value in -100i64..200) {
        let declared = [0, 1, 3, 6, 12].contains(&value);
        prop_assert_eq!(ContractTerm::try_from_value(value).is_ok(), declared);
        prop_assert_eq!(ContractBillingFrequency::try_from_value(value).is_ok(), declared);
    }
}

/// Exhaustive string ↔ enum ↔ string identity per declared constant
#[test]
fn round_trip_is_identity_for_every_constant() {
    for state in State::all() {
        assert_eq!(State::try_from_str(state.as_str()).unwrap(), *state);
    }
    for id in ImageId::all() {
        assert_eq!(ImageId::try_from_str(id.as_str()).unwrap(), *id);
    }
    for value in [0i64, 1, 3, 6, 12] {
        assert_eq!(ContractTerm::try_from_value(value).unwrap().value(), value);
        assert_eq!(
            ContractBillingFrequency::try_from_value(value)
                .unwrap()
                .value(),
            value
        );
    }
}
