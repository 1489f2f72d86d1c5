// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of the validating value-object factories

use proptest::prelude::*;

use publiccloud_infrastructure::domain::{
    AutoScalingGroupReference, InstanceType, InstanceTypes, RootDiskSize, SshKey, Uuid,
};

proptest! {
    /// The factory succeeds exactly on the documented range
    #[test]
    fn root_disk_size_succeeds_iff_in_range(value in -2000i64..3000) {
        let result = RootDiskSize::new(value);
        prop_assert_eq!(result.is_ok(), (5..=1000).contains(&value));
        if let Ok(size) = result {
            prop_assert_eq!(size.value(), value);
        }
    }

    /// The factory succeeds exactly up to 255 characters
    #[test]
    fn reference_succeeds_iff_at_most_255_chars(length in 0usize..400) {
        let value = "r".repeat(length);
        let result = AutoScalingGroupReference::new(value.clone());
        prop_assert_eq!(result.is_ok(), length <= 255);
        if let Ok(reference) = result {
            prop_assert_eq!(reference.as_str(), value);
        }
    }

    /// Parsing a canonical UUID and printing it is the identity
    #[test]
    fn uuid_canonical_round_trip(bytes in any::<u128>()) {
        let canonical = uuid::Uuid::from_u128(bytes).hyphenated().to_string();
        let parsed = Uuid::new(&canonical).unwrap();
        prop_assert_eq!(parsed.to_string(), canonical);
    }

    /// Strings without a key-type prefix never validate
    #[test]
    fn ssh_key_requires_known_prefix(payload in "[a-zA-Z0-9 ]{1,60}") {
        prop_assume!(!payload.starts_with("ssh-") && !payload.starts_with("ecdsa-"));
        prop_assert!(SshKey::new(payload).is_err());
    }

    /// Well-formed keys of every accepted type validate and project back
    #[test]
    fn ssh_key_accepts_known_prefixes(
        prefix in prop::sample::select(vec![
            "ssh-dss",
            "ecdsa-sha2-nistp256",
            "ssh-ed25519",
            "ssh-rsa",
        ]),
        payload in "[A-Za-z0-9+/]{16,64}",
    ) {
        let key = format!("{} {}", prefix, payload);
        let parsed = SshKey::new(key.clone()).unwrap();
        prop_assert_eq!(parsed.as_str(), key);
    }

    /// Allow-list membership decides the validating constructor
    #[test]
    fn instance_type_allow_list_decides(name in "[a-z0-9.]{1,20}", allowed in prop::bool::ANY) {
        let list = if allowed {
            InstanceTypes::new(vec![InstanceType::new_unvalidated(name.clone())])
        } else {
            InstanceTypes::new(vec![])
        };
        prop_assert_eq!(InstanceType::new(name, &list).is_ok(), allowed);
    }
}
