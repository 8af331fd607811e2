use libpn532::protocol::checksum::{dcs, lcs};
use proptest::prelude::*;

#[test]
fn known_checksums() {
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
    assert_eq!(dcs(0xD4, &[0x4A, 0x01, 0x00]), 0xE1);
}

proptest! {
    #[test]
    fn lcs_cancels_length(len in any::<u8>()) {
        prop_assert_eq!(len.wrapping_add(lcs(len)), 0);
    }

    #[test]
    fn dcs_cancels_tfi_and_payload(tfi in any::<u8>(), payload in prop::collection::vec(any::<u8>(), 0..300)) {
        let sum = payload.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
        prop_assert_eq!(sum.wrapping_add(dcs(tfi, &payload)), 0);
    }
}
