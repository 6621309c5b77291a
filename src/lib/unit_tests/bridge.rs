// SPDX-License-Identifier: Apache-2.0

use crate::{check_bridge_ports, ErrorKind, PortSelection};

#[test]
fn test_bridge_reserved_combination() {
    let mut selection = PortSelection::default();
    selection.lan = [true; 4];
    selection.ssid1 = true;
    selection.ssid2 = true;
    let result = check_bridge_ports(&selection);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::AllPortsReservedCombination);
    }
}

#[test]
fn test_bridge_no_ports() {
    let result = check_bridge_ports(&PortSelection::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NoPortsSelected);
    }
}

#[test]
fn test_bridge_flags_and_masks() {
    let mut selection = PortSelection::default();
    selection.lan[0] = true;
    selection.ssid2 = true;
    selection.guest_ssid2 = true;
    let config = check_bridge_ports(&selection).unwrap();
    assert_eq!(config.lan, [true, false, false, false]);
    assert!(!config.ssid1);
    assert!(config.ssid2);
    assert!(!config.guest_ssid1);
    assert!(config.guest_ssid2);
    assert_eq!(config.wired_ports.raw(), 1);
    assert_eq!(config.wireless_ports.raw(), 10);
}

#[test]
fn test_bridge_guest_radios_not_reserved() {
    // All wired ports plus the guest radios is a valid selection, only
    // the two main SSIDs trigger the reserved combination
    let mut selection = PortSelection::default();
    selection.lan = [true; 4];
    selection.guest_ssid1 = true;
    selection.guest_ssid2 = true;
    assert!(check_bridge_ports(&selection).is_ok());
}
