// SPDX-License-Identifier: Apache-2.0

use super::new_rule;
use crate::{
    check_candidate, Candidate, DeviceContext, ErrorKind, RuleTable,
    SubmitMode, VlanKind,
};

fn base_table() -> RuleTable {
    RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Video", 100, 2, 2, 0),
    ])
}

fn orange_context() -> DeviceContext {
    DeviceContext {
        orange_support: true,
        ..Default::default()
    }
}

fn add_candidate(name: &str, id: &str) -> Candidate {
    let mut candidate = Candidate::new(name, id, SubmitMode::Add);
    candidate.ports.lan[2] = true;
    candidate
}

#[test]
fn test_name_too_long() {
    let candidate = add_candidate("MoreThanTenChars", "200");
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NameEmptyOrTooLong);
    }
}

#[test]
fn test_name_empty() {
    let candidate = add_candidate("", "200");
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NameEmptyOrTooLong);
    }
}

#[test]
fn test_name_invalid_char() {
    let candidate = add_candidate("Bad<Name", "200");
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NameInvalidChar);
    }
}

#[test]
fn test_name_duplicate() {
    let candidate = add_candidate("Video", "200");
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NameDuplicate);
    }
}

#[test]
fn test_edit_keeps_own_name() {
    let mut candidate = Candidate::new(
        "Video",
        "100",
        SubmitMode::Edit {
            index: 1,
            default_internet: false,
        },
    );
    candidate.priority = "2".to_string();
    candidate.ports.lan[1] = true;
    let checked =
        check_candidate(&base_table(), &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.name, "Video");
    assert_eq!(checked.rule.id, 100);
}

#[test]
fn test_id_not_numeric() {
    let candidate = add_candidate("Data", "abc");
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdNotNumeric);
    }
}

#[test]
fn test_id_out_of_range() {
    for id in ["0", "4095"] {
        let candidate = add_candidate("Data", id);
        let result = check_candidate(
            &base_table(),
            &candidate,
            &DeviceContext::default(),
        );
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::IdOutOfRange);
        }
    }
}

#[test]
fn test_priority_invalid() {
    for priority in ["8", "abc"] {
        let mut candidate = add_candidate("Data", "200");
        candidate.priority = priority.to_string();
        let result = check_candidate(
            &base_table(),
            &candidate,
            &DeviceContext::default(),
        );
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::PriorityInvalid);
        }
    }
}

#[test]
fn test_priority_blank_defaults_to_zero() {
    let candidate = add_candidate("Data", "200");
    let checked =
        check_candidate(&base_table(), &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.priority, 0);
}

#[test]
fn test_all_ports_reserved_combination() {
    let mut candidate = Candidate::new("Data", "200", SubmitMode::Add);
    candidate.ports.lan = [true; 4];
    candidate.ports.ssid1 = true;
    candidate.ports.ssid2 = true;
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::AllPortsReservedCombination);
    }
}

#[test]
fn test_no_ports_selected() {
    let candidate = Candidate::new("Data", "200", SubmitMode::Add);
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NoPortsSelected);
    }
}

#[test]
fn test_orange_passthrough_needs_no_ports() {
    let mut candidate = Candidate::new("OrangeTV", "200", SubmitMode::Add);
    candidate.kind = VlanKind::Orange;
    // Without provider support the empty selection still gets refused
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NoPortsSelected);
    }
    let checked =
        check_candidate(&base_table(), &candidate, &orange_context())
            .unwrap();
    assert!(checked.rule.wired_ports.is_empty());
    assert!(checked.rule.wireless_ports.is_empty());
}

#[test]
fn test_orange_alias_canonicalized() {
    // The display alias is 16 characters, it only passes because the
    // canonical name is stored instead
    let candidate = add_candidate("Orange France TV", "200");
    let checked =
        check_candidate(&base_table(), &candidate, &orange_context())
            .unwrap();
    assert_eq!(checked.rule.name, "OrangeIPTV");
}

#[test]
fn test_orange_alias_duplicate_reports_display_name() {
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("OrangeIPTV", 100, 2, 2, 0),
    ]);
    let candidate = add_candidate("Orange France TV", "200");
    let result = check_candidate(&table, &candidate, &orange_context());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NameDuplicate);
        assert!(e.msg().contains("Orange France TV"));
    }
}

#[test]
fn test_id_wireless_conflict() {
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Video", 100, 2, 0, 1),
    ]);
    let mut candidate = Candidate::new("Data", "100", SubmitMode::Add);
    candidate.ports.ssid2 = true;
    let result =
        check_candidate(&table, &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdWirelessConflict);
    }
}

#[test]
fn test_id_collision_with_wireless_headroom_rejected() {
    // SSID2 is still free, the colliding ID gets refused
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Data", 100, 0, 2, 0),
        new_rule("Guest", 200, 0, 0, 1),
    ]);
    let mut candidate = Candidate::new("IPTV", "100", SubmitMode::Add);
    candidate.ports.ssid1 = true;
    let result =
        check_candidate(&table, &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdWirelessConflict);
    }
}

#[test]
fn test_id_collision_when_wireless_saturated_tolerated() {
    // Both SSIDs already subscribed, the same collision passes
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Data", 100, 0, 2, 0),
        new_rule("Guest", 200, 0, 0, 3),
    ]);
    let mut candidate = Candidate::new("IPTV", "100", SubmitMode::Add);
    candidate.ports.ssid1 = true;
    let checked =
        check_candidate(&table, &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.id, 100);
}

#[test]
fn test_id_priority_wired_conflict_with_headroom() {
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Data", 100, 5, 0, 4),
    ]);
    let mut candidate = Candidate::new("IPTV", "100", SubmitMode::Add);
    candidate.priority = "5".to_string();
    candidate.ports.lan[0] = true;
    let result =
        check_candidate(&table, &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdPriorityWiredConflict);
    }
}

#[test]
fn test_id_priority_collision_when_wired_saturated_tolerated() {
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Data", 100, 5, 0, 4),
        new_rule("Span", 200, 0, 15, 0),
    ]);
    let mut candidate = Candidate::new("IPTV", "100", SubmitMode::Add);
    candidate.priority = "5".to_string();
    candidate.ports.lan[0] = true;
    let checked =
        check_candidate(&table, &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.priority, 5);
}

#[test]
fn test_id_priority_collision_beyond_first_slots() {
    // Rules past slot 1 conflict regardless of saturation headroom
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Filler", 300, 0, 8, 0),
        new_rule("Data", 100, 5, 4, 0),
    ]);
    let mut candidate = Candidate::new("IPTV", "100", SubmitMode::Add);
    candidate.priority = "5".to_string();
    candidate.ports.lan[0] = true;
    let result =
        check_candidate(&table, &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdPriorityWiredConflict);
    }
}

#[test]
fn test_priority_mismatch_is_no_wired_conflict() {
    let mut candidate = Candidate::new("IPTV", "100", SubmitMode::Add);
    candidate.priority = "3".to_string();
    candidate.ports.lan[0] = true;
    let checked =
        check_candidate(&base_table(), &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.id, 100);
    assert_eq!(checked.rule.priority, 3);
}

#[test]
fn test_edit_excludes_self_from_conflicts() {
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Video", 100, 2, 2, 1),
    ]);
    let mut candidate = Candidate::new(
        "Video",
        "100",
        SubmitMode::Edit {
            index: 1,
            default_internet: false,
        },
    );
    candidate.priority = "2".to_string();
    candidate.ports.lan[1] = true;
    candidate.ports.ssid1 = true;
    let checked =
        check_candidate(&table, &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.id, 100);
    assert_eq!(checked.rule.priority, 2);
}

#[test]
fn test_edit_index_out_of_range() {
    let candidate = Candidate::new(
        "Video",
        "100",
        SubmitMode::Edit {
            index: 9,
            default_internet: false,
        },
    );
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidRecord);
    }
}

#[test]
fn test_default_edit_skips_name_and_port_checks() {
    let mut candidate = Candidate::new(
        "ThisNameIsWayTooLong",
        "20",
        SubmitMode::Edit {
            index: 0,
            default_internet: true,
        },
    );
    candidate.priority = "3".to_string();
    let checked =
        check_candidate(&base_table(), &candidate, &DeviceContext::default())
            .unwrap();
    // Name and ports come from the stored Internet rule
    assert_eq!(checked.rule.name, "Internet");
    assert_eq!(checked.rule.wired_ports.raw(), 1);
    assert_eq!(checked.rule.id, 20);
    assert_eq!(checked.rule.priority, 3);
}

#[test]
fn test_default_edit_id_zero_forces_priority_zero() {
    let mut candidate = Candidate::new(
        "Internet",
        "0",
        SubmitMode::Edit {
            index: 0,
            default_internet: true,
        },
    );
    candidate.priority = "5".to_string();
    let checked =
        check_candidate(&base_table(), &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.id, 0);
    assert_eq!(checked.rule.priority, 0);

    // The overwrite happens before the priority field is validated, an
    // out-of-range value never gets looked at
    candidate.priority = "9".to_string();
    let checked =
        check_candidate(&base_table(), &candidate, &DeviceContext::default())
            .unwrap();
    assert_eq!(checked.rule.priority, 0);
}

#[test]
fn test_default_edit_id_out_of_range() {
    let candidate = Candidate::new(
        "Internet",
        "4095",
        SubmitMode::Edit {
            index: 0,
            default_internet: true,
        },
    );
    let result =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdOutOfRangeDefaultEdit);
    }
}

#[test]
fn test_default_edit_wireless_conflict_uses_rule_radios() {
    // The Internet rule keeps its stored ports, a wireless-bearing rule
    // with the requested ID blocks the edit while radios have headroom
    let table = RuleTable::new(vec![
        new_rule("Internet", 10, 0, 1, 0),
        new_rule("Video", 100, 2, 0, 1),
    ]);
    let candidate = Candidate::new(
        "Internet",
        "100",
        SubmitMode::Edit {
            index: 0,
            default_internet: true,
        },
    );
    let result =
        check_candidate(&table, &candidate, &DeviceContext::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::IdWirelessConflict);
    }
}

#[test]
fn test_default_edit_orange_code() {
    let mut candidate = Candidate::new(
        "Internet",
        "20",
        SubmitMode::Edit {
            index: 0,
            default_internet: true,
        },
    );
    candidate.kind = VlanKind::OrangeDhcp;
    let checked =
        check_candidate(&base_table(), &candidate, &orange_context())
            .unwrap();
    assert_eq!(checked.orange_code, Some(1));

    candidate.kind = VlanKind::OrangePppoe;
    let checked =
        check_candidate(&base_table(), &candidate, &orange_context())
            .unwrap();
    assert_eq!(checked.orange_code, Some(2));

    candidate.kind = VlanKind::Standard;
    let checked =
        check_candidate(&base_table(), &candidate, &orange_context())
            .unwrap();
    assert_eq!(checked.orange_code, Some(3));

    // No provider support, no passthrough code
    let checked = check_candidate(
        &base_table(),
        &candidate,
        &DeviceContext::default(),
    )
    .unwrap();
    assert_eq!(checked.orange_code, None);
}

#[test]
fn test_ru_deployment_checks_slot_zero() {
    let ctx = DeviceContext {
        is_for_ru: true,
        ..Default::default()
    };
    let table = RuleTable::new(vec![
        new_rule("Intranet", 50, 0, 1, 0),
        new_rule("Video", 100, 2, 2, 0),
    ]);
    let candidate = add_candidate("Intranet", "200");
    let result = check_candidate(&table, &candidate, &ctx);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::NameDuplicate);
    }
}

#[test]
fn test_check_is_idempotent() {
    let candidate = add_candidate("Data", "200");
    let first =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    let second =
        check_candidate(&base_table(), &candidate, &DeviceContext::default());
    assert_eq!(first, second);
    assert!(first.is_ok());
}
