//! Integration tests for subnet-info
//!
//! These tests go through the public API from text input to the written report.

use std::net::Ipv4Addr;
use subnet_info::models::{from_bits, parse_address, to_bits, Classification, SubnetMask};
use subnet_info::output::{report_lines, to_json, write_report};
use subnet_info::processing::{classify, cidr_prefix, is_classful, usable_hosts};
use subnet_info::{analyze, SubnetError};

#[test]
fn test_full_workflow_with_report_file() {
    let info = analyze("192.168.1.130", "255.255.255.0").expect("Failed to analyze");

    let dir = std::env::temp_dir().join(format!("subnet_info_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");

    let path = write_report(&info, &dir, "123456789").expect("Failed to write report");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("subnet_info_192.168.1.130_123456789.txt")
    );

    let content = std::fs::read_to_string(&path).expect("Failed to read report");
    assert_eq!(
        content,
        "IP Address: 192.168.1.130\n\
         Subnet Mask: 255.255.255.0\n\
         Classful/Classless: Class C\n\
         Network Address: 192.168.1.0\n\
         Broadcast Address: 192.168.1.255\n\
         Number of Hosts: 254\n\
         CIDR Mask: /24\n"
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_mask_table() {
    // (mask, prefix, usable hosts)
    let table = [
        ("0.0.0.0", 0, 4294967294u64),
        ("128.0.0.0", 1, 2147483646),
        ("255.0.0.0", 8, 16777214),
        ("255.255.0.0", 16, 65534),
        ("255.255.255.0", 24, 254),
        ("255.255.255.252", 30, 2),
        ("255.255.255.254", 31, 0),
        ("255.255.255.255", 32, 0),
    ];
    for (text, prefix, hosts) in table {
        let mask: SubnetMask = text.parse().expect("Valid mask rejected");
        assert_eq!(cidr_prefix(mask), prefix, "prefix of {text}");
        assert_eq!(usable_hosts(mask), hosts, "hosts of {text}");
        assert_eq!(SubnetMask::from_prefix(prefix).unwrap(), mask);
    }
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        parse_address("999.1.1.1"),
        Err(SubnetError::InvalidFormat(_))
    ));
    assert!(matches!(
        parse_address("1.2.3"),
        Err(SubnetError::InvalidFormat(_))
    ));
    assert!(matches!(
        analyze("10.0.0.1", "255.0.255.0"),
        Err(SubnetError::InvalidMaskShape(_))
    ));
    assert!(matches!(
        analyze("10.0.0.1", "0.255.255.0"),
        Err(SubnetError::InvalidMaskShape(_))
    ));
}

#[test]
fn test_classification() {
    assert_eq!(
        classify(parse_address("10.0.0.1").unwrap()).map(|c| c.to_string()),
        Some("A".to_string())
    );
    assert_eq!(classify(parse_address("127.0.0.1").unwrap()), None);

    let addr = Ipv4Addr::new(10, 0, 0, 1);
    let status = is_classful(addr, "255.0.0.0".parse().unwrap());
    assert_eq!((status.is_classful(), status.label()), (true, "Class A"));
    let status = is_classful(addr, "255.255.255.0".parse().unwrap());
    assert_eq!((status.is_classful(), status.label()), (false, "Classless"));
}

#[test]
fn test_bits_round_trip_over_octet_values() {
    for octet in 0..=255u8 {
        let addr = Ipv4Addr::new(octet, 255 - octet, octet / 2, octet.wrapping_mul(7));
        assert_eq!(from_bits(&to_bits(addr)), addr);
    }
}

#[test]
fn test_repeated_analyze_is_identical() {
    let first = analyze("172.16.0.1", "255.255.0.0").unwrap();
    for _ in 0..3 {
        assert_eq!(analyze("172.16.0.1", "255.255.0.0").unwrap(), first);
    }
    assert_eq!(first.classification, Classification::ClassB);
    assert_eq!(report_lines(&first).len(), 7);

    let json = to_json(&first).unwrap();
    assert!(json.contains("\"broadcast_address\": \"172.16.255.255\""));
}

#[test]
fn test_parallel_analyze() {
    let inputs = [
        ("10.1.2.3", "255.0.0.0"),
        ("172.20.1.1", "255.255.255.0"),
        ("192.168.7.9", "255.255.255.0"),
        ("224.0.0.1", "240.0.0.0"),
    ];
    let handles: Vec<_> = inputs
        .iter()
        .map(|&(addr, mask)| std::thread::spawn(move || analyze(addr, mask)))
        .collect();
    for (handle, (addr, mask)) in handles.into_iter().zip(inputs) {
        let info = handle.join().expect("Thread panicked").unwrap();
        assert_eq!(info, analyze(addr, mask).unwrap());
    }
}
