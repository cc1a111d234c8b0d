//! Integration tests for the logforge codec library.

use logforge_codec::{
    Error, FormatFields, MessageComponents, ParsedMessage, RfcVersion, dispatch, priority,
};

#[test]
fn test_priority_codec_is_bidirectional() {
    for facility in 0..=23u16 {
        for severity in 0..=7u16 {
            let encoded = priority::encode(facility, severity);
            assert!(encoded <= 191);
            assert_eq!(priority::decode(encoded), (facility, severity));
        }
    }
}

#[test]
fn test_generated_rfc3164_reparses_with_same_priority() {
    let cases = [
        MessageComponents {
            facility: Some(16),
            severity: Some(6),
            hostname: Some("test-server".to_string()),
            tag: Some("testapp".to_string()),
            pid: Some(1234),
            message: Some("Basic test message".to_string()),
            ..MessageComponents::default()
        },
        MessageComponents {
            priority: Some(165),
            hostname: Some("security-server".to_string()),
            tag: Some("auth".to_string()),
            message: Some("Failed authentication attempt".to_string()),
            ..MessageComponents::default()
        },
        // Everything defaulted: priority falls back to 34 (auth.crit)
        MessageComponents::default(),
    ];

    for components in cases {
        let expected = components.resolved_priority();
        let parsed = dispatch::parse("3164", &dispatch::generate("3164", &components)).unwrap();
        assert_eq!(parsed.priority, expected);
        assert_eq!((parsed.facility, parsed.severity), priority::decode(expected));
    }
}

#[test]
fn test_rfc3164_regeneration_preserves_fields() {
    let components = MessageComponents {
        facility: Some(4),
        severity: Some(1),
        hostname: Some("security-server".to_string()),
        tag: Some("auth".to_string()),
        pid: Some(5678),
        message: Some("Security alert: Failed authentication attempt".to_string()),
        ..MessageComponents::default()
    };

    let first = dispatch::generate("3164", &components);
    let parsed = dispatch::parse("3164", &first).unwrap();

    // Regenerate from the parsed fields. The timestamp representation
    // changes (BSD -> ISO), every other field survives intact.
    let second = dispatch::generate("3164", &parsed.to_components());
    let expected = format!(
        "<33>{} security-server auth[5678]: Security alert: Failed authentication attempt",
        parsed.timestamp
    );
    assert_eq!(second, expected);
}

#[test]
fn test_parse_rfc3164_example() {
    let parsed = dispatch::parse(
        "3164",
        "<34>Oct 11 22:14:15 mymachine su: 'su root' failed for lonvick on /dev/pts/8",
    )
    .unwrap();

    assert_eq!(parsed.priority, 34);
    assert_eq!(parsed.facility, 4);
    assert_eq!(parsed.severity, 2);
    assert_eq!(parsed.hostname, "mymachine");
    assert_eq!(parsed.message, "'su root' failed for lonvick on /dev/pts/8");
    assert_eq!(
        parsed.format,
        FormatFields::Rfc3164 {
            tag: "su".to_string(),
            pid: None,
        }
    );
}

#[test]
fn test_parse_rfc5424_example() {
    let parsed = dispatch::parse(
        "5424",
        "<165>1 2003-10-11T22:14:15.003Z mymachine su - ID47 - 'su root' failed for lonvick on /dev/pts/8",
    )
    .unwrap();

    assert_eq!(parsed.priority, 165);
    assert_eq!(parsed.facility, 20);
    assert_eq!(parsed.severity, 5);
    assert_eq!(parsed.timestamp, "2003-10-11T22:14:15.003Z");
    assert_eq!(
        parsed.format,
        FormatFields::Rfc5424 {
            version: 1,
            app_name: Some("su".to_string()),
            proc_id: None,
            msg_id: Some("ID47".to_string()),
            structured_data: None,
        }
    );
}

#[test]
fn test_malformed_input_is_rejected_under_both_versions() {
    for version in ["3164", "5424"] {
        let result = dispatch::parse(version, "not a syslog message");
        assert!(matches!(result, Err(Error::Format(_))));
    }
}

#[test]
fn test_generate_rfc3164_local0_info() {
    let components = MessageComponents {
        facility: Some(16),
        severity: Some(6),
        hostname: Some("h".to_string()),
        tag: Some("t".to_string()),
        message: Some("m".to_string()),
        ..MessageComponents::default()
    };

    let generated = dispatch::generate("3164", &components);
    assert!(generated.starts_with("<134>"));
    assert!(generated.ends_with("h t: m"));
}

#[test]
fn test_invalid_month_is_rejected() {
    let result = dispatch::parse("3164", "<34>Xyz 11 22:14:15 mymachine su: test");
    assert!(matches!(result, Err(Error::Format(_))));
}

#[test]
fn test_generate_example_wire_forms() {
    // The two canonical wire forms, byte for byte, with pinned timestamps
    let rfc3164 = MessageComponents {
        priority: Some(34),
        timestamp: Some("Oct 11 22:14:15".to_string()),
        hostname: Some("mymachine".to_string()),
        tag: Some("su".to_string()),
        message: Some("'su root' failed for lonvick on /dev/pts/8".to_string()),
        ..MessageComponents::default()
    };
    assert_eq!(
        dispatch::generate("3164", &rfc3164),
        "<34>Oct 11 22:14:15 mymachine su: 'su root' failed for lonvick on /dev/pts/8"
    );

    let rfc5424 = MessageComponents {
        rfc_version: RfcVersion::Rfc5424,
        priority: Some(34),
        timestamp: Some("2003-10-11T22:14:15.003Z".to_string()),
        hostname: Some("mymachine".to_string()),
        app_name: Some("su".to_string()),
        msg_id: Some("ID47".to_string()),
        message: Some("'su root' failed for lonvick on /dev/pts/8".to_string()),
        ..MessageComponents::default()
    };
    assert_eq!(
        dispatch::generate("5424", &rfc5424),
        "<34>1 2003-10-11T22:14:15.003Z mymachine su - ID47 - 'su root' failed for lonvick on /dev/pts/8"
    );
}

#[test]
fn test_rfc5424_roundtrip_through_components() {
    let raw = r#"<134>1 2024-01-15T12:00:00Z metrics-server monitoring worker-01 METRIC [metrics@32473 cpu="85.5" memory="78.2"][alert@32473 threshold="80"] System metrics threshold exceeded"#;

    let parsed: ParsedMessage = dispatch::parse("5424", raw).unwrap();
    let regenerated = dispatch::generate("5424", &parsed.to_components());
    assert_eq!(regenerated, raw);
}

#[test]
fn test_parsed_message_json_shape() {
    let parsed = dispatch::parse(
        "5424",
        "<165>1 2003-10-11T22:14:15.003Z mymachine su - ID47 - test",
    )
    .unwrap();

    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["rfc_version"], "5424");
    assert_eq!(json["priority"], 165);
    assert_eq!(json["app_name"], "su");
    assert_eq!(json["proc_id"], serde_json::Value::Null);
}
