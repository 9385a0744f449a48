use hl7_core::{FlattenConfig, Hl7Error};
use hl7_er7::{convert_line, convert_message_str, parse_message, Delimiters};
use serde_json::{json, Value};

const VISIT_REASON: &str = "OBX|1|TX|1001^Reason For Visit:|1|Evaluated patient.||||||F";

fn convert(message: &str) -> Value {
    let record = convert_message_str(message, &FlattenConfig::default()).expect("message parses");
    serde_json::to_value(record).unwrap()
}

fn convert_short(message: &str) -> Value {
    let config = FlattenConfig {
        use_long_names: false,
    };
    serde_json::to_value(convert_message_str(message, &config).expect("message parses")).unwrap()
}

#[test]
fn bare_observation_segment_uses_long_names() {
    assert_eq!(
        convert(VISIT_REASON),
        json!({
            "obx": {
                "set_id_obx": "1",
                "value_type": "TX",
                "observation_identifier": { "identifier": "1001", "text": "Reason For Visit:" },
                "observation_sub_id": "1",
                "observation_value": "Evaluated patient.",
                "observation_result_status": "F"
            }
        })
    );
}

#[test]
fn short_names_never_leak_long_names() {
    assert_eq!(
        convert_short(VISIT_REASON),
        json!({
            "obx": {
                "obx_1": "1",
                "obx_2": "TX",
                "obx_3": { "ce_1": "1001", "ce_2": "Reason For Visit:" },
                "obx_4": "1",
                "obx_5": "Evaluated patient.",
                "obx_11": "F"
            }
        })
    );
}

#[test]
fn messages_without_segments_are_rejected() {
    assert_eq!(parse_message(""), Err(Hl7Error::Empty));
    assert_eq!(parse_message("\r\n\r"), Err(Hl7Error::Empty));
}

#[test]
fn text_without_segment_marker_is_rejected() {
    assert_eq!(
        parse_message("this is not hl7"),
        Err(Hl7Error::InvalidSegmentId {
            index: 0,
            found: "this is not hl7".to_string()
        })
    );
    assert_eq!(
        parse_message("obx|1|TX"),
        Err(Hl7Error::InvalidSegmentId {
            index: 0,
            found: "obx".to_string()
        })
    );
}

#[test]
fn bad_segment_after_a_good_one_fails_the_whole_message() {
    let err = parse_message("PID|1\rgarbage|2").unwrap_err();
    assert_eq!(
        err,
        Hl7Error::InvalidSegmentId {
            index: 1,
            found: "garbage".to_string()
        }
    );
}

#[test]
fn lenient_conversion_substitutes_an_empty_record() {
    let config = FlattenConfig::default();
    for malformed in ["", "   ", "hello world", "MSH|", "MSH|^~\\&&&|APP"] {
        let record = convert_line(malformed, &config);
        assert!(record.is_empty(), "{malformed:?} should not parse");
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }
}

#[test]
fn header_declares_custom_delimiters() {
    let delimiters = Delimiters::from_header("MSH#*~\\&#APP").unwrap();
    assert_eq!(
        delimiters,
        Delimiters {
            field: '#',
            component: '*',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    );

    assert_eq!(
        convert("MSH#*~\\&#APP*1.2#FAC\rPID#1##ID1~ID2"),
        json!({
            "msh": {
                "field_separator": "#",
                "encoding_characters": "*~\\&",
                "sending_application": { "namespace_id": "APP", "universal_id": "1.2" },
                "sending_facility": { "namespace_id": "FAC" }
            },
            "pid": {
                "set_id_pid": "1",
                "patient_identifier_list": [{ "id_number": "ID1" }, { "id_number": "ID2" }]
            }
        })
    );
}

#[test]
fn header_with_unusable_delimiters_is_rejected() {
    assert!(matches!(
        Delimiters::from_header("MSH"),
        Err(Hl7Error::InvalidHeader(_))
    ));
    assert!(matches!(
        Delimiters::from_header("MSHA^~\\&A"),
        Err(Hl7Error::InvalidHeader(_))
    ));
    assert!(matches!(
        Delimiters::from_header("MSH||APP"),
        Err(Hl7Error::InvalidHeader(_))
    ));
}

#[test]
fn header_reusing_a_delimiter_is_rejected() {
    assert!(matches!(
        parse_message("MSH|^^^^|A^B"),
        Err(Hl7Error::InvalidHeader(_))
    ));
    assert!(matches!(
        Delimiters::from_header("MSH|^~|A"),
        Ok(Delimiters { escape: '\\', subcomponent: '&', .. })
    ));
    // `&` as component separator collides with the default subcomponent separator.
    assert!(matches!(
        Delimiters::from_header("MSH|&|A"),
        Err(Hl7Error::InvalidHeader(_))
    ));
    assert!(matches!(
        Delimiters::from_header("MSH|^~~&|A"),
        Err(Hl7Error::InvalidHeader(_))
    ));
}

#[test]
fn composites_of_bare_separators_are_omitted() {
    assert_eq!(convert("PID|1||^^|"), json!({ "pid": { "set_id_pid": "1" } }));
    assert_eq!(
        convert("PID|1||ID1^^^&&"),
        json!({ "pid": { "set_id_pid": "1", "patient_identifier_list": { "id_number": "ID1" } } })
    );
    assert_eq!(convert("ZPI|^&^"), json!({ "zpi": "ZPI" }));
}

#[test]
fn composite_components_keep_their_shape_without_subcomponents() {
    let plain = convert("PID|1||||DOE^JANE");
    let prefixed = convert("PID|1||||DOE&VAN^JANE");
    assert_eq!(plain["pid"]["patient_name"]["family_name"], json!({ "surname": "DOE" }));
    assert_eq!(
        prefixed["pid"]["patient_name"]["family_name"],
        json!({ "surname": "DOE", "own_surname_prefix": "VAN" })
    );
    assert_eq!(plain["pid"]["patient_name"]["given_name"], json!("JANE"));
}

#[test]
fn unknown_segments_fall_back_to_positional_names() {
    assert_eq!(
        convert("ZPI|a|b^c|d&e|x^y&z"),
        json!({
            "zpi": {
                "zpi_1": "a",
                "zpi_2": { "zpi_2_1": "b", "zpi_2_2": "c" },
                "zpi_3": "d&e",
                "zpi_4": { "zpi_4_1": "x", "zpi_4_2": { "zpi_4_2_1": "y", "zpi_4_2_2": "z" } }
            }
        })
    );
}

#[test]
fn segment_without_fields_is_a_leaf() {
    assert_eq!(convert("PID"), json!({ "pid": "PID" }));
    assert_eq!(convert("EVN|||"), json!({ "evn": "EVN" }));
}

#[test]
fn repeated_segments_become_arrays_in_order() {
    assert_eq!(
        convert("NTE|1||first\rPID|1\rNTE|2||second\rNTE|3||third"),
        json!({
            "nte": [
                { "set_id_nte": "1", "comment": "first" },
                { "set_id_nte": "2", "comment": "second" },
                { "set_id_nte": "3", "comment": "third" }
            ],
            "pid": { "set_id_pid": "1" }
        })
    );
}

#[test]
fn leaf_text_is_not_unescaped_or_reencoded() {
    assert_eq!(
        convert("NTE|1||Caf\u{e9} S\u{e3}o Paulo \\T\\ r\u{e9}sultat"),
        json!({
            "nte": {
                "set_id_nte": "1",
                "comment": "Caf\u{e9} S\u{e3}o Paulo \\T\\ r\u{e9}sultat"
            }
        })
    );
}

#[test]
fn observation_value_follows_value_type() {
    assert_eq!(
        convert("OBX|1|TX|c||a^b")["obx"]["observation_value"],
        json!("a^b")
    );
    assert_eq!(
        convert("OBX|1|CE|c||8480-6^Systolic^LN")["obx"]["observation_value"],
        json!({ "identifier": "8480-6", "text": "Systolic", "name_of_coding_system": "LN" })
    );
    assert_eq!(
        convert("OBX|1||c||a^b")["obx"]["observation_value"],
        json!({ "obx_5_1": "a", "obx_5_2": "b" })
    );
}
