use mindscreen_instruments::response::{ResponseSet, coerce_option, strict_option};
use serde_json::json;

#[test]
fn lenient_reading_takes_leading_integer() {
    assert_eq!(coerce_option(&json!("3")), 3);
    assert_eq!(coerce_option(&json!(" 2")), 2);
    assert_eq!(coerce_option(&json!("2abc")), 2);
    assert_eq!(coerce_option(&json!("2.9")), 2);
    assert_eq!(coerce_option(&json!("+1")), 1);
    assert_eq!(coerce_option(&json!("-1")), -1);
}

#[test]
fn lenient_reading_falls_back_to_zero() {
    for value in [
        json!(""),
        json!("abc"),
        json!("-"),
        json!(null),
        json!(true),
        json!([]),
        json!([null, 3]),
        json!("0x"),
        json!("0xZZ"),
        json!({ "value": 3 }),
    ] {
        assert_eq!(coerce_option(&value), 0, "{value}");
    }
}

#[test]
fn lenient_reading_of_numbers_truncates() {
    assert_eq!(coerce_option(&json!(3)), 3);
    assert_eq!(coerce_option(&json!(2.7)), 2);
    assert_eq!(coerce_option(&json!(-0.5)), 0);
}

#[test]
fn lenient_reading_saturates() {
    assert_eq!(coerce_option(&json!("99999999999999999999")), i32::MAX);
    assert_eq!(coerce_option(&json!(1e12)), i32::MAX);
    assert_eq!(coerce_option(&json!(u64::MAX)), i32::MAX);
}

#[test]
fn strict_reading_requires_whole_numbers() {
    assert_eq!(strict_option(&json!("3")), Some(3));
    assert_eq!(strict_option(&json!(" 1 ")), Some(1));
    assert_eq!(strict_option(&json!(2)), Some(2));
    assert_eq!(strict_option(&json!(2.0)), Some(2));
    assert_eq!(strict_option(&json!(2.5)), None);
    assert_eq!(strict_option(&json!("2abc")), None);
    assert_eq!(strict_option(&json!("")), None);
    assert_eq!(strict_option(&json!(null)), None);
}

#[test]
fn response_set_reads_a_json_object() {
    let responses: ResponseSet =
        serde_json::from_value(json!({ "phq_1": "2", "gad_1": 1 })).unwrap();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses.get("phq_1"), Some(&json!("2")));
    assert_eq!(responses.keys().collect::<Vec<_>>(), vec!["gad_1", "phq_1"]);
}

#[test]
fn duplicate_keys_keep_last_value() {
    let responses: ResponseSet = [("phq_1", "1"), ("phq_1", "3")].into_iter().collect();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses.get("phq_1"), Some(&json!("3")));
}

#[test]
fn hex_prefix_reads_as_hexadecimal() {
    assert_eq!(coerce_option(&json!("0x1F")), 31);
    assert_eq!(coerce_option(&json!(" 0X2")), 2);
    assert_eq!(coerce_option(&json!("-0x3")), -3);
    assert_eq!(coerce_option(&json!("0x1G")), 1);
}

#[test]
fn array_reads_as_first_element() {
    assert_eq!(coerce_option(&json!(["3"])), 3);
    assert_eq!(coerce_option(&json!([2, 1])), 2);
    assert_eq!(coerce_option(&json!([["1"]])), 1);
}

#[test]
fn exponential_numbers_keep_leading_digit() {
    assert_eq!(coerce_option(&json!(1e21)), 1);
    assert_eq!(coerce_option(&json!(2.5e-7)), 2);
    assert_eq!(coerce_option(&json!(-3e30)), -3);
}
