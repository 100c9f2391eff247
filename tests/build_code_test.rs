// tests/build_code_test.rs
use release_toolkit::capability::FixedClock;
use release_toolkit::format::{
    android_version_code, android_version_name, four_part_string, pre_release_string,
    release_string, AndroidCodeLayout,
};
use release_toolkit::{BuildCode, BuildCodeEncoding, PreReleaseMarker, ReleaseError, Version};

fn clock() -> FixedClock {
    FixedClock::ymd(2024, 3, 9).unwrap()
}

#[test]
fn test_derived_concat_v1_example() {
    let v = Version::new(1, 2, 3).with_pre_release(4);
    let code = BuildCodeEncoding::DerivedConcatV1
        .derive(&v, None, &clock())
        .unwrap();
    assert_eq!(code.as_str(), format!("1{}{}{}{}", "01", "02", "03", "04"));
    assert_eq!(code.as_integer().unwrap(), 101_020_304);
}

#[test]
fn test_derived_concat_v1_matches_default_android_code() {
    let v = Version::new(21, 4, 0).with_pre_release(2);
    let code = BuildCodeEncoding::DerivedConcatV1
        .derive(&v, None, &clock())
        .unwrap();
    assert_eq!(code.as_str(), AndroidCodeLayout::default().version_code(&v).unwrap());
}

#[test]
fn test_derived_concat_v2_width_violation() {
    let v = Version::new(12, 34, 56).with_pre_release(78);
    let err = BuildCodeEncoding::DerivedConcatV2
        .derive(&v, None, &clock())
        .unwrap_err();
    assert!(matches!(err, ReleaseError::EncodingOverflow { .. }));
}

#[test]
fn test_unused_operand_is_ignored() {
    let v = Version::new(3, 1, 0);
    let with_code = BuildCodeEncoding::FourPartPassthrough
        .derive(&v, Some(&BuildCode::from_int(99)), &clock())
        .unwrap();
    let without = BuildCodeEncoding::FourPartPassthrough
        .derive(&v, None, &clock())
        .unwrap();
    assert_eq!(with_code, without);

    let a = BuildCodeEncoding::SimpleIncrement
        .derive(&Version::short(1, 0), Some(&BuildCode::from_int(7)), &clock())
        .unwrap();
    let b = BuildCodeEncoding::SimpleIncrement
        .derive(&Version::short(9, 9), Some(&BuildCode::from_int(7)), &clock())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_date_stamped_uses_injected_clock() {
    let v = Version::short(5, 2);
    let code = BuildCodeEncoding::DateStamped
        .derive(&v, None, &clock())
        .unwrap();
    assert_eq!(code.to_string(), "5.2.0.20240309");
}

#[test]
fn test_absent_build_code_renders_empty() {
    let code = BuildCodeEncoding::IntegerPassthrough
        .derive(&Version::short(1, 0), None, &clock())
        .unwrap();
    assert_eq!(code.to_string(), "");
    assert_eq!(BuildCode::render(None), "");
}

#[test]
fn test_pre_release_formatting_guard() {
    let v = Version::new(1, 2, 3).with_pre_release(0);
    assert!(matches!(
        pre_release_string(&v, &PreReleaseMarker::ReleaseCandidate),
        Err(ReleaseError::InvalidState(_))
    ));
}

#[test]
fn test_formatters_for_milestone_and_platforms() {
    let v = Version::parse("10.1-rc-3").unwrap();
    assert_eq!(release_string(&v), "10.1");
    assert_eq!(android_version_name(&v), "10.1-rc-3");
    assert_eq!(four_part_string(&v), "10.1.0.3");
    assert_eq!(android_version_code(&v, 1, 2).unwrap(), "110010003");
    assert_eq!(
        pre_release_string(&v, &PreReleaseMarker::Custom("alpha".to_string())).unwrap(),
        "10.1-alpha-3"
    );
}
