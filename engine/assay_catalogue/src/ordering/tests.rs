use assay_check::Check;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn before_and_after_pass() {
    assert!(Check::that(5_i64).is_before(10).is_ok());
    assert!(Check::that('b').is_after('a').is_ok());
    assert!(Check::that("abc").is_before("abd").is_ok());
}

#[test]
fn equal_values_are_neither_before_nor_after() {
    assert!(Check::that(4_u16).is_before(4).is_err());
    assert!(Check::that(4_u16).is_after(4).is_err());
}

#[test]
fn is_before_failure_message() {
    let err = Check::that(10_i64).is_before(5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nThe checked value is not before the reference value.\
         \nThe checked value:\n\t[10]\
         \nThe value must be before:\n\t[5]"
    );
}

#[test]
fn negated_is_before_message() {
    let err = Check::that(5_i64).not().is_before(10).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nThe checked value is before the reference value whereas it must not.\
         \nThe checked value:\n\t[5]\
         \nThe value must be after:\n\t[10]"
    );
}

#[test]
fn is_after_messages() {
    let err = Check::that(1_i32).is_after(2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nThe checked value is not after the reference value.\
         \nThe checked value:\n\t[1]\
         \nThe value must be after:\n\t[2]"
    );

    let err = Check::that(3_i32).not().is_after(2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nThe checked value is after the reference value whereas it must not.\
         \nThe checked value:\n\t[3]\
         \nThe value must be before:\n\t[2]"
    );
}

#[test]
fn nan_is_neither_before_nor_after() {
    let err = Check::that(f64::NAN).is_before(1.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\nThe checked value is not before the reference value.\
         \nThe checked value:\n\t[NaN]\
         \nThe value must be before:\n\t[1]"
    );
    assert!(Check::that(f64::NAN).not().is_before(1.0).is_ok());

    assert!(Check::that(1.0_f32).is_after(f32::NAN).unwrap_err().is_failure());
    assert!(Check::that(1.0_f32).not().is_after(f32::NAN).is_ok());
}
