// Property-based tests for request validation

use common::models::{CreateStudentRequest, Student};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z '-]{0,30}"
}

fn blank_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), " {1,5}".prop_map(Some)]
}

// Any payload with a non-blank first and last name passes validation and the
// validated payload preserves every field verbatim.
#[test]
fn property_valid_names_always_accepted() {
    proptest!(|(
        fname in name_strategy(),
        lname in name_strategy(),
        nickname in proptest::option::of("[A-Za-z]{1,10}"),
        phone in proptest::option::of("[0-9 +-]{7,15}"),
    )| {
        let req = CreateStudentRequest {
            fname: Some(fname.clone()),
            lname: Some(lname.clone()),
            nickname: nickname.clone(),
            phone: phone.clone(),
            image_url: None,
        };

        let new_student = req.validate().unwrap();
        prop_assert_eq!(new_student.fname, fname);
        prop_assert_eq!(new_student.lname, lname);
        prop_assert_eq!(new_student.nickname, nickname);
        prop_assert_eq!(new_student.phone, phone);
    });
}

// A missing or blank first or last name is always rejected, no matter what
// the other fields contain.
#[test]
fn property_blank_required_name_always_rejected() {
    proptest!(|(
        good in name_strategy(),
        blank in blank_strategy(),
        blank_is_fname in any::<bool>(),
        nickname in proptest::option::of("[A-Za-z]{1,10}"),
    )| {
        let (fname, lname) = if blank_is_fname {
            (blank, Some(good))
        } else {
            (Some(good), blank)
        };

        let req = CreateStudentRequest {
            fname,
            lname,
            nickname,
            phone: None,
            image_url: None,
        };

        prop_assert!(req.validate().is_err());
    });
}

// Validation never panics, whatever the payload looks like.
#[test]
fn property_validation_is_total() {
    proptest!(|(
        fname in proptest::option::of(".{0,40}"),
        lname in proptest::option::of(".{0,40}"),
        nickname in proptest::option::of(".{0,40}"),
    )| {
        let req = CreateStudentRequest {
            fname,
            lname,
            nickname,
            phone: None,
            image_url: None,
        };

        let _ = req.validate();
    });
}

// The listing wire format is always a six-element positional array mirroring
// the student's fields in order.
#[test]
fn property_listing_row_shape_is_stable() {
    proptest!(|(
        id in 1..i32::MAX,
        fname in name_strategy(),
        lname in name_strategy(),
        nickname in proptest::option::of("[A-Za-z]{1,10}"),
    )| {
        let student = Student {
            id,
            fname: fname.clone(),
            lname: lname.clone(),
            nickname,
            phone: None,
            image_url: None,
        };

        let json = serde_json::to_value(student.into_row()).unwrap();
        let row = json.as_array().unwrap();
        prop_assert_eq!(row.len(), 6);
        prop_assert_eq!(row[0].as_i64().unwrap(), i64::from(id));
        prop_assert_eq!(row[1].as_str().unwrap(), fname.as_str());
        prop_assert_eq!(row[2].as_str().unwrap(), lname.as_str());
    });
}
