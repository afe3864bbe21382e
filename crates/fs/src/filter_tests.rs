use super::*;
use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

#[test]
fn hidden_names_depend_on_flag() {
    let cases: &[(&str, bool, bool)] = &[
        ("a", false, true),
        ("a", true, true),
        (".b", false, false),
        (".b", true, true),
        (".", false, false),
        (".", true, true),
        ("..", false, false),
        ("..", true, true),
        ("a.b", false, true),
        ("", false, true),
        ("", true, true),
    ];

    for (name, show_hidden, expected) in cases {
        assert_eq!(
            should_show(name, *show_hidden),
            *expected,
            "should_show({:?}, {}) should be {}",
            name,
            show_hidden,
            expected
        );
    }
}

#[test]
fn non_utf8_names_are_checked_by_first_byte() {
    let visible = OsString::from_vec(vec![0xff, b'x']);
    let hidden = OsString::from_vec(vec![b'.', 0xff]);

    assert!(should_show(&visible, false));
    assert!(!should_show(&hidden, false));
    assert!(should_show(&hidden, true));
}
