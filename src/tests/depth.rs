use super::{depth, render};

#[test]
fn test_depth_counts_separators() {
    assert_eq!(depth(""), 1);
    assert_eq!(depth("1"), 1);
    assert_eq!(depth("1.2"), 2);
    assert_eq!(depth("1.2.3.4"), 4);
}

#[test]
fn test_depth_ignores_digit_values() {
    assert_eq!(depth("999.0.17"), 3);
    assert_eq!(depth("."), 2);
}

#[test]
fn test_render_joins_without_trailing_separator() {
    assert_eq!(render(&[2, 0, 3]), "2.0.3");
    assert_eq!(render(&[7]), "7");
    assert_eq!(render(&[]), "");
}
