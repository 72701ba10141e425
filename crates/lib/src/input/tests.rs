use arrayvec::ArrayVec;

use super::{ErrorKind, IStr, Size};

#[test]
fn test_words() {
    let mut input = IStr::new(b"  12\t-7   x\n");

    assert_eq!(input.try_next::<i64>().unwrap(), Some(12));
    assert_eq!(input.try_next::<i64>().unwrap(), Some(-7));
    assert_eq!(input.index(), Size::new(7));
    assert_eq!(input.try_next::<&str>().unwrap(), Some("   x\n"));
    assert!(input.is_empty());
    assert_eq!(input.try_next::<i64>().unwrap(), None);
}

#[test]
fn test_try_line() {
    let mut input = IStr::new(b"1 2\n\n  \t\n3");

    let mut lines = Vec::new();

    while let Some(line) = input.try_line::<ArrayVec<i64, 2>>().unwrap() {
        lines.push(line.to_vec());
    }

    assert_eq!(lines, [vec![1, 2], vec![], vec![], vec![3]]);
    assert_eq!(input.index(), Size::new(10));
}

#[test]
fn test_array_capacity() {
    let mut input = IStr::new(b"1 2 3\n");
    let error = input.try_line::<ArrayVec<i64, 2>>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ArrayCapacity(2));
    assert_eq!(error.span().start, Size::new(0));
}

#[test]
fn test_not_integer_span() {
    let mut input = IStr::new(b"10 1O");

    assert_eq!(input.try_next::<i64>().unwrap(), Some(10));
    let error = input.try_next::<i64>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::NotInteger("1O".into()));
    assert_eq!(error.span(), Size::new(3)..Size::new(5));
}

#[test]
fn test_extreme_integers() {
    let mut input = IStr::new(b"-9223372036854775808 9223372036854775807 9223372036854775808");

    assert_eq!(input.try_next::<i64>().unwrap(), Some(i64::MIN));
    assert_eq!(input.try_next::<i64>().unwrap(), Some(i64::MAX));

    let error = input.try_next::<i64>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger(..)));
}

#[test]
fn test_not_utf8() {
    let mut input = IStr::new(b"\xff\xfe");
    let error = input.try_next::<&str>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::NotUtf8);

    let mut input = IStr::new(b"1 \xff\n");
    let error = input.try_line::<ArrayVec<i64, 2>>().unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::NotUtf8);
}
