use super::*;
use crate::callable::NativeFunction;
use pretty_assertions::assert_eq;

#[test]
fn test_truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
}

#[test]
fn test_number_rendering() {
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(-4.0).to_string(), "-4");
    assert_eq!(Value::Number(1024.0).to_string(), "1024");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
}

#[test]
fn test_large_and_small_numbers_stay_positional() {
    assert_eq!(Value::Number(10_000_000.0).to_string(), "10000000");
    assert_eq!(Value::Number(0.0001).to_string(), "0.0001");
}

#[test]
fn test_other_rendering() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::string("hi").to_string(), "hi");
}

#[test]
fn test_equality() {
    assert_eq!(Value::Null, Value::Null);
    assert_ne!(Value::Null, Value::Bool(false));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_ne!(Value::string("1"), Value::Number(1.0));
}

#[test]
fn test_number_equality_is_bitwise() {
    assert_eq!(Value::Number(1.5), Value::Number(1.5));
    assert_ne!(Value::Number(0.0), Value::Number(-0.0));
    assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(Value::Number(f64::NAN), Value::Number(-f64::NAN));
    assert_eq!(Value::Number(f64::INFINITY), Value::Number(f64::INFINITY));
}

#[test]
fn test_callables_compare_by_identity() {
    let clock: Rc<dyn Callable> = Rc::new(NativeFunction::clock());
    let a = Value::Callable(Rc::clone(&clock));
    let b = Value::Callable(clock);
    let other = Value::Callable(Rc::new(NativeFunction::clock()));
    assert_eq!(a, b);
    assert_ne!(a, other);
    assert_eq!(a.to_string(), "<native fn clock>");
}

#[test]
fn test_from_literal() {
    assert_eq!(Value::from(&Literal::Number(1.5)), Value::Number(1.5));
    assert_eq!(Value::from(&Literal::Str("x".into())), Value::string("x"));
    assert_eq!(Value::from(&Literal::Null), Value::Null);
}
