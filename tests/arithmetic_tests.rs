use compound_assign::env::value::Value;
use compound_assign::errors::EvalError;
use compound_assign::ops::Op;

#[test]
fn test_scalar_integer_ops() {
    assert_eq!(
        Op::Add.apply(&Value::Int(7), &Value::Int(2)).unwrap(),
        Value::Int(9)
    );
    assert_eq!(
        Op::Sub.apply(&Value::Int(7), &Value::Int(2)).unwrap(),
        Value::Int(5)
    );
    assert_eq!(
        Op::Mul.apply(&Value::Int(7), &Value::Int(2)).unwrap(),
        Value::Int(14)
    );
    // Integer division truncates
    assert_eq!(
        Op::Div.apply(&Value::Int(7), &Value::Int(2)).unwrap(),
        Value::Int(3)
    );
    assert_eq!(
        Op::Div.apply(&Value::Int(-7), &Value::Int(2)).unwrap(),
        Value::Int(-3)
    );
}

#[test]
fn test_int_float_promotion() {
    let result = Op::Add.apply(&Value::Int(1), &Value::Float(0.5)).unwrap();
    assert_eq!(result, Value::Float(1.5));

    let result = Op::Mul.apply(&Value::Float(2.5), &Value::Int(4)).unwrap();
    assert_eq!(result, Value::Float(10.0));
}

#[test]
fn test_float_division_follows_ieee() {
    // No zero check once either operand is a float
    let result = Op::Div.apply(&Value::Float(1.0), &Value::Int(0)).unwrap();
    match result {
        Value::Float(x) => assert!(x.is_infinite() && x > 0.0),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn test_integer_division_by_zero() {
    let err = Op::Div.apply(&Value::Int(1), &Value::Int(0)).unwrap_err();
    assert!(matches!(err, EvalError::DivisionByZero));
}

#[test]
fn test_integer_overflow() {
    let err = Op::Add
        .apply(&Value::Int(i64::MAX), &Value::Int(1))
        .unwrap_err();
    assert!(matches!(err, EvalError::IntegerOverflow { .. }));

    // i64::MIN / -1 overflows in checked_div
    let err = Op::Div
        .apply(&Value::Int(i64::MIN), &Value::Int(-1))
        .unwrap_err();
    assert!(matches!(err, EvalError::IntegerOverflow { .. }));
}

#[test]
fn test_scalar_broadcasts_over_vector() {
    let v = Value::ints([1, 2, 3]);

    assert_eq!(
        Op::Add.apply(&v, &Value::Int(10)).unwrap(),
        Value::ints([11, 12, 13])
    );

    // Scalar on the left maps across the right-hand vector
    assert_eq!(
        Op::Sub.apply(&Value::Int(10), &v).unwrap(),
        Value::ints([9, 8, 7])
    );
}

#[test]
fn test_float_vector_broadcast() {
    let v = Value::floats([1.0, 2.5, 4.0]);

    let result = Op::Div.apply(&v, &Value::Int(2)).unwrap();
    let elements = result.as_vector().expect("expected a vector");
    assert_eq!(elements, Value::floats([0.5, 1.25, 2.0]).as_vector().unwrap());
}

#[test]
fn test_vector_pairwise() {
    let a = Value::ints([1, 2, 3]);
    let b = Value::ints([10, 20, 30]);

    assert_eq!(Op::Add.apply(&a, &b).unwrap(), Value::ints([11, 22, 33]));
    assert_eq!(Op::Mul.apply(&a, &b).unwrap(), Value::ints([10, 40, 90]));
}

#[test]
fn test_vector_length_mismatch() {
    let a = Value::ints([1, 2, 3]);
    let b = Value::ints([1, 2]);

    let err = Op::Add.apply(&a, &b).unwrap_err();
    assert!(matches!(err, EvalError::LengthMismatch { left: 3, right: 2 }));
}

#[test]
fn test_scalar_recurses_into_nested_vectors() {
    let nested = Value::Vector(vec![Value::ints([1, 2]), Value::ints([3, 4])]);

    let result = Op::Mul.apply(&nested, &Value::Int(2)).unwrap();
    assert_eq!(
        result,
        Value::Vector(vec![Value::ints([2, 4]), Value::ints([6, 8])])
    );
}

#[test]
fn test_error_stops_at_first_failing_element() {
    let v = Value::Vector(vec![Value::Int(4), Value::Int(2), Value::Int(1)]);
    let divisors = Value::ints([2, 0, 1]);

    let err = Op::Div.apply(&v, &divisors).unwrap_err();
    assert!(matches!(err, EvalError::DivisionByZero));
}
