extern crate array_base;
extern crate serde;
extern crate serde_json;

use array_base::{BooleanArray, Complex128Array, Complex64Array, DType, ErrorKind, Value};
use num_complex::Complex;

#[test]
fn serial_dtype_json()
{
    let serial = serde_json::to_string(&DType::Complex128).unwrap();
    assert_eq!(serial, "\"complex128\"");
    let res = serde_json::from_str::<DType>(&serial);
    assert_eq!(res.unwrap(), DType::Complex128);

    let all = serde_json::to_string(array_base::dtypes()).unwrap();
    let back: Vec<DType> = serde_json::from_str(&all).unwrap();
    assert_eq!(&back[..], array_base::dtypes());
}

#[test]
fn serial_dtype_rejects_unknown()
{
    let res = serde_json::from_str::<DType>("\"float16\"");
    let err = res.unwrap_err().to_string();
    assert!(err.contains("float16"), "{}", err);
    assert!(err.contains("complex64"), "{}", err);
}

#[test]
fn serial_value_json()
{
    let values = vec![
        Value::Number(1.5),
        Value::Bool(true),
        Value::from("beep"),
        Value::Null,
        Value::from(Complex::new(1f64, -2.)),
    ];
    let serial = serde_json::to_string(&values).unwrap();
    assert_eq!(serial, r#"[1.5,true,"beep",null,[1.0,-2.0]]"#);
    let res: Vec<Value> = serde_json::from_str(&serial).unwrap();
    assert_eq!(res, values);

    // integers read back as numbers
    let res: Value = serde_json::from_str("-3").unwrap();
    assert_eq!(res, Value::Number(-3.));
}

#[test]
fn serial_value_complex64_widens()
{
    let z = Value::from(Complex::new(0.5f32, 0.25));
    let serial = serde_json::to_string(&z).unwrap();
    let res: Value = serde_json::from_str(&serial).unwrap();
    assert_eq!(res, Value::from(Complex::new(0.5f64, 0.25)));
    assert!(res.same_value(&z));

    assert!(serde_json::from_str::<Value>("[1.0]").is_err());
    assert!(serde_json::from_str::<Value>("[1.0, 2.0, 3.0]").is_err());
}

#[test]
fn serial_complex_array_json()
{
    let a = Complex128Array::from_interleaved(vec![1., 2., 3., 4.]).unwrap();
    let serial = serde_json::to_string(&a).unwrap();
    assert_eq!(serial, "[1.0,2.0,3.0,4.0]");
    let res = serde_json::from_str::<Complex128Array>(&serial);
    assert_eq!(res.unwrap(), a);

    let b = Complex64Array::zeros(2);
    let serial = serde_json::to_string(&b).unwrap();
    let res = serde_json::from_str::<Complex64Array>(&serial);
    assert_eq!(res.unwrap(), b);
}

#[test]
fn serial_complex_array_odd_length()
{
    let res = serde_json::from_str::<Complex128Array>("[1.0,2.0,3.0]");
    let err = res.unwrap_err().to_string();
    assert!(err.contains("multiple of two"), "{}", err);
    // the same check the constructor makes
    assert_eq!(
        Complex128Array::from_interleaved(vec![1., 2., 3.]).unwrap_err().kind(),
        ErrorKind::InvalidLength
    );
}

#[test]
fn serial_boolean_array_json()
{
    let a = BooleanArray::from_bools(vec![true, false, true]);
    let serial = serde_json::to_string(&a).unwrap();
    assert_eq!(serial, "[true,false,true]");
    let res = serde_json::from_str::<BooleanArray>(&serial);
    assert_eq!(res.unwrap(), a);
}
