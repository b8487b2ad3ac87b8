extern crate array_base;
extern crate itertools;

use array_base::*;
use itertools::Itertools;
use num_complex::Complex;

#[test]
fn resolve_builtin_kinds()
{
    let cases = vec![
        (Collection::from(vec![Value::from(1), Value::from(2), Value::from(3)]), Some(DType::Generic)),
        (Collection::from(Vec::<Value>::new()), Some(DType::Generic)),
        (Collection::from(vec![1f64, 2.]), Some(DType::Float64)),
        (Collection::from(vec![1f32]), Some(DType::Float32)),
        (Collection::from(vec![1i32]), Some(DType::Int32)),
        (Collection::from(vec![1i16]), Some(DType::Int16)),
        (Collection::from(vec![1i8]), Some(DType::Int8)),
        (Collection::from(vec![1u32]), Some(DType::Uint32)),
        (Collection::from(vec![1u16]), Some(DType::Uint16)),
        (Collection::from(vec![1u8]), Some(DType::Uint8)),
        (Collection::from(Complex128Array::zeros(1)), Some(DType::Complex128)),
        (Collection::from(Complex64Array::zeros(1)), Some(DType::Complex64)),
        (Collection::from(BooleanArray::new(1)), Some(DType::Bool)),
        (Collection::from(ArrayLikeObject::new(3)), None),
        (Collection::Buffer(vec![0; 16]), None),
    ];
    for (x, expected) in &cases {
        assert_eq!(dtype(x), *expected, "{:?}", x);
    }
}

#[test]
fn generic_is_not_unknown()
{
    let x: Collection = vec![Value::from("a"), Value::Null].into();
    assert_eq!(dtype(&x), Some(DType::Generic));
    assert!(dtype(&x).is_some());
    assert_eq!(dtype(&Collection::from(ArrayLikeObject::new(0))), None);
}

#[test]
fn empty_collections_keep_their_kind()
{
    for &dt in dtypes() {
        let x = array_gen::CollectionBuilder::new(dt, 0).build();
        assert_eq!(dtype(&x), Some(dt));
        assert_eq!(x.len(), Some(0));
    }
}

#[test]
fn dtype_strings_round_trip()
{
    for &dt in dtypes() {
        assert_eq!(dt.as_str().parse::<DType>(), Ok(dt));
        assert_eq!(dt.to_string(), dt.as_str());
    }
    let err = "float16".parse::<DType>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownDType);
    assert!(err.to_string().contains("float16"));
    assert!("Float64".parse::<DType>().is_err());
}

#[test]
fn dtype_list_is_canonical()
{
    let names = dtypes().iter().map(|dt| dt.as_str()).collect_vec();
    assert_eq!(
        names,
        [
            "float64",
            "float32",
            "int32",
            "int16",
            "int8",
            "uint32",
            "uint16",
            "uint8",
            "complex128",
            "complex64",
            "bool",
            "generic",
        ]
    );
    assert!(dtypes().iter().all_unique());
}

#[test]
fn dtype_predicates_partition()
{
    for &dt in dtypes() {
        let classes = [dt.is_real(), dt.is_complex(), dt.is_boolean(), dt == DType::Generic];
        assert_eq!(classes.iter().filter(|&&c| c).count(), 1, "{}", dt);
        assert_eq!(dt.uses_accessor_protocol(), dt.is_complex() || dt.is_boolean());
        assert_eq!(dt.is_integer(), dt.is_signed_integer() || dt.is_unsigned_integer());
    }
    assert_eq!(DType::Complex128.bytes_per_element(), Some(16));
    assert_eq!(DType::Bool.bytes_per_element(), Some(1));
    assert_eq!(DType::Generic.bytes_per_element(), None);
}

#[test]
fn into_dtype_sources_agree()
{
    for (&dt, len) in dtypes().iter().cartesian_product(0..3) {
        let x = array_gen::CollectionBuilder::new(dt, len).build();
        let from_string = dt.as_str().to_string();
        assert_eq!((&x).into_dtype(), Some(dt));
        assert_eq!(dt.as_str().into_dtype(), Some(dt));
        assert_eq!((&from_string).into_dtype(), Some(dt));
        assert_eq!(Some(dt).into_dtype(), Some(dt));
    }
    assert_eq!("beep".into_dtype(), None);
    assert_eq!(None::<DType>.into_dtype(), None);
}

#[test]
fn custom_accessor_has_no_dtype()
{
    let c = Complex128Array::from_complex(vec![Complex::new(1., 2.)]);
    let x = Collection::Custom(Box::new(c));
    assert_eq!(dtype(&x), None);
    assert!(is_accessor_array(&x));
    assert!(x.is_array_like());
}
