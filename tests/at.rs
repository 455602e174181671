use array_at::array::{to_accessor_array, Buffer, Complex128Array, Complex64Array};
use array_at::at;
use array_at::types::{c32, c64};
use paste::paste;

fn complex_buffer() -> Complex128Array {
    Complex128Array::from_interleaved(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap()
}

// Builds the pair of tests for one container kind: element lookup and out-of-bounds lookup.
macro_rules! test_at {
    ($(($name:ident, $x:expr)),+) => {
    $(
        paste! {
            #[test]
            fn [<test_at_returns_element_ $name>]() {
                let x = $x;
                assert_eq!(at(&x, 1), Some(2));
                assert_eq!(at(&x, 4), Some(5));
                assert_eq!(at(&x, -1), Some(6));
                assert_eq!(at(&x, -6), Some(1));
            }

            #[test]
            fn [<test_at_out_of_bounds_ $name>]() {
                let x = $x;
                assert_eq!(at(&x, 10), None);
                assert_eq!(at(&x, 40), None);
                assert_eq!(at(&x, -10), None);
                assert_eq!(at(&x, -40), None);
            }
        }
    )*
    };
}

test_at!(
    (generic, vec![1, 2, 3, 4, 5, 6]),
    (array, [1, 2, 3, 4, 5, 6]),
    (typed_array, Buffer::<i32>::from([1, 2, 3, 4, 5, 6])),
    (boxed_slice, vec![1, 2, 3, 4, 5, 6].into_boxed_slice()),
    (deque, std::collections::VecDeque::from(vec![1, 2, 3, 4, 5, 6])),
    (accessors, to_accessor_array(vec![1, 2, 3, 4, 5, 6]))
);

#[test]
fn test_at_returns_element_complex_typed_array() {
    let x = complex_buffer();

    assert_eq!(at(&x, 1), Some(c64::new(3.0, 4.0)));
    assert_eq!(at(&x, 3), Some(c64::new(7.0, 8.0)));
    assert_eq!(at(&x, -1), Some(c64::new(7.0, 8.0)));
    assert_eq!(at(&x, -4), Some(c64::new(1.0, 2.0)));
}

#[test]
fn test_at_out_of_bounds_complex_typed_array() {
    let x = complex_buffer();

    assert_eq!(at(&x, 10), None);
    assert_eq!(at(&x, 40), None);
    assert_eq!(at(&x, -10), None);
    assert_eq!(at(&x, -40), None);
}

#[test]
fn test_at_single_precision_complex_typed_array() {
    let x = Complex64Array::from_interleaved(vec![1.0, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!(at(&x, 0), Some(c32::new(1.0, 2.0)));
    assert_eq!(at(&x, -1), Some(c32::new(3.0, 4.0)));
    assert_eq!(at(&x, 2), None);
}

#[test]
fn test_at_boundary_symmetry() {
    let x = vec![1, 2, 3, 4, 5, 6];
    let n = x.len() as isize;

    assert_eq!(at(&x, n - 1), at(&x, -1));
    assert_eq!(at(&x, 0), at(&x, -n));
    assert_eq!(at(&x, n), None);
    assert_eq!(at(&x, -n - 1), None);
}

#[test]
fn test_at_empty() {
    let x: Vec<i32> = vec![];
    let y = Complex128Array::zeros(0);
    let z = to_accessor_array(Buffer::<u8>::zeros(0));

    for index in [-1, 0, 1, isize::MIN, isize::MAX] {
        assert_eq!(at(&x, index), None);
        assert_eq!(at(&y, index), None);
        assert_eq!(at(&z, index), None);
    }
}

#[test]
fn test_at_does_not_modify_input() {
    let x = vec![1, 2, 3, 4, 5, 6];
    let before = x.clone();
    let ptr = x.as_ptr();

    let first = at(&x, -2);
    let second = at(&x, -2);

    assert_eq!(first, second);
    assert_eq!(x, before);
    assert_eq!(x.as_ptr(), ptr);

    let z = complex_buffer();
    let before = z.clone();
    assert_eq!(at(&z, 2), at(&z, 2));
    assert_eq!(z, before);
}
