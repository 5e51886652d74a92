#![cfg(feature = "dev")]

use boxmat_rs::internals::primitives::errors::MatrixError;
use boxmat_rs::internals::primitives::validator::Validator;

#[test]
fn test_same_shape() {
    assert!(Validator::validate_same_shape((2, 3), (2, 3)).is_ok());
    assert!(Validator::validate_same_shape((0, 0), (0, 0)).is_ok());
    assert_eq!(
        Validator::validate_same_shape((2, 3), (3, 2)).unwrap_err(),
        MatrixError::ShapeMismatch {
            left: (2, 3),
            right: (3, 2)
        }
    );
}

#[test]
fn test_product_shapes() {
    assert!(Validator::validate_product_shapes((2, 3), (3, 4)).is_ok());
    assert_eq!(
        Validator::validate_product_shapes((2, 3), (4, 3)).unwrap_err(),
        MatrixError::IncompatibleProduct {
            left: (2, 3),
            right: (4, 3)
        }
    );
}

#[test]
fn test_buffer_len() {
    assert!(Validator::validate_buffer_len(6, 6).is_ok());
    assert_eq!(
        Validator::validate_buffer_len(6, 5).unwrap_err(),
        MatrixError::BufferSizeMismatch {
            expected: 6,
            got: 5
        }
    );
}

#[test]
fn test_not_empty() {
    assert!(Validator::validate_not_empty(1, 1).is_ok());
    assert_eq!(
        Validator::validate_not_empty(0, 5).unwrap_err(),
        MatrixError::EmptyInput
    );
    assert_eq!(
        Validator::validate_not_empty(5, 0).unwrap_err(),
        MatrixError::EmptyInput
    );
}

#[test]
fn test_kernel_bounds() {
    assert!(Validator::validate_kernel(1, 3, 3).is_ok());
    assert!(Validator::validate_kernel(3, 3, 3).is_ok());
    // Half-window equal to the smaller extent is the limit.
    assert!(Validator::validate_kernel(7, 3, 5).is_ok());

    assert_eq!(
        Validator::validate_kernel(0, 3, 3).unwrap_err(),
        MatrixError::InvalidKernelSize(0)
    );
    assert_eq!(
        Validator::validate_kernel(9, 3, 3).unwrap_err(),
        MatrixError::KernelTooLarge {
            k_size: 9,
            rows: 3,
            cols: 3
        }
    );
    // Even sizes are normalized before the bound check: 6 behaves as 7.
    assert!(Validator::validate_kernel(6, 3, 3).is_ok());
}

#[test]
fn test_checks_are_ordered() {
    // The zero check fires before the bound check.
    assert_eq!(
        Validator::validate_kernel(0, 0, 0).unwrap_err(),
        MatrixError::InvalidKernelSize(0)
    );
}
