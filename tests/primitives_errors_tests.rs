use boxmat_rs::prelude::*;

#[test]
fn test_matrix_error_display() {
    // EmptyInput
    let err = MatrixError::EmptyInput;
    assert_eq!(format!("{}", err), "Input matrix is empty");

    // ShapeMismatch
    let err = MatrixError::ShapeMismatch {
        left: (2, 3),
        right: (4, 5),
    };
    assert_eq!(
        format!("{}", err),
        "Shape mismatch: left is 2x3, right is 4x5"
    );

    // IncompatibleProduct
    let err = MatrixError::IncompatibleProduct {
        left: (2, 3),
        right: (4, 5),
    };
    assert_eq!(
        format!("{}", err),
        "Incompatible product shapes: 2x3 * 4x5 (inner dimensions must agree)"
    );

    // BufferSizeMismatch
    let err = MatrixError::BufferSizeMismatch {
        expected: 6,
        got: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Buffer length mismatch: expected 6 elements, got 5"
    );

    // AllocationFailed
    let err = MatrixError::AllocationFailed { bytes: 1024 };
    assert_eq!(format!("{}", err), "Allocation failed: 1024 bytes requested");

    // InvalidKernelSize
    let err = MatrixError::InvalidKernelSize(0);
    assert_eq!(
        format!("{}", err),
        "Invalid kernel size: 0 (must be at least 1)"
    );

    // KernelTooLarge
    let err = MatrixError::KernelTooLarge {
        k_size: 9,
        rows: 3,
        cols: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Kernel size 9 too large for a 3x3 matrix (half-window must not exceed the smaller extent)"
    );
}

#[test]
fn test_matrix_error_properties() {
    let err1 = MatrixError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, MatrixError::InvalidKernelSize(0));
}

#[test]
fn test_matrix_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<MatrixError>();
}

#[test]
fn test_errors_surface_through_operations() {
    let a = Matrix::<i32>::with_shape(2, 2);
    let b = Matrix::<i32>::with_shape(2, 3);

    assert_eq!(
        a.add(&b).unwrap_err(),
        MatrixError::ShapeMismatch {
            left: (2, 2),
            right: (2, 3)
        }
    );
    assert_eq!(
        a.matmul(&Matrix::<i32>::with_shape(3, 2)).unwrap_err(),
        MatrixError::IncompatibleProduct {
            left: (2, 2),
            right: (3, 2)
        }
    );
}
