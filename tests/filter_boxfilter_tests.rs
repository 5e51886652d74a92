use approx::{assert_abs_diff_eq, assert_relative_eq};
use boxmat_rs::prelude::*;

fn ramp_f32(rows: usize, cols: usize) -> Matrix<f32> {
    let data: Vec<f32> = (0..rows * cols).map(|i| i as f32).collect();
    Matrix::from_buffer(rows, cols, &data, BufferLayout::Packed).unwrap()
}

fn ramp_u8(rows: usize, cols: usize) -> Matrix<u8> {
    let data: Vec<u8> = (0..rows * cols).map(|i| i as u8).collect();
    Matrix::from_buffer(rows, cols, &data, BufferLayout::Packed).unwrap()
}

#[test]
fn test_k1_is_identity() {
    // ks = 1/1^2, so a unit window reproduces the input exactly
    // (integer-valued floats keep every intermediate sum exact).
    let input = ramp_f32(4, 5);
    let mut out = Matrix::<f32>::new();
    box_filter(&input, &mut out, 1).unwrap();
    assert_eq!(out.shape(), (4, 5));
    for r in 0..4 {
        for c in 0..5 {
            assert_eq!(*out.at(r, c), *input.at(r, c));
        }
    }
}

#[test]
fn test_k1_identity_casts_input_type() {
    let input = ramp_u8(3, 4);
    let mut out = Matrix::<f32>::new();
    box_filter(&input, &mut out, 1).unwrap();
    for r in 0..3 {
        for c in 0..4 {
            assert_eq!(*out.at(r, c), *input.at(r, c) as f32);
        }
    }
}

#[test]
fn test_constant_input_stays_constant() {
    for &(rows, cols, k_size) in &[(5usize, 6usize, 3usize), (4, 4, 5), (3, 7, 5), (7, 3, 7)] {
        let input =
            Matrix::<u8>::from_buffer(rows, cols, &vec![7u8; rows * cols], BufferLayout::Packed)
                .unwrap();
        let mut out = Matrix::<f32>::new();
        box_filter(&input, &mut out, k_size).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                assert_abs_diff_eq!(*out.at(r, c), 7.0, epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn test_border_reflection_5x5() {
    // 5x5 ramp 0..24, k_size = 3. The column/row reflection table for
    // L = 5, k = 1 maps virtual indices [0, 0, 1, 2, 3, 4, 4], so the
    // window at (0,0) averages rows {0,0,1} x cols {0,0,1}:
    //   (0+0+1) + (0+0+1) + (5+5+6) = 18, mean 2.
    let input = ramp_f32(5, 5);
    let mut out = Matrix::<f32>::new();
    box_filter(&input, &mut out, 3).unwrap();

    assert_relative_eq!(*out.at(0, 0), 2.0, max_relative = 1e-5);

    // Interior window is the plain 3x3 mean around the center.
    assert_relative_eq!(*out.at(2, 2), 12.0, max_relative = 1e-5);

    // Far corner mirrors rows {3,4,4} x cols {3,4,4}:
    //   (18+19+19) + (23+24+24) + (23+24+24) = 198, mean 22.
    assert_relative_eq!(*out.at(4, 4), 22.0, max_relative = 1e-5);

    // Top edge away from the corner: rows {0,0,1} x cols {1,2,3}.
    //   (1+2+3) + (1+2+3) + (6+7+8) = 33, mean 33/9.
    assert_relative_eq!(*out.at(0, 2), 33.0 / 9.0, max_relative = 1e-5);
}

#[test]
fn test_even_k_size_normalizes_to_odd() {
    let input = ramp_u8(6, 6);
    let mut even = Matrix::<f32>::new();
    let mut odd = Matrix::<f32>::new();
    box_filter(&input, &mut even, 4).unwrap();
    box_filter(&input, &mut odd, 3).unwrap();
    for r in 0..6 {
        for c in 0..6 {
            assert_eq!(*even.at(r, c), *odd.at(r, c));
        }
    }
}

#[test]
fn test_output_reuse_is_idempotent() {
    let input = ramp_u8(5, 5);

    let mut fresh = Matrix::<f32>::new();
    box_filter(&input, &mut fresh, 3).unwrap();

    // Pre-shaped output with stale contents is fully overwritten.
    let mut reused = Matrix::<f32>::with_shape(5, 5);
    reused.add_assign_scalar(123.0);
    box_filter(&input, &mut reused, 3).unwrap();
    box_filter(&input, &mut reused, 3).unwrap();

    for r in 0..5 {
        for c in 0..5 {
            assert_eq!(*reused.at(r, c), *fresh.at(r, c));
        }
    }
}

#[test]
fn test_misshaped_output_is_reallocated() {
    let input = ramp_u8(4, 6);
    let mut out = Matrix::<f32>::with_shape(2, 2);
    box_filter(&input, &mut out, 3).unwrap();
    assert_eq!(out.shape(), (4, 6));
}

#[test]
fn test_empty_input_errors() {
    let input = Matrix::<u8>::new();
    let mut out = Matrix::<f32>::new();
    assert_eq!(
        box_filter(&input, &mut out, 3).unwrap_err(),
        MatrixError::EmptyInput
    );
}

#[test]
fn test_zero_kernel_errors() {
    let input = ramp_u8(3, 3);
    let mut out = Matrix::<f32>::new();
    assert_eq!(
        box_filter(&input, &mut out, 0).unwrap_err(),
        MatrixError::InvalidKernelSize(0)
    );
}

#[test]
fn test_oversized_kernel_errors() {
    let input = ramp_u8(3, 3);
    let mut out = Matrix::<f32>::new();
    // k_size 9 gives a half-window of 4 > min extent 3.
    assert!(matches!(
        box_filter(&input, &mut out, 9),
        Err(MatrixError::KernelTooLarge { .. })
    ));

    // Half-window equal to the extent is the largest valid window.
    assert!(box_filter(&input, &mut out, 7).is_ok());
}

#[test]
fn test_single_column_input() {
    let input = Matrix::<f32>::from_buffer(4, 1, &[1.0, 2.0, 3.0, 4.0], BufferLayout::Packed)
        .unwrap();
    let mut out = Matrix::<f32>::new();
    box_filter(&input, &mut out, 3).unwrap();
    // Columns mirror onto themselves, so each output row is the 1-D mean
    // over reflected rows {r-1, r, r+1} repeated three times across the
    // (degenerate) column window.
    // Row 0: rows {0,0,1} -> (1+1+2)*3 / 9 = 4/3.
    assert_relative_eq!(*out.at(0, 0), 4.0 / 3.0, max_relative = 1e-5);
    // Row 2: rows {1,2,3} -> (2+3+4)*3 / 9 = 3.
    assert_relative_eq!(*out.at(2, 0), 3.0, max_relative = 1e-5);
}

#[test]
fn test_f64_accumulator() {
    let input = ramp_u8(5, 5);
    let mut out = Matrix::<f64>::new();
    box_filter(&input, &mut out, 3).unwrap();
    assert_relative_eq!(*out.at(0, 0), 2.0, max_relative = 1e-12);
}

#[test]
fn test_box_filter_config_type_matches_free_function() {
    let input = ramp_u8(5, 5);

    let mut via_fn = Matrix::<f32>::new();
    box_filter(&input, &mut via_fn, 5).unwrap();

    let filter = BoxFilter::new(5);
    assert_eq!(filter.k_size(), 5);
    let mut via_cfg = Matrix::<f32>::new();
    filter.apply(&input, &mut via_cfg).unwrap();

    for r in 0..5 {
        for c in 0..5 {
            assert_eq!(*via_cfg.at(r, c), *via_fn.at(r, c));
        }
    }
}

#[test]
fn test_window_sum_matches_naive_mean() {
    // Cross-check the separable implementation against a direct windowed
    // mean with reflected indexing on a non-square input.
    let rows = 4;
    let cols = 6;
    let k = 1usize;
    let input = ramp_f32(rows, cols);
    let mut out = Matrix::<f32>::new();
    box_filter(&input, &mut out, 2 * k + 1).unwrap();

    let reflect = |v: isize, len: isize| -> usize {
        if v < 0 {
            (-v - 1) as usize
        } else if v >= len {
            (2 * len - 1 - v) as usize
        } else {
            v as usize
        }
    };

    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0f64;
            for dr in -(k as isize)..=(k as isize) {
                for dc in -(k as isize)..=(k as isize) {
                    let rr = reflect(r as isize + dr, rows as isize);
                    let cc = reflect(c as isize + dc, cols as isize);
                    acc += *input.at(rr, cc) as f64;
                }
            }
            let mean = acc / ((2 * k + 1) * (2 * k + 1)) as f64;
            assert_abs_diff_eq!(*out.at(r, c) as f64, mean, epsilon = 1e-4);
        }
    }
}
