//! Converter tests
//!
//! Every converter must preserve every element, whatever the source kind

mod common;

use common::{bit_grid, convert_to, every_kind, fill, grid, poly_grid, snapshot, Opaque};
use gf2mat::{
    elementwise_eq, resize, to_dense_binary, to_dense_poly, to_sparse_binary, to_sparse_poly,
    AnyMatrix, DenseBinary, DensePoly, Identity, Matrix, MatrixError, Poly, Rotation, Shift,
    SparsePoly, Zero,
};
use proptest::prelude::*;
use test_case::test_case;

const TARGETS: [&str; 4] = ["sparse-binary", "dense-binary", "sparse-poly", "dense-poly"];

fn structural_sources() -> Vec<Box<dyn Matrix>> {
    vec![
        Box::new(Identity::new(3, 5).unwrap()),
        Box::new(Identity::new(4, 2).unwrap()),
        Box::new(Zero::new(2, 3).unwrap()),
        Box::new(Rotation::new(5, 3).unwrap()),
        Box::new(Rotation::new(4, -1).unwrap()),
        Box::new(Shift::new(5, 2).unwrap()),
        Box::new(Shift::new(5, -4).unwrap()),
        Box::new(Opaque(Rotation::new(3, 1).unwrap())),
    ]
}

#[test]
fn structural_sources_convert_to_every_kind() {
    for source in structural_sources() {
        for target in TARGETS {
            let out = convert_to(target, source.as_ref());
            assert_eq!(out.kind().name(), target);
            assert!(
                elementwise_eq(out.as_ref(), source.as_ref()).unwrap(),
                "{} -> {} changed elements",
                source.kind().name(),
                target
            );
        }
    }
}

#[test]
fn converted_matrix_is_independent() {
    let mut src = DenseBinary::new(2, 2).unwrap();
    src.set_at(1, 1, Poly::one()).unwrap();
    let mut copy = to_dense_binary(&src).unwrap();
    copy.set_at(2, 2, Poly::one()).unwrap();
    assert!(src.at(2, 2).unwrap().is_zero());

    let mut poly = to_sparse_poly(&src).unwrap();
    poly.set_at(1, 1, Poly::monomial(3)).unwrap();
    assert!(src.at(1, 1).unwrap().is_one());
}

#[test_case(to_sparse_binary_name ; "to sparse binary")]
#[test_case(to_dense_binary_name ; "to dense binary")]
fn binary_targets_reject_polynomials(convert: fn(&dyn Matrix) -> Result<&'static str, MatrixError>) {
    let src = fill(DensePoly::new(2, 2).unwrap(), &grid(&[&[1, 0], &[0, 0b101]]));
    assert!(matches!(convert(&src), Err(MatrixError::NonBinaryElement(_))));
    assert!(matches!(convert(&Opaque(src)), Err(MatrixError::NonBinaryElement(_))));
}

fn to_sparse_binary_name(m: &dyn Matrix) -> Result<&'static str, MatrixError> {
    to_sparse_binary(m).map(|_| "sparse-binary")
}

fn to_dense_binary_name(m: &dyn Matrix) -> Result<&'static str, MatrixError> {
    to_dense_binary(m).map(|_| "dense-binary")
}

#[test]
fn sparse_poly_conversion_drops_explicit_zeros() {
    let mut src = SparsePoly::new(2, 2).unwrap();
    src.add_at(1, 2, &Poly::one()).unwrap();
    src.add_at(1, 2, &Poly::one()).unwrap();
    src.add_at(2, 1, &Poly::monomial(4)).unwrap();
    assert_eq!(src.stored_len(), 2);

    let out = to_sparse_poly(&src).unwrap();
    assert_eq!(out.stored_len(), 1);
    assert_eq!(to_dense_poly(&src).unwrap().count_nonzero(), 1);
}

#[test]
fn resize_keeps_storage_kind_and_pads_with_zero() {
    let src = fill(
        SparsePoly::new(2, 2).unwrap(),
        &grid(&[&[0b11, 0], &[0, 0b100]]),
    );
    let big = resize(&src, 3, 4).unwrap();
    assert!(matches!(big, AnyMatrix::SparsePoly(_)));
    assert_eq!(big.at(1, 1).unwrap(), &Poly::from_u64(0b11));
    assert_eq!(big.at(2, 2).unwrap(), &Poly::from_u64(0b100));
    assert!(big.at(3, 4).unwrap().is_zero());

    let small = resize(&Opaque(src), 1, 1).unwrap();
    assert!(matches!(small, AnyMatrix::DensePoly(_)));
    assert_eq!(small.at(1, 1).unwrap(), &Poly::from_u64(0b11));
}

#[test]
fn resize_rejects_oversized_storage() {
    let src = DenseBinary::new(2, 2).unwrap();
    assert!(matches!(
        resize(&src, 1, gf2mat::MAX_DIMENSION + 1),
        Err(MatrixError::DimensionTooLarge { .. })
    ));
    assert!(resize(&Identity::new(2, 2).unwrap(), 1, gf2mat::MAX_DIMENSION + 1).is_ok());
}

proptest! {
    #[test]
    fn binary_values_survive_every_conversion(
        (rows, cols) in (1usize..6, 1usize..6),
        seed in any::<u64>(),
    ) {
        let values: Vec<Vec<u64>> = (0..rows)
            .map(|r| (0..cols).map(|c| (seed >> ((r * cols + c) % 64)) & 1).collect())
            .collect();
        for (name, source) in every_kind(&values) {
            let expected = snapshot(source.as_ref());
            for target in TARGETS {
                let out = convert_to(target, source.as_ref());
                prop_assert_eq!(snapshot(out.as_ref()), expected.clone(), "{} -> {}", name, target);
            }
        }
    }

    #[test]
    fn polynomial_values_survive_polynomial_conversion(values in poly_grid(3, 4)) {
        for (name, source) in every_kind(&values) {
            let expected = snapshot(source.as_ref());
            for target in ["sparse-poly", "dense-poly"] {
                let out = convert_to(target, source.as_ref());
                prop_assert_eq!(snapshot(out.as_ref()), expected.clone(), "{} -> {}", name, target);
            }
        }
    }

    #[test]
    fn round_trip_through_binary_is_lossless(values in bit_grid(4, 3)) {
        let src = fill(DensePoly::new(4, 3).unwrap(), &values);
        let back = to_dense_poly(&to_sparse_binary(&to_dense_binary(&src).unwrap()).unwrap()).unwrap();
        prop_assert_eq!(back, src);
    }
}
