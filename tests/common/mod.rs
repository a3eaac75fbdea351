#![allow(dead_code)]

use gf2mat::{
    to_dense_binary, to_dense_poly, to_sparse_binary, to_sparse_poly, ElementKind, Matrix,
    MatrixError, Poly,
};
use proptest::prelude::*;

/// Hides the concrete kind so only element access is available.
#[derive(Debug, Clone)]
pub struct Opaque<M>(pub M);

impl<M: Matrix> Matrix for Opaque<M> {
    fn size(&self) -> (usize, usize) {
        self.0.size()
    }

    fn element_kind(&self) -> ElementKind {
        self.0.element_kind()
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        self.0.at(row, col)
    }

    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError> {
        self.0.set_at(row, col, value)
    }

    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        self.0.add_at(row, col, value)
    }

    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        self.0.mul_at(row, col, value)
    }
}

/// Write row-major values into `m`.
pub fn fill<M: Matrix>(mut m: M, rows: &[Vec<u64>]) -> M {
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            m.set_at(r + 1, c + 1, Poly::from_u64(value))
                .expect("value fits matrix");
        }
    }
    m
}

/// Convert a literal grid of small integers into row vectors.
pub fn grid(rows: &[&[u64]]) -> Vec<Vec<u64>> {
    rows.iter().map(|row| row.to_vec()).collect()
}

/// The same values in every storage kind plus a kind-less wrapper.
pub fn every_kind(rows: &[Vec<u64>]) -> Vec<(&'static str, Box<dyn Matrix>)> {
    let (m, n) = (rows.len(), rows[0].len());
    let sp = fill(gf2mat::SparsePoly::new(m, n).unwrap(), rows);
    let dp = fill(gf2mat::DensePoly::new(m, n).unwrap(), rows);
    let mut out: Vec<(&'static str, Box<dyn Matrix>)> = vec![
        ("sparse-poly", Box::new(sp.clone())),
        ("dense-poly", Box::new(dp.clone())),
        ("opaque", Box::new(Opaque(dp))),
    ];
    if rows.iter().flatten().all(|&v| v <= 1) {
        out.push(("sparse-binary", Box::new(to_sparse_binary(&sp).unwrap())));
        out.push(("dense-binary", Box::new(to_dense_binary(&sp).unwrap())));
    }
    out
}

/// Read every element into a row-major grid.
pub fn snapshot<M: Matrix + ?Sized>(m: &M) -> Vec<Vec<Poly>> {
    let (rows, cols) = m.size();
    (1..=rows)
        .map(|r| (1..=cols).map(|c| m.at(r, c).unwrap().clone()).collect())
        .collect()
}

/// Schoolbook product over GF(2)[x] through element access.
pub fn reference_product<A, B>(a: &A, b: &B) -> Vec<Vec<Poly>>
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let (ar, ac) = a.size();
    let (_, bc) = b.size();
    (1..=ar)
        .map(|r| {
            (1..=bc)
                .map(|c| {
                    let mut sum = Poly::zero();
                    for i in 1..=ac {
                        sum += a.at(r, i).unwrap() * b.at(i, c).unwrap();
                    }
                    sum
                })
                .collect()
        })
        .collect()
}

/// Round-trip helpers keyed by target name.
pub fn convert_to(name: &str, m: &dyn Matrix) -> Box<dyn Matrix> {
    match name {
        "sparse-binary" => Box::new(to_sparse_binary(m).unwrap()),
        "dense-binary" => Box::new(to_dense_binary(m).unwrap()),
        "sparse-poly" => Box::new(to_sparse_poly(m).unwrap()),
        "dense-poly" => Box::new(to_dense_poly(m).unwrap()),
        other => panic!("unknown kind {}", other),
    }
}

/// Random 0/1 grid of the given shape.
pub fn bit_grid(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(prop::collection::vec(0u64..=1, cols), rows)
}

/// Random grid of polynomials of degree < 8.
pub fn poly_grid(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(
        prop::collection::vec(prop_oneof![3 => Just(0u64), 1 => 0u64..256], cols),
        rows,
    )
}
