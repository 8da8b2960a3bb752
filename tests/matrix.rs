use dynla::{Error, Matrix, Vector, MAX_MATRIX_SIZE};

fn mat(rows: &[&[i32]]) -> Matrix<i32> {
    let rows = rows
        .iter()
        .map(|r| Vector::from_slice(r).unwrap())
        .collect::<Vec<_>>();
    Matrix::try_from(Vector::from_vec(rows).unwrap()).unwrap()
}

// ── Construction ─────────────────────────────────────────────────────

#[test]
fn can_create_matrix_with_positive_dimension() {
    let m = Matrix::<i32>::new(5).unwrap();
    assert_eq!(m.dim(), 5);
    assert!(m.iter_rows().all(|row| row.len() == 5));
}

#[test]
fn cant_create_too_large_matrix() {
    assert!(matches!(
        Matrix::<i32>::new(MAX_MATRIX_SIZE + 1),
        Err(Error::InvalidSize { .. })
    ));
}

#[test]
fn cant_create_empty_matrix() {
    assert_eq!(
        Matrix::<i32>::new(0),
        Err(Error::InvalidSize {
            requested: 0,
            max: MAX_MATRIX_SIZE
        })
    );
}

#[test]
fn nested_value_with_too_many_rows_is_rejected() {
    let rows = Vector::from_fn(MAX_MATRIX_SIZE + 1, |_| Vector::<u8>::default()).unwrap();
    assert!(matches!(
        Matrix::try_from(rows),
        Err(Error::InvalidSize { .. })
    ));
}

#[test]
fn copied_matrix_has_its_own_memory() {
    let m = mat(&[&[1, 2], &[3, 4]]);
    let mut copy = m.clone();
    copy[1][1] = 0;
    assert_eq!(m[1][1], 4);
}

// ── Access ───────────────────────────────────────────────────────────

#[test]
fn chained_and_checked_access_agree() {
    let m = mat(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(*m.at(i, j).unwrap(), m[i][j]);
            assert_eq!(m[(i, j)], m[i][j]);
        }
    }
}

#[test]
fn at_fails_outside_dimension() {
    let m = Matrix::<i32>::new(2).unwrap();
    assert_eq!(m.at(2, 0), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(m.at(0, 2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
}

// ── Comparison ───────────────────────────────────────────────────────

#[test]
fn equality_is_rowwise() {
    let a = mat(&[&[1, 2], &[3, 4]]);
    assert_eq!(a, mat(&[&[1, 2], &[3, 4]]));
    assert_ne!(a, mat(&[&[1, 2], &[4, 3]]));
    assert_ne!(Matrix::<i32>::new(2).unwrap(), Matrix::<i32>::new(3).unwrap());
}

// ── Arithmetic ───────────────────────────────────────────────────────

#[test]
fn matrix_product() {
    let a = mat(&[&[1, 2], &[3, 4]]);
    let b = mat(&[&[5, 6], &[7, 8]]);
    assert_eq!((a * b).unwrap(), mat(&[&[19, 22], &[43, 50]]));
}

#[test]
fn matrix_product_with_mismatched_dimension_fails() {
    let a = Matrix::<i32>::identity(2).unwrap();
    let b = Matrix::<i32>::identity(3).unwrap();
    assert!(matches!(&a * &b, Err(Error::SizeMismatch { .. })));
}

#[test]
fn matrix_vector_product() {
    let a = mat(&[&[1, 2], &[3, 4]]);
    let v = Vector::from_slice(&[5, 6]).unwrap();
    assert_eq!((&a * &v).unwrap().as_slice(), &[17, 39]);
}

#[test]
fn matrix_vector_with_mismatched_length_fails() {
    let a = Matrix::<i32>::identity(3).unwrap();
    let v = Vector::from_slice(&[1, 2]).unwrap();
    assert_eq!(
        a * v,
        Err(Error::SizeMismatch {
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn sum_and_difference() {
    let a = mat(&[&[1, 2], &[3, 4]]);
    let b = mat(&[&[4, 3], &[2, 1]]);
    assert_eq!((&a + &b).unwrap(), mat(&[&[5, 5], &[5, 5]]));
    assert_eq!((&a - &b).unwrap(), mat(&[&[-3, -1], &[1, 3]]));
}

#[test]
fn scaling() {
    let a = mat(&[&[1, 2], &[3, 4]]);
    assert_eq!(a * 2, mat(&[&[2, 4], &[6, 8]]));
}

// ── I/O ──────────────────────────────────────────────────────────────

#[test]
fn prints_one_row_per_line() {
    assert_eq!(mat(&[&[1, 2], &[3, 4]]).to_string(), "1 2\n3 4\n");
}

#[test]
fn reads_row_major() {
    let mut m = Matrix::<i32>::new(2).unwrap();
    m.read_str("1 2\n3 4\n").unwrap();
    assert_eq!(m, mat(&[&[1, 2], &[3, 4]]));
}
