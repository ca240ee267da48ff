//! Analytical 3x3 singular value decomposition
//!
//! Computes A = U . diag(S) . Vt via the Jacobi eigenvalue algorithm on
//! At.A. All matrices are row-major `[[f64; 3]; 3]`; singular vectors are
//! the *columns* of U and V.

/// Result of a 3x3 SVD: A = U . diag(S) . Vt
#[derive(Debug, Clone)]
pub(crate) struct Svd3 {
    /// Left singular vectors as columns (row-major matrix)
    pub u: [[f64; 3]; 3],
    /// Singular values, sorted descending, non-negative
    pub s: [f64; 3],
    /// Right singular vectors as columns (row-major matrix, i.e. V not Vt)
    pub v: [[f64; 3]; 3],
}

/// Determinant of a row-major 3x3 matrix
pub(crate) fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Compute the SVD of a row-major 3x3 matrix
pub(crate) fn svd3(a: &[[f64; 3]; 3]) -> Svd3 {
    // At.A is symmetric positive semi-definite; its eigenvectors are V and
    // its eigenvalues the squared singular values.
    let mut ata = [[0.0f64; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            ata[i][j] = a[0][i] * a[0][j] + a[1][i] * a[1][j] + a[2][i] * a[2][j];
        }
    }

    let (eig, mut v) = jacobi_eigen(&ata);

    // Sort eigenpairs descending; eigenvectors are the columns of v
    let mut order = [0usize, 1, 2];
    if eig[order[0]] < eig[order[1]] {
        order.swap(0, 1);
    }
    if eig[order[0]] < eig[order[2]] {
        order.swap(0, 2);
    }
    if eig[order[1]] < eig[order[2]] {
        order.swap(1, 2);
    }
    let sorted = v;
    for row in 0..3 {
        v[row] = [
            sorted[row][order[0]],
            sorted[row][order[1]],
            sorted[row][order[2]],
        ];
    }
    let s = [
        eig[order[0]].max(0.0).sqrt(),
        eig[order[1]].max(0.0).sqrt(),
        eig[order[2]].max(0.0).sqrt(),
    ];

    // Keep V right-handed
    if det3(&v) < 0.0 {
        for row in &mut v {
            row[2] = -row[2];
        }
    }

    // Columns of U: u_j = A . v_j / s_j
    let mut u = [[0.0f64; 3]; 3];
    for j in 0..3 {
        if s[j] > 1e-10 {
            let inv = 1.0 / s[j];
            for i in 0..3 {
                u[i][j] = (a[i][0] * v[0][j] + a[i][1] * v[1][j] + a[i][2] * v[2][j]) * inv;
            }
        }
    }

    // Rank-deficient input: complete U to an orthonormal basis. The flip
    // sign of the completed columns is a convention; the associated singular
    // values are zero, so the reconstruction is unaffected.
    if s[0] > 1e-10 && s[1] > 1e-10 && s[2] <= 1e-10 {
        let c = cross(col(&u, 0), col(&u, 1));
        set_col(&mut u, 2, c);
        normalize_col(&mut u, 2);
    } else if s[0] > 1e-10 && s[1] <= 1e-10 {
        let p = perpendicular(col(&u, 0));
        set_col(&mut u, 1, p);
        let c = cross(col(&u, 0), col(&u, 1));
        set_col(&mut u, 2, c);
        normalize_col(&mut u, 2);
    } else if s[0] <= 1e-10 {
        u = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    }

    // No handedness fixup on U here: u_j is derived from v_j, so the
    // reconstruction A = U.S.Vt holds and det(U) carries the sign of
    // det(A). The caller decides how to handle improper configurations.
    Svd3 { u, s, v }
}

fn col(m: &[[f64; 3]; 3], j: usize) -> [f64; 3] {
    [m[0][j], m[1][j], m[2][j]]
}

fn set_col(m: &mut [[f64; 3]; 3], j: usize, v: [f64; 3]) {
    m[0][j] = v[0];
    m[1][j] = v[1];
    m[2][j] = v[2];
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize_col(m: &mut [[f64; 3]; 3], j: usize) {
    let c = col(m, j);
    let len = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
    if len > 1e-15 {
        set_col(m, j, [c[0] / len, c[1] / len, c[2] / len]);
    }
}

/// Any unit vector perpendicular to v
fn perpendicular(v: [f64; 3]) -> [f64; 3] {
    let axis = if v[0].abs() <= v[1].abs() && v[0].abs() <= v[2].abs() {
        [1.0, 0.0, 0.0]
    } else if v[1].abs() <= v[2].abs() {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, 0.0, 1.0]
    };
    let mut p = cross(v, axis);
    let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
    if len > 1e-15 {
        p = [p[0] / len, p[1] / len, p[2] / len];
    }
    p
}

/// Cyclic Jacobi eigendecomposition of a symmetric 3x3 matrix
///
/// Returns eigenvalues and a row-major matrix whose columns are the
/// corresponding eigenvectors.
fn jacobi_eigen(m: &[[f64; 3]; 3]) -> ([f64; 3], [[f64; 3]; 3]) {
    let mut a = *m;
    let mut v = [[1.0f64, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    for _ in 0..50 {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        if off < 1e-30 {
            break;
        }
        for &(p, q) in &[(0usize, 1usize), (0, 2), (1, 2)] {
            if a[p][q].abs() >= 1e-15 {
                rotate(&mut a, &mut v, p, q);
            }
        }
    }

    ([a[0][0], a[1][1], a[2][2]], v)
}

/// One Givens rotation zeroing a[p][q], accumulated into v
fn rotate(a: &mut [[f64; 3]; 3], v: &mut [[f64; 3]; 3], p: usize, q: usize) {
    let app = a[p][p];
    let aqq = a[q][q];
    let apq = a[p][q];

    let (c, s) = if (app - aqq).abs() < 1e-15 {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        (h, if apq > 0.0 { h } else { -h })
    } else {
        let tau = (aqq - app) / (2.0 * apq);
        let t = if tau >= 0.0 {
            1.0 / (tau + (1.0 + tau * tau).sqrt())
        } else {
            -1.0 / (-tau + (1.0 + tau * tau).sqrt())
        };
        let c = 1.0 / (1.0 + t * t).sqrt();
        (c, t * c)
    };

    a[p][p] = c * c * app - 2.0 * s * c * apq + s * s * aqq;
    a[q][q] = s * s * app + 2.0 * s * c * apq + c * c * aqq;
    a[p][q] = 0.0;
    a[q][p] = 0.0;

    let r = 3 - p - q;
    let arp = a[r][p];
    let arq = a[r][q];
    a[r][p] = c * arp - s * arq;
    a[p][r] = a[r][p];
    a[r][q] = s * arp + c * arq;
    a[q][r] = a[r][q];

    for row in v.iter_mut() {
        let vp = row[p];
        let vq = row[q];
        row[p] = c * vp - s * vq;
        row[q] = s * vp + c * vq;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat_mul(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
        let mut c = [[0.0f64; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    c[i][j] += a[i][k] * b[k][j];
                }
            }
        }
        c
    }

    fn transpose(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
        let mut t = [[0.0f64; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                t[i][j] = m[j][i];
            }
        }
        t
    }

    fn assert_orthogonal(m: &[[f64; 3]; 3], label: &str) {
        let prod = mat_mul(&transpose(m), m);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (prod[i][j] - expected).abs() < 1e-8,
                    "{label} not orthogonal: ({i},{j}) = {}",
                    prod[i][j]
                );
            }
        }
    }

    fn assert_reconstructs(a: &[[f64; 3]; 3], svd: &Svd3, tol: f64) {
        let diag = [
            [svd.s[0], 0.0, 0.0],
            [0.0, svd.s[1], 0.0],
            [0.0, 0.0, svd.s[2]],
        ];
        let usv = mat_mul(&mat_mul(&svd.u, &diag), &transpose(&svd.v));
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a[i][j] - usv[i][j]).abs() < tol,
                    "reconstruction ({i},{j}): {} vs {}",
                    a[i][j],
                    usv[i][j]
                );
            }
        }
    }

    #[test]
    fn test_identity() {
        let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let svd = svd3(&m);
        for &s in &svd.s {
            assert!((s - 1.0).abs() < 1e-10);
        }
        assert_orthogonal(&svd.u, "U");
        assert_orthogonal(&svd.v, "V");
        assert_reconstructs(&m, &svd, 1e-9);
    }

    #[test]
    fn test_diagonal_scaling() {
        let m = [[3.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
        let svd = svd3(&m);
        assert!((svd.s[0] - 3.0).abs() < 1e-8);
        assert!((svd.s[1] - 2.0).abs() < 1e-8);
        assert!((svd.s[2] - 1.0).abs() < 1e-8);
        assert_reconstructs(&m, &svd, 1e-8);
    }

    #[test]
    fn test_general() {
        let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let svd = svd3(&m);
        assert!(svd.s[0] >= svd.s[1] && svd.s[1] >= svd.s[2]);
        assert_orthogonal(&svd.u, "U");
        assert_orthogonal(&svd.v, "V");
        assert_reconstructs(&m, &svd, 1e-7);
    }

    #[test]
    fn test_rank_deficient() {
        let m = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 0.0]];
        let svd = svd3(&m);
        assert!(svd.s[0] > 1e-6);
        assert!(svd.s[2] < 1e-6);
        assert_orthogonal(&svd.u, "U");
        assert_reconstructs(&m, &svd, 1e-7);
    }

    #[test]
    fn test_zero() {
        let m = [[0.0; 3]; 3];
        let svd = svd3(&m);
        for &s in &svd.s {
            assert!(s.abs() < 1e-12);
        }
        assert_orthogonal(&svd.u, "U");
    }
}
