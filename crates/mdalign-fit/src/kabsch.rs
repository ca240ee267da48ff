//! Kabsch algorithm for optimal rigid-body superposition
//!
//! Given two index-paired point sets, finds the rotation and translation
//! mapping source onto target with minimal RMSD. Internals run in f64; the
//! public interface is f32 to match the coordinate storage.

use lin_alg::f32::{Mat4, Vec3};

use crate::svd3::{det3, svd3};
use crate::FitError;

/// Result of a Kabsch superposition
#[derive(Debug, Clone)]
pub struct FitResult {
    /// 3x3 rotation stored in the upper-left of a row-major Mat4
    pub rotation: Mat4,
    /// Translation vector (applied after rotation)
    pub translation: Vec3,
    /// RMSD of the fitted pairs after superposition
    pub rmsd: f32,
    /// Number of point pairs used
    pub n_points: usize,
}

impl FitResult {
    /// The full homogeneous transform: rotation with the translation folded
    /// into the fourth column
    ///
    /// This is the matrix to apply to an entire frame when the fit was
    /// computed from a subset of its atoms.
    pub fn matrix(&self) -> Mat4 {
        let mut m = self.rotation.clone();
        m.data[3] = self.translation.x;
        m.data[7] = self.translation.y;
        m.data[11] = self.translation.z;
        m
    }
}

/// Compute the optimal superposition of `source` onto `target`.
///
/// Both slices must have the same length, at least 3. Points are paired by
/// index. Returns the transformation mapping source coordinates into the
/// target frame.
pub fn kabsch(source: &[[f32; 3]], target: &[[f32; 3]]) -> Result<FitResult, FitError> {
    let n = source.len();
    if n != target.len() {
        return Err(FitError::LengthMismatch(n, target.len()));
    }
    if n < 3 {
        return Err(FitError::TooFewPoints(n));
    }

    // Centroids
    let inv_n = 1.0 / n as f64;
    let mut src_c = [0.0f64; 3];
    let mut tgt_c = [0.0f64; 3];
    for i in 0..n {
        for k in 0..3 {
            src_c[k] += source[i][k] as f64;
            tgt_c[k] += target[i][k] as f64;
        }
    }
    for k in 0..3 {
        src_c[k] *= inv_n;
        tgt_c[k] *= inv_n;
    }

    // Cross-covariance H = sum p_i . q_i^T over the centered points
    let mut h = [[0.0f64; 3]; 3];
    let centered = |set: &[[f32; 3]], c: &[f64; 3], i: usize| {
        [
            set[i][0] as f64 - c[0],
            set[i][1] as f64 - c[1],
            set[i][2] as f64 - c[2],
        ]
    };
    for i in 0..n {
        let p = centered(source, &src_c, i);
        let q = centered(target, &tgt_c, i);
        for r in 0..3 {
            for c in 0..3 {
                h[r][c] += p[r] * q[c];
            }
        }
    }

    // R = V . diag(1, 1, d) . Ut, with d correcting improper rotations.
    // Without the sign term an SVD of a near-mirror configuration yields a
    // reflection (det = -1), which would invert chirality.
    let svd = svd3(&h);
    let d = if det3(&svd.u) * det3(&svd.v) < 0.0 {
        -1.0f64
    } else {
        1.0
    };
    let diag = [1.0, 1.0, d];

    let mut rot = [[0.0f64; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += svd.v[i][k] * diag[k] * svd.u[j][k];
            }
            rot[i][j] = sum;
        }
    }

    // t = target_centroid - R . source_centroid
    let rot_sc = [
        rot[0][0] * src_c[0] + rot[0][1] * src_c[1] + rot[0][2] * src_c[2],
        rot[1][0] * src_c[0] + rot[1][1] * src_c[1] + rot[1][2] * src_c[2],
        rot[2][0] * src_c[0] + rot[2][1] * src_c[1] + rot[2][2] * src_c[2],
    ];
    let translation = Vec3::new(
        (tgt_c[0] - rot_sc[0]) as f32,
        (tgt_c[1] - rot_sc[1]) as f32,
        (tgt_c[2] - rot_sc[2]) as f32,
    );

    // RMSD over the fitted pairs
    let mut sum_sq = 0.0f64;
    for i in 0..n {
        let p = centered(source, &src_c, i);
        let q = centered(target, &tgt_c, i);
        for r in 0..3 {
            let rp = rot[r][0] * p[0] + rot[r][1] * p[1] + rot[r][2] * p[2];
            let diff = rp - q[r];
            sum_sq += diff * diff;
        }
    }
    let rmsd = (sum_sq * inv_n).sqrt() as f32;

    let rotation = Mat4::new([
        rot[0][0] as f32,
        rot[0][1] as f32,
        rot[0][2] as f32,
        0.0,
        rot[1][0] as f32,
        rot[1][1] as f32,
        rot[1][2] as f32,
        0.0,
        rot[2][0] as f32,
        rot[2][1] as f32,
        rot[2][2] as f32,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]);

    Ok(FitResult {
        rotation,
        translation,
        rmsd,
        n_points: n,
    })
}

/// RMSD between two equal-length coordinate sets, without refitting
pub fn rmsd(coords_a: &[[f32; 3]], coords_b: &[[f32; 3]]) -> f32 {
    assert_eq!(coords_a.len(), coords_b.len());
    let n = coords_a.len();
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = coords_a
        .iter()
        .zip(coords_b.iter())
        .map(|(a, b)| {
            let dx = (a[0] - b[0]) as f64;
            let dy = (a[1] - b[1]) as f64;
            let dz = (a[2] - b[2]) as f64;
            dx * dx + dy * dy + dz * dz
        })
        .sum();
    (sum / n as f64).sqrt() as f32
}
