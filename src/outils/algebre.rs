// src/outils/algebre.rs
//
// Polynômes, régression linéaire, matrices 2×2.

use std::iter::successors;

use super::complexe::Complexe;
use super::{ErreurOutil, ResultatOutil};

/* ------------------------ Polynôme ------------------------ */

/// a0 + a1·x + a2·x² + ... (Horner). Coefficients vides => 0.
pub fn polynome(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, a| acc * x + a)
}

/* ------------------------ Régression linéaire ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regression {
    pub pente: f64,
    pub ordonnee: f64,
    pub r2: f64,
}

/// Moindres carrés y = pente·x + ordonnee.
pub fn regression_lineaire(xs: &[f64], ys: &[f64]) -> ResultatOutil<Regression> {
    if xs.len() != ys.len() {
        return Err(ErreurOutil::LongueursDifferentes(xs.len(), ys.len()));
    }
    if xs.len() < 2 {
        return Err(ErreurOutil::Degenere("au moins deux points"));
    }

    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;

    let sxx: f64 = xs.iter().map(|x| (x - mx).powi(2)).sum();
    let sxy: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    if sxx == 0.0 {
        return Err(ErreurOutil::Degenere("x constant"));
    }

    let pente = sxy / sxx;
    let ordonnee = my - pente * mx;

    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (pente * x + ordonnee)).powi(2))
        .sum();
    let ss_tot: f64 = ys.iter().map(|y| (y - my).powi(2)).sum();
    // y constant : r² conventionnellement nul
    let r2 = if ss_tot == 0.0 { 0.0 } else { 1.0 - ss_res / ss_tot };

    Ok(Regression { pente, ordonnee, r2 })
}

/* ------------------------ Matrice 2×2 ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrice2(pub [[f64; 2]; 2]);

impl Matrice2 {
    pub fn add(&self, b: &Matrice2) -> Matrice2 {
        let (a, b) = (&self.0, &b.0);
        Matrice2([
            [a[0][0] + b[0][0], a[0][1] + b[0][1]],
            [a[1][0] + b[1][0], a[1][1] + b[1][1]],
        ])
    }

    pub fn mul(&self, b: &Matrice2) -> Matrice2 {
        let (a, b) = (&self.0, &b.0);
        let c = |i: usize, j: usize| a[i][0] * b[0][j] + a[i][1] * b[1][j];
        Matrice2([[c(0, 0), c(0, 1)], [c(1, 0), c(1, 1)]])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    pub fn inverse(&self) -> ResultatOutil<Matrice2> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(ErreurOutil::MatriceSinguliere);
        }
        let m = &self.0;
        Ok(Matrice2([
            [m[1][1] / det, -m[0][1] / det],
            [-m[1][0] / det, m[0][0] / det],
        ]))
    }

    /// Parties réelles des deux valeurs propres (racines de λ² - tr·λ + det).
    pub fn valeurs_propres(&self) -> [f64; 2] {
        let m = &self.0;
        let demi_trace = (m[0][0] + m[1][1]) / 2.0;
        let disc = demi_trace * demi_trace - self.determinant();
        if disc >= 0.0 {
            let r = disc.sqrt();
            [demi_trace + r, demi_trace - r]
        } else {
            // paire complexe conjuguée
            [demi_trace, demi_trace]
        }
    }

    pub fn lignes(&self) -> impl Iterator<Item = &[f64; 2]> {
        self.0.iter()
    }
}

/* ------------------------ Valeurs propres n×n ------------------------ */

const DK_ITERATIONS: usize = 2000;

/// Parties réelles des valeurs propres d'une matrice carrée (lignes),
/// triées par ordre décroissant.
///
/// Triangulaire : la diagonale, exacte. Sinon racines du polynôme
/// caractéristique (Faddeev-LeVerrier) par Durand-Kerner.
pub fn valeurs_propres(m: &[Vec<f64>]) -> ResultatOutil<Vec<f64>> {
    let n = m.len();
    if n == 0 {
        return Err(ErreurOutil::Vide);
    }
    if let Some(ligne) = m.iter().find(|l| l.len() != n) {
        return Err(ErreurOutil::NonCarree(n, ligne.len()));
    }

    let mut vp: Vec<f64> = if est_triangulaire(m) {
        (0..n).map(|i| m[i][i]).collect()
    } else {
        durand_kerner(&polynome_caracteristique(m))
            .into_iter()
            .map(|z| z.re)
            .collect()
    };
    vp.sort_by(|a, b| b.total_cmp(a));
    Ok(vp)
}

fn est_triangulaire(m: &[Vec<f64>]) -> bool {
    let n = m.len();
    let sous_nulle = (0..n).all(|i| (0..i).all(|j| m[i][j] == 0.0));
    let sur_nulle = (0..n).all(|i| (i + 1..n).all(|j| m[i][j] == 0.0));
    sous_nulle || sur_nulle
}

fn produit(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = a.len();
    (0..n)
        .map(|i| (0..n).map(|j| (0..n).map(|k| a[i][k] * b[k][j]).sum::<f64>()).collect())
        .collect()
}

/// Coefficients c0..cn (cn = 1) de det(λI - A).
fn polynome_caracteristique(a: &[Vec<f64>]) -> Vec<f64> {
    let n = a.len();
    let mut c = vec![0.0; n + 1];
    c[n] = 1.0;

    // M_k = A·M_{k-1} + c_{n-k+1}·I ; c_{n-k} = -tr(A·M_k) / k
    let mut mk = vec![vec![0.0; n]; n];
    for k in 1..=n {
        let mut suivant = produit(a, &mk);
        for (i, ligne) in suivant.iter_mut().enumerate() {
            ligne[i] += c[n - k + 1];
        }
        let am = produit(a, &suivant);
        let trace: f64 = (0..n).map(|i| am[i][i]).sum();
        c[n - k] = -trace / k as f64;
        mk = suivant;
    }
    c
}

/// Toutes les racines (complexes) d'un polynôme unitaire, coefficients c0..cn.
fn durand_kerner(c: &[f64]) -> Vec<Complexe> {
    let n = c.len() - 1;
    let p = |z: Complexe| {
        c.iter()
            .rev()
            .fold(Complexe::ZERO, |acc, &a| acc * z + Complexe::from(a))
    };

    let graine = Complexe::new(0.4, 0.9);
    let mut z: Vec<Complexe> = successors(Some(Complexe::UN), |&w| Some(w * graine))
        .take(n)
        .collect();

    for _ in 0..DK_ITERATIONS {
        let mut ecart: f64 = 0.0;
        for i in 0..n {
            let denom = (0..n)
                .filter(|&j| j != i)
                .fold(Complexe::UN, |acc, j| acc * (z[i] - z[j]));
            let delta = p(z[i]) / denom;
            z[i] = z[i] - delta;
            ecart = ecart.max(delta.module());
        }
        if ecart < 1e-14 {
            break;
        }
    }
    z
}
