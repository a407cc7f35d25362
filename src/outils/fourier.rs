// src/outils/fourier.rs
//
// Transformée de Fourier discrète : modules |X_k| (convention X_k = Σ x_n e^{-2iπkn/N}).

use std::f64::consts::PI;

use super::complexe::Complexe;
use super::{ErreurOutil, ResultatOutil};

/// Modules de la transformée de `valeurs`, même longueur que l'entrée.
///
/// Cooley-Tukey itératif si la longueur est une puissance de 2, sinon
/// somme directe en O(n²).
pub fn fft_modules(valeurs: &[f64]) -> ResultatOutil<Vec<f64>> {
    if valeurs.is_empty() {
        return Err(ErreurOutil::Vide);
    }

    let x: Vec<Complexe> = valeurs.iter().copied().map(Complexe::from).collect();
    let spectre = if x.len().is_power_of_two() {
        cooley_tukey(x)
    } else {
        directe(&x)
    };
    Ok(spectre.into_iter().map(Complexe::module).collect())
}

fn directe(x: &[Complexe]) -> Vec<Complexe> {
    let n = x.len();
    (0..n)
        .map(|k| {
            x.iter().enumerate().fold(Complexe::ZERO, |acc, (j, &v)| {
                // (k·j) mod n garde l'angle petit
                let angle = -2.0 * PI * ((k * j) % n) as f64 / n as f64;
                acc + v * Complexe::polaire(angle)
            })
        })
        .collect()
}

fn cooley_tukey(mut a: Vec<Complexe>) -> Vec<Complexe> {
    let n = a.len();

    // permutation bit-reverse
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            a.swap(i, j);
        }
    }

    let mut longueur = 2;
    while longueur <= n {
        let w = Complexe::polaire(-2.0 * PI / longueur as f64);
        for debut in (0..n).step_by(longueur) {
            let mut wk = Complexe::UN;
            for k in 0..longueur / 2 {
                let u = a[debut + k];
                let v = a[debut + k + longueur / 2] * wk;
                a[debut + k] = u + v;
                a[debut + k + longueur / 2] = u - v;
                wk = wk * w;
            }
        }
        longueur <<= 1;
    }
    a
}
