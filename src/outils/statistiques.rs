// src/outils/statistiques.rs

use super::{ErreurOutil, ResultatOutil};

#[derive(Clone, Debug, PartialEq)]
pub struct Statistiques {
    pub n: usize,
    pub somme: f64,
    pub moyenne: f64,
    pub mediane: f64,
    /// Écart-type de population (diviseur n).
    pub ecart_type: f64,
    pub min: f64,
    pub max: f64,
}

pub fn statistiques(valeurs: &[f64]) -> ResultatOutil<Statistiques> {
    if valeurs.is_empty() {
        return Err(ErreurOutil::Vide);
    }

    let n = valeurs.len();
    let somme: f64 = valeurs.iter().sum();
    let moyenne = somme / n as f64;

    let variance = valeurs.iter().map(|v| (v - moyenne).powi(2)).sum::<f64>() / n as f64;

    let mut tri = valeurs.to_vec();
    tri.sort_by(f64::total_cmp);
    let mediane = if n % 2 == 1 {
        tri[n / 2]
    } else {
        (tri[n / 2 - 1] + tri[n / 2]) / 2.0
    };

    Ok(Statistiques {
        n,
        somme,
        moyenne,
        mediane,
        ecart_type: variance.sqrt(),
        min: tri[0],
        max: tri[n - 1],
    })
}
