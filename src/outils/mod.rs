//! Utilitaires numériques (hors noyau).
//!
//! Calculs en `f64`, volontairement simples : le noyau ne voit que le
//! résultat, formaté via `Valeur::Flottant`.

pub mod algebre;
pub mod complexe;
pub mod fourier;
pub mod statistiques;
pub mod trig;

use thiserror::Error;

pub use algebre::{polynome, regression_lineaire, valeurs_propres, Matrice2, Regression};
pub use fourier::fft_modules;
pub use statistiques::{statistiques, Statistiques};
pub use trig::{trigo, Trigo};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurOutil {
    #[error("aucune valeur")]
    Vide,

    #[error("x et y doivent avoir la même longueur ({0} contre {1})")]
    LongueursDifferentes(usize, usize),

    #[error("données dégénérées : {0}")]
    Degenere(&'static str),

    #[error("matrice non carrée : {0} lignes, une ligne de {1} colonnes")]
    NonCarree(usize, usize),

    #[error("matrice singulière (déterminant nul)")]
    MatriceSinguliere,
}

pub type ResultatOutil<T> = Result<T, ErreurOutil>;
