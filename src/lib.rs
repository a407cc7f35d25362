//! Calculatrice douzénale
//!
//! - `noyau`  : conversions exactes décimal <-> base 12 et calculatrice
//!   d'expressions douzénales (rationnels exacts, aucun état global)
//! - `outils` : utilitaires numériques en `f64` (statistiques, trigo,
//!   polynômes, régression, matrices 2×2) dont les résultats passent par
//!   `decimal_vers_douzenal`

pub mod noyau;
pub mod outils;

pub use noyau::{
    calculer, decimal_vers_douzenal, douzenal_vers_decimal, ErreurDouze, ResultatCalcul, Valeur,
    PRECISION_DEFAUT,
};
