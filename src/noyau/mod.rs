//! Noyau exact douzénal
//!
//! Organisation interne :
//! - chiffres.rs   : alphabet 0-9, T, E
//! - entier.rs     : entiers naturels <-> base 12
//! - fraction.rs   : partie fractionnaire <-> base 12 (troncature)
//! - conversion.rs : API décimal <-> douzénal (signe, normalisation)
//! - lecture.rs    : texte décimal (lecture exacte, affichage tronqué)
//! - jetons.rs     : tokenisation (littéraux douzénaux, signes unaires)
//! - rpn.rs        : shunting-yard + évaluation RPN
//! - eval.rs       : pipeline complet
//! - erreurs.rs    : erreurs typées

pub mod chiffres;
pub mod conversion;
pub mod entier;
pub mod erreurs;
pub mod eval;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use conversion::{decimal_vers_douzenal, douzenal_vers_decimal, Valeur, PRECISION_DEFAUT};
pub use erreurs::{ErreurDouze, ResultatDouze};
pub use eval::{calculer, ResultatCalcul};
pub use lecture::{chiffres_travail, decimal_texte, lire_decimal};
