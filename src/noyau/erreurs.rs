//! Noyau: erreurs
//!
//! Toutes les erreurs sont locales à un appel (conversion ou calcul) :
//! rien n'est retenu entre deux appels, donc rien à nettoyer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurDouze {
    /// Caractère hors de l'alphabet 0-9, T, E là où un chiffre est attendu.
    #[error("chiffre douzénal invalide : {0:?}")]
    ChiffreInvalide(char),

    /// Littéral mal formé (plusieurs points, vide, signe seul...).
    #[error("format invalide : {0}")]
    FormatInvalide(String),

    /// Caractère inattendu dans une expression.
    #[error("caractère inattendu : {0:?}")]
    CaractereInvalide(char),

    /// Suite de jetons qui ne forme pas une expression.
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// NaN ou infini en entrée flottante.
    #[error("valeur non finie")]
    ValeurNonFinie,
}

pub type ResultatDouze<T> = Result<T, ErreurDouze>;
