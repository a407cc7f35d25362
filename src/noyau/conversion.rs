//! Noyau: conversion décimal <-> douzénal
//!
//! Entrée hétérogène (entier, flottant, rationnel exact) ramenée UNE fois à
//! un `BigRational` par [`Valeur::normaliser`], puis découpée en
//! signe / partie entière / reste fractionnaire.
//!
//! La précision est toujours un paramètre explicite : aucun contexte global.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use tracing::trace;

use super::entier::{depuis_base12, vers_base12};
use super::erreurs::{ErreurDouze, ResultatDouze};
use super::fraction::{base12_vers_fraction, fraction_vers_base12};

/// Chiffres douzénaux après le point, par défaut.
pub const PRECISION_DEFAUT: usize = 6;

/// Dénominateur max de l'approximation rationnelle d'un flottant.
const DENOM_MAX_FLOTTANT: u64 = 1_000_000_000;

/// Entrée numérique, étiquetée selon sa nature.
#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Entier(BigInt),
    /// Approximation binaire : passe par la meilleure fraction de dénominateur ≤ 10^9.
    Flottant(f64),
    Exact(BigRational),
}

impl Valeur {
    /// Forme canonique exacte.
    pub fn normaliser(self) -> ResultatDouze<BigRational> {
        match self {
            Valeur::Entier(n) => Ok(BigRational::from_integer(n)),
            Valeur::Exact(r) => Ok(r),
            Valeur::Flottant(x) => {
                let brut = BigRational::from_float(x).ok_or(ErreurDouze::ValeurNonFinie)?;
                Ok(limiter_denominateur(&brut, &BigInt::from(DENOM_MAX_FLOTTANT)))
            }
        }
    }
}

impl From<i32> for Valeur {
    fn from(n: i32) -> Self {
        Valeur::Entier(BigInt::from(n))
    }
}

impl From<i64> for Valeur {
    fn from(n: i64) -> Self {
        Valeur::Entier(BigInt::from(n))
    }
}

impl From<u64> for Valeur {
    fn from(n: u64) -> Self {
        Valeur::Entier(BigInt::from(n))
    }
}

impl From<BigInt> for Valeur {
    fn from(n: BigInt) -> Self {
        Valeur::Entier(n)
    }
}

impl From<f64> for Valeur {
    fn from(x: f64) -> Self {
        Valeur::Flottant(x)
    }
}

impl From<BigRational> for Valeur {
    fn from(r: BigRational) -> Self {
        Valeur::Exact(r)
    }
}

/// Meilleure approximation rationnelle de `r` avec dénominateur ≤ `max`
/// (fractions continues, puis choix entre les deux bornes candidates).
pub fn limiter_denominateur(r: &BigRational, max: &BigInt) -> BigRational {
    if r.denom() <= max {
        return r.clone();
    }

    let negatif = r.is_negative();
    let abs = r.abs();

    let (mut p0, mut q0, mut p1, mut q1) =
        (BigInt::zero(), BigInt::one(), BigInt::one(), BigInt::zero());
    let mut n = abs.numer().clone();
    let mut d = abs.denom().clone();

    loop {
        let a = &n / &d;
        let q2 = &q0 + &a * &q1;
        if &q2 > max {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = std::mem::replace(&mut d, r);
    }

    let k = (max - &q0) / &q1;
    let convergente = BigRational::new(p1.clone(), q1.clone());
    let semi = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);

    // la plus proche ; la convergente en cas d'égalité
    let choisie = if (&convergente - &abs).abs() <= (&semi - &abs).abs() {
        convergente
    } else {
        semi
    };

    if negatif {
        -choisie
    } else {
        choisie
    }
}

/// Décimal -> texte douzénal, partie fractionnaire tronquée à `precision`.
///
/// Une valeur entière n'émet jamais de point. Le signe suit la valeur :
/// -1/2 à précision 0 donne "-0".
pub fn decimal_vers_douzenal(valeur: impl Into<Valeur>, precision: usize) -> ResultatDouze<String> {
    let r = valeur.into().normaliser()?;
    Ok(formater_rationnel(&r, precision))
}

/// Formate une valeur déjà exacte (utilisé aussi par l'évaluateur).
pub fn formater_rationnel(r: &BigRational, precision: usize) -> String {
    let abs = r.abs();
    let partie_entiere = abs.floor();
    let reste = &abs - &partie_entiere;

    let entiers = vers_base12(partie_entiere.to_integer().magnitude());
    let fraction = fraction_vers_base12(&reste, precision);
    trace!(valeur = %r, %entiers, %fraction, "formatage douzénal");

    // signe de la valeur, même si les chiffres tronqués sont tous nuls
    let signe = if r.is_negative() { "-" } else { "" };

    if fraction.is_empty() {
        format!("{signe}{entiers}")
    } else {
        format!("{signe}{entiers}.{fraction}")
    }
}

/// Texte douzénal -> valeur exacte.
///
/// Accepte espaces autour, minuscules, signe initial (+ ou -), un seul point.
pub fn douzenal_vers_decimal(texte: &str) -> ResultatDouze<BigRational> {
    let s = texte.trim().to_ascii_uppercase();

    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s.strip_prefix('+').unwrap_or(s.as_str())),
    };

    let mut moities = corps.split('.');
    let entiers = moities.next().unwrap_or("");
    let fraction = moities.next();
    if moities.next().is_some() {
        return Err(ErreurDouze::FormatInvalide(format!(
            "plus d'un point dans {texte:?}"
        )));
    }

    if entiers.is_empty() && fraction.map_or(true, str::is_empty) {
        return Err(ErreurDouze::FormatInvalide(format!(
            "aucun chiffre dans {texte:?}"
        )));
    }

    let n = if entiers.is_empty() {
        BigUint::zero()
    } else {
        depuis_base12(entiers)?
    };
    let f = match fraction {
        Some(chiffres) => base12_vers_fraction(chiffres)?,
        None => BigRational::zero(),
    };

    let total = BigRational::from_integer(BigInt::from(n)) + f;
    Ok(if negatif { -total } else { total })
}
