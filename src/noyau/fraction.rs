// src/noyau/fraction.rs
//
// Partie fractionnaire <-> chiffres douzénaux après le point.
//
// Tout est fait en rationnels exacts : multiplier par 12 n'accumule aucune
// erreur, et la lecture d'une chaîne de chiffres redonne exactement sa
// valeur (aucun passage par f64).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::chiffres::{symbole, valeur, BASE};
use super::erreurs::ResultatDouze;

/// Développement base 12 de `frac` ∈ [0, 1), TRONQUÉ à `precision` chiffres.
///
/// Arrêt anticipé dès que le reste devient exactement nul : pas de zéros
/// finaux. Jamais d'arrondi (pas de retenue vers la partie entière).
pub fn fraction_vers_base12(frac: &BigRational, precision: usize) -> String {
    debug_assert!(!frac.is_negative() && frac < &BigRational::one());

    let douze = BigRational::from_integer(BigInt::from(BASE));
    let mut reste = frac.clone();
    let mut out = String::with_capacity(precision);

    for _ in 0..precision {
        if reste.is_zero() {
            break;
        }
        reste *= &douze;
        let chiffre = reste.to_integer();
        // 0 <= chiffre < 12 puisque reste < 1 avant multiplication
        let c = chiffre.to_u32();
        debug_assert!(matches!(c, Some(d) if d < BASE), "chiffre hors base : {chiffre}");
        out.push(symbole(c.unwrap_or(0)));
        reste -= BigRational::from_integer(chiffre);
    }

    out
}

/// Chiffres après le point -> valeur exacte dans [0, 1).
///
/// Σ chiffre_i / 12^(i+1), accumulé sous forme entière (numérateur sur 12^k)
/// puis réduit une seule fois.
pub fn base12_vers_fraction(s: &str) -> ResultatDouze<BigRational> {
    let mut numer = BigInt::zero();
    let mut denom = BigInt::one();

    for c in s.chars() {
        numer = numer * BASE + valeur(c)?;
        denom *= BASE;
    }

    Ok(BigRational::new(numer, denom))
}
