// src/noyau/entier.rs
//
// Entiers naturels <-> chiffres douzénaux (sans signe : le signe est géré
// par conversion.rs).

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::chiffres::{symbole, valeur, BASE};
use super::erreurs::{ErreurDouze, ResultatDouze};

/// n -> chiffres base 12. Zéro donne "0".
pub fn vers_base12(n: &BigUint) -> String {
    if n.is_zero() {
        return "0".to_string();
    }

    // restes du poids faible au poids fort, puis inversion
    let mut reste = n.clone();
    let mut chiffres: Vec<char> = Vec::new();
    while !reste.is_zero() {
        // reste % 12 < 12 : toujours un chiffre de l'alphabet
        let r = (&reste % BASE).to_u32();
        debug_assert!(matches!(r, Some(d) if d < BASE), "reste hors base : {r:?}");
        chiffres.push(symbole(r.unwrap_or(0)));
        reste /= BASE;
    }
    chiffres.iter().rev().collect()
}

/// Chiffres base 12 -> n (Horner, gauche à droite).
pub fn depuis_base12(s: &str) -> ResultatDouze<BigUint> {
    if s.is_empty() {
        return Err(ErreurDouze::FormatInvalide("aucun chiffre".into()));
    }

    let mut total = BigUint::zero();
    for c in s.chars() {
        total = total * BASE + valeur(c)?;
    }
    Ok(total)
}
