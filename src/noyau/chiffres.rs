// src/noyau/chiffres.rs
//
// Alphabet douzénal : 0-9, T (dix), E (onze).

use super::erreurs::{ErreurDouze, ResultatDouze};

/// Symboles dans l'ordre des valeurs (indice = valeur).
pub const ALPHABET: [char; 12] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'E'];

pub const BASE: u32 = 12;

/// Symbole d'une valeur 0..=11. Hors bornes = bug de l'appelant.
pub fn symbole(valeur: u32) -> char {
    debug_assert!(valeur < BASE, "valeur hors alphabet: {valeur}");
    ALPHABET[valeur as usize]
}

/// Valeur d'un symbole (insensible à la casse).
pub fn valeur(c: char) -> ResultatDouze<u32> {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => Ok(d as u32 - '0' as u32),
        'T' => Ok(10),
        'E' => Ok(11),
        _ => Err(ErreurDouze::ChiffreInvalide(c)),
    }
}

/// Vrai si `c` appartient à l'alphabet (casse ignorée).
pub fn est_chiffre(c: char) -> bool {
    valeur(c).is_ok()
}
