// src/noyau/lecture.rs
//
// Texte décimal <-> valeurs exactes.
// - lecture d'un nombre décimal saisi (CLI / REPL), sans passer par f64
// - affichage décimal d'un rationnel : exact s'il se termine, sinon tronqué

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::conversion::Valeur;
use super::erreurs::{ErreurDouze, ResultatDouze};

/// Chiffres décimaux de travail pour une précision douzénale donnée.
pub fn chiffres_travail(precision: usize) -> usize {
    precision.saturating_mul(3).max(28)
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    // zéros finaux inutiles
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}

/// Nombre de décimales d'un développement fini, ou None s'il est infini
/// (dénominateur avec un facteur autre que 2 ou 5).
fn decimales_finies(denom: &BigInt) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut d = denom.clone();
    let (mut e2, mut e5) = (0usize, 0usize);
    while (&d % &deux).is_zero() {
        d /= &deux;
        e2 += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        e5 += 1;
    }
    d.is_one().then_some(e2.max(e5))
}

/// Texte décimal de `r`.
///
/// Exact si le développement se termine ; sinon tronqué (vers zéro) à
/// `digits` décimales. Pas de zéros finaux, pas de point pour un entier.
pub fn decimal_texte(r: &BigRational, digits: usize) -> String {
    let n = decimales_finies(r.denom()).unwrap_or(digits);
    // division BigInt : troncature vers zéro
    let scaled = (r.numer() * pow10(n)) / r.denom();
    scaled_to_decimal(scaled, n)
}

/* ------------------------ Lecture (texte -> Valeur) ------------------------ */

/// Lit un nombre décimal : signe optionnel, chiffres, `.` optionnel,
/// exposant `e`/`E` optionnel.
///
/// Sans point ni exposant => `Valeur::Entier`, sinon `Valeur::Exact`.
pub fn lire_decimal(texte: &str) -> ResultatDouze<Valeur> {
    let s = texte.trim();
    let invalide = || ErreurDouze::FormatInvalide(format!("nombre décimal invalide : {texte:?}"));

    if s.is_empty() {
        return Err(invalide());
    }

    let (mantisse, exposant) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => {
            let e: i64 = s[i + 1..].parse().map_err(|_| invalide())?;
            (&s[..i], Some(e))
        }
        None => (s, None),
    };

    let (negatif, corps) = match mantisse.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, mantisse.strip_prefix('+').unwrap_or(mantisse)),
    };

    let (entiers, decimales) = match corps.split_once('.') {
        Some((a, b)) => (a, Some(b)),
        None => (corps, None),
    };

    let tous_chiffres = |t: &str| t.chars().all(|c| c.is_ascii_digit());
    let frac = decimales.unwrap_or("");
    if (entiers.is_empty() && frac.is_empty()) || !tous_chiffres(entiers) || !tous_chiffres(frac) {
        return Err(invalide());
    }

    let chiffres = format!("{entiers}{frac}");
    let mut n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    if negatif {
        n = -n;
    }

    if decimales.is_none() && exposant.is_none() {
        return Ok(Valeur::Entier(n));
    }

    // n × 10^(exposant - nb décimales)
    let puissance = exposant.unwrap_or(0) - frac.len() as i64;
    let ordre = puissance
        .unsigned_abs()
        .to_u32()
        .filter(|p| *p <= 10_000)
        .ok_or_else(invalide)?;
    let facteur = BigInt::from(10).pow(ordre);

    let r = if puissance >= 0 {
        BigRational::from_integer(n * facteur)
    } else {
        BigRational::new(n, facteur)
    };
    Ok(Valeur::Exact(r))
}
