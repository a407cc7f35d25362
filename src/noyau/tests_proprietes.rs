//! Propriétés (proptest) : allers-retours et troncature.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

use super::chiffres::{symbole, valeur};
use super::entier::{depuis_base12, vers_base12};
use super::{calculer, decimal_vers_douzenal, douzenal_vers_decimal};

fn chiffre_douzenal() -> impl Strategy<Value = char> {
    (0u32..12).prop_map(symbole)
}

proptest! {
    #[test]
    fn entiers_naturels_aller_retour(n in any::<u64>()) {
        let b = BigUint::from(n);
        prop_assert_eq!(depuis_base12(&vers_base12(&b)), Ok(b));
    }

    #[test]
    fn grands_entiers_aller_retour(octets in proptest::collection::vec(any::<u8>(), 1..48)) {
        let b = BigUint::from_bytes_le(&octets);
        prop_assert_eq!(depuis_base12(&vers_base12(&b)), Ok(b));
    }

    #[test]
    fn entiers_signes_aller_retour(n in any::<i64>(), precision in 0usize..20) {
        let texte = decimal_vers_douzenal(n, precision).unwrap();
        prop_assert!(!texte.contains('.'));
        prop_assert_eq!(
            douzenal_vers_decimal(&texte),
            Ok(BigRational::from_integer(BigInt::from(n)))
        );
    }

    #[test]
    fn alphabet_insensible_a_la_casse(c in chiffre_douzenal()) {
        prop_assert_eq!(symbole(valeur(c.to_ascii_lowercase()).unwrap()), c);
    }

    /// v = k / 12^p a un développement fini de longueur ≤ p : retour exact.
    #[test]
    fn fractions_finies_aller_retour(k in -1_000_000i64..1_000_000, p in 0u32..8) {
        let v = BigRational::new(BigInt::from(k), BigInt::from(12).pow(p));
        let texte = decimal_vers_douzenal(v.clone(), p as usize).unwrap();
        prop_assert_eq!(douzenal_vers_decimal(&texte), Ok(v));
    }

    /// Jamais plus de `precision` chiffres après le point, jamais d'arrondi :
    /// troncature vers zéro, des deux côtés de zéro.
    #[test]
    fn troncature_jamais_arrondi(n in -1_000_000i64..1_000_000, d in 1i64..1_000_000, precision in 0usize..12) {
        let v = BigRational::new(BigInt::from(n), BigInt::from(d));
        let texte = decimal_vers_douzenal(v.clone(), precision).unwrap();

        let chiffres_frac = texte.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert!(chiffres_frac <= precision);
        prop_assert_eq!(texte.starts_with('-'), v.is_negative());

        let relu = douzenal_vers_decimal(&texte).unwrap();
        prop_assert!(relu.abs() <= v.abs());
        prop_assert!(relu.is_zero() || relu.is_negative() == v.is_negative());
        let pas = BigRational::new(BigInt::from(1), BigInt::from(12).pow(precision as u32));
        prop_assert!(v.abs() - relu.abs() < pas);
    }

    /// Littéral douzénal arbitraire : le calcul le relit à l'identique.
    #[test]
    fn litteral_calcule_tel_quel(
        entiers in proptest::collection::vec(chiffre_douzenal(), 1..10),
        frac in proptest::collection::vec(chiffre_douzenal(), 0..6),
    ) {
        let mut texte: String = entiers.iter().collect();
        if !frac.is_empty() {
            texte.push('.');
            texte.extend(frac.iter());
        }
        let r = calculer(&texte, 6).unwrap();
        prop_assert_eq!(r.decimal, douzenal_vers_decimal(&texte).unwrap());
    }

    #[test]
    fn addition_commutative(a in -5000i64..5000, b in -5000i64..5000) {
        let ta = decimal_vers_douzenal(a, 0).unwrap();
        let tb = decimal_vers_douzenal(b, 0).unwrap();
        let ab = calculer(&format!("{ta}+{tb}"), 6).unwrap();
        let ba = calculer(&format!("{tb}+{ta}"), 6).unwrap();
        prop_assert_eq!(&ab, &ba);
        prop_assert_eq!(ab.decimal, BigRational::from_integer(BigInt::from(a + b)));
    }
}

#[test]
fn negatif_tronque_a_zero_garde_son_signe() {
    let moins_zero = -BigRational::zero();
    assert!(!moins_zero.is_negative());
    assert_eq!(decimal_vers_douzenal(moins_zero, 6).unwrap(), "0");

    let petit = BigRational::new(BigInt::from(-1), BigInt::from(1_000_000));
    assert_eq!(decimal_vers_douzenal(petit, 2).unwrap(), "-0.00");
    assert_eq!(calculer("0-0.6", 0).unwrap().douzenal, "-0");
}
