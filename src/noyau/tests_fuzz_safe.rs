//! Fuzz borné du pipeline douzénal.
//!
//! Graine fixe, profondeur bornée, plafond de temps par test. Seules les
//! erreurs typées prévues sont tolérées (division par zéro, syntaxe).
//!
//! Invariant : le texte douzénal relu est la valeur tronquée
//! (écart dans [0, 12^-précision) en valeur absolue).

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::{calculer, douzenal_vers_decimal, ErreurDouze};

/* ------------------------ Aléa + chrono ------------------------ */

/// xorshift64* : reproductible, sans dépendance.
struct Alea(u64);

impl Alea {
    fn tirer(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Entier dans [0, n) ; n > 0.
    fn sous(&mut self, n: usize) -> usize {
        (self.tirer() % n as u64) as usize
    }

    fn pile(&mut self) -> bool {
        self.tirer() >> 63 == 1
    }
}

/// Plafond de temps par test.
struct Chrono {
    debut: Instant,
    plafond: Duration,
}

impl Chrono {
    fn ms(plafond: u64) -> Self {
        Self {
            debut: Instant::now(),
            plafond: Duration::from_millis(plafond),
        }
    }

    fn verifier(&self) {
        assert!(
            self.debut.elapsed() <= self.plafond,
            "plafond de {:?} dépassé",
            self.plafond
        );
    }
}

/* ------------------------ Invariants ------------------------ */

/// Le générateur produit des divisions par zéro et des formes cassées.
fn erreur_attendue(e: &ErreurDouze) -> bool {
    matches!(
        e,
        ErreurDouze::DivisionParZero | ErreurDouze::Syntaxe(_) | ErreurDouze::CaractereInvalide(_)
    )
}

fn verifier_troncature(valeur: &BigRational, douzenal: &str, precision: usize) {
    let relu = douzenal_vers_decimal(douzenal)
        .unwrap_or_else(|e| panic!("sortie illisible {douzenal:?}: {e}"));
    let ecart = valeur.abs() - relu.abs();
    let pas = BigRational::new(BigInt::from(1), BigInt::from(12).pow(precision as u32));
    assert!(
        !ecart.is_negative() && ecart < pas,
        "troncature violée: valeur={valeur} douzenal={douzenal}"
    );
}

/* ------------------------ Générateurs ------------------------ */

const CHIFFRES: [char; 12] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'E'];

/// Littéral douzénal : 1-4 chiffres, parfois un point, parfois un signe.
fn litteral(a: &mut Alea) -> String {
    let mut s: String = (0..=a.sous(4)).map(|_| CHIFFRES[a.sous(12)]).collect();
    if a.sous(4) == 0 {
        s.push('.');
        s.extend((0..=a.sous(3)).map(|_| CHIFFRES[a.sous(12)]));
    }
    if a.sous(5) == 0 {
        s.insert(0, '-');
    }
    s
}

fn expression(a: &mut Alea, prof: usize) -> String {
    if prof == 0 {
        return litteral(a);
    }
    let fils = |a: &mut Alea| expression(a, prof - 1);

    match a.sous(8) {
        0 => litteral(a),
        1 => format!("({}+{})", fils(a), fils(a)),
        2 => format!("({}-{})", fils(a), fils(a)),
        3 => format!("{}*{}", fils(a), fils(a)),
        4 => format!("({}/{})", fils(a), fils(a)),
        5 => format!("-({})", fils(a)),
        // volontairement cassé
        6 if a.pile() => format!("({}", fils(a)),
        6 => format!("{}+", fils(a)),
        _ => format!("{} - {}", fils(a), fils(a)),
    }
}

/// `terme` répété `n` fois, sommé par paires : profondeur log2(n).
fn somme_par_paires(terme: &str, n: usize) -> String {
    let mut niveau = vec![terme.to_string(); n];
    while niveau.len() > 1 {
        niveau = niveau
            .chunks(2)
            .map(|paire| match paire {
                [g, d] => format!("({g}+{d})"),
                [seul] => seul.clone(),
                _ => unreachable!(),
            })
            .collect();
    }
    niveau.pop().unwrap_or_else(|| "0".into())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn expressions_aleatoires_tronquees_et_deterministes() {
    let chrono = Chrono::ms(500);
    let mut a = Alea(0x5EED_D0C2_u64);
    let (mut succes, mut echecs) = (0, 0);

    for _ in 0..150 {
        chrono.verifier();

        let expr = expression(&mut a, 4);
        let precision = a.sous(9);

        match calculer(&expr, precision) {
            Ok(r) => {
                verifier_troncature(&r.decimal, &r.douzenal, precision);
                assert_eq!(calculer(&expr, precision), Ok(r), "non déterministe : {expr:?}");
                succes += 1;
            }
            Err(e) => {
                assert!(erreur_attendue(&e), "erreur inattendue pour {expr:?} : {e}");
                echecs += 1;
            }
        }
    }

    // le générateur doit couvrir les deux issues
    assert!(succes > 10, "{succes} succès seulement");
    assert!(echecs > 0, "aucune erreur produite");
}

#[test]
fn caracteres_arbitraires_sans_panique() {
    let chrono = Chrono::ms(200);
    let mut a = Alea(0xD0_2E_u64);
    let bruit = [
        '1', 'T', 'e', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', '^', '%',
    ];

    for _ in 0..300 {
        chrono.verifier();
        let expr: String = (0..=a.sous(10)).map(|_| bruit[a.sous(bruit.len())]).collect();
        if let Ok(r) = calculer(&expr, 4) {
            verifier_troncature(&r.decimal, &r.douzenal, 4);
        }
    }
}

#[test]
fn longue_somme_par_paires() {
    let chrono = Chrono::ms(300);
    let expr = somme_par_paires("0.6", 800);
    let r = calculer(&expr, 6).unwrap_or_else(|e| panic!("{e}"));
    chrono.verifier();

    // 800 × 1/2 = 400 = 294 (base 12)
    assert_eq!(r.decimal, BigRational::from_integer(BigInt::from(400)));
    assert_eq!(r.douzenal, "294");
}
