// src/app/vue.rs
//
// Vue (console interactive)
// -------------------------
// Objectifs :
// - Une ligne = une commande ; les sous-questions se lisent ligne à ligne
// - Toute erreur (saisie, noyau, outils) s’affiche et la boucle continue
// - Fin d’entrée => sortie propre
// - Générique sur BufRead/Write : testable avec des tampons en mémoire

use std::io::{self, BufRead, Write};

use num_bigint::BigUint;
use num_traits::Signed;
use tracing::{debug, warn};

use calculatrice_douze::noyau::entier::vers_base12;
use calculatrice_douze::noyau::{chiffres_travail, decimal_texte, lire_decimal};
use calculatrice_douze::outils::{
    fft_modules, polynome, regression_lineaire, statistiques, trigo, valeurs_propres, Matrice2,
};
use calculatrice_douze::{
    calculer, decimal_vers_douzenal, douzenal_vers_decimal, ErreurDouze, Valeur,
};

use super::etat::PRECISION_MAX;
use super::{AppDouze, ErreurApp};

const INVITE: &str = "douze> ";

/// Garde-fou : longueur max d’une suite.
const TERMES_MAX: usize = 20;

/// Garde-fou : dimension max d’une matrice saisie ligne à ligne.
const DIMENSION_MAX: usize = 8;

/// Commandes de la console (nom, aide).
pub const OUTILS: [(&str, &str); 15] = [
    ("help", "affiche cette aide"),
    ("convert", "conversion décimal <-> douzénal"),
    ("calc", "calculatrice d’expressions douzénales (+ - * / et parenthèses)"),
    ("table", "table de multiplication douzénale"),
    ("sequence", "suites : comptage, puissances de 12, carrés, cubes"),
    ("compare", "un entier en binaire, octal, décimal, douzénal, hexadécimal"),
    ("matrix", "matrices 2×2 : somme, produit, déterminant, inverse, valeurs propres"),
    ("eigen", "valeurs propres d’une matrice carrée n×n (parties réelles)"),
    ("fft", "modules de la transformée de Fourier d’une série"),
    ("stats", "statistiques d’une série"),
    ("trig", "sinus, cosinus, tangente d’un angle en radians"),
    ("poly", "valeur d’un polynôme a0 + a1·x + a2·x² + ..."),
    ("regression", "régression linéaire y = a·x + b"),
    ("precision", "précision fractionnaire de la session"),
    ("quit", "quitter (aussi : exit, q)"),
];

pub struct Repl<R, W> {
    app: AppDouze,
    entree: R,
    sortie: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(app: AppDouze, entree: R, sortie: W) -> Self {
        Self { app, entree, sortie }
    }

    /// Boucle principale. Seules les erreurs d’E/S l’interrompent.
    pub fn executer(&mut self) -> io::Result<()> {
        writeln!(
            self.sortie,
            "Calculatrice douzénale (chiffres 0-9, T = dix, E = onze). Tapez 'help'."
        )?;

        while let Some(ligne) = self.demander(INVITE)? {
            let commande = ligne.to_lowercase();
            if commande.is_empty() {
                continue;
            }
            if matches!(commande.as_str(), "quit" | "exit" | "q") {
                break;
            }

            debug!(%commande, "commande");
            self.app.noter_commande();

            let suite = match commande.as_str() {
                "help" => self.aide(),
                "convert" => self.convertir(),
                "calc" => self.calculer(),
                "table" => self.table(),
                "sequence" => self.suite(),
                "compare" => self.comparer(),
                "matrix" => self.matrice(),
                "eigen" => self.eigen(),
                "fft" => self.fft(),
                "stats" => self.stats(),
                "trig" => self.trig(),
                "poly" => self.poly(),
                "regression" => self.regression(),
                "precision" => self.precision(),
                autre => self.inconnue(autre),
            };

            match suite {
                Ok(()) => {}
                Err(ErreurApp::Io(e)) => return Err(e),
                Err(e) => {
                    warn!(%commande, erreur = %e, "commande échouée");
                    writeln!(self.sortie, "Erreur : {e}")?;
                    self.app.set_erreur(e.to_string());
                }
            }
        }

        write!(self.sortie, "Au revoir ! ({} commande(s)", self.app.commandes)?;
        if self.app.erreurs > 0 {
            write!(
                self.sortie,
                ", {} erreur(s), dernière : {}",
                self.app.erreurs, self.app.derniere_erreur
            )?;
        }
        writeln!(self.sortie, ")")?;
        Ok(())
    }

    /* ------------------------ Lecture ------------------------ */

    /// `None` en fin d’entrée.
    fn demander(&mut self, invite: &str) -> io::Result<Option<String>> {
        write!(self.sortie, "{invite}")?;
        self.sortie.flush()?;

        let mut ligne = String::new();
        if self.entree.read_line(&mut ligne)? == 0 {
            writeln!(self.sortie)?;
            return Ok(None);
        }
        Ok(Some(ligne.trim().to_string()))
    }

    fn lire(&mut self, invite: &str) -> Result<String, ErreurApp> {
        self.demander(invite)?
            .ok_or_else(|| ErreurApp::Saisie("fin de l’entrée".into()))
    }

    fn lire_entier(&mut self, invite: &str) -> Result<usize, ErreurApp> {
        let t = self.lire(invite)?;
        t.parse()
            .map_err(|_| ErreurApp::Saisie(format!("entier positif attendu : {t:?}")))
    }

    fn lire_flottant(&mut self, invite: &str) -> Result<f64, ErreurApp> {
        let t = self.lire(invite)?;
        flottant(&t)
    }

    fn lire_flottants(&mut self, invite: &str) -> Result<Vec<f64>, ErreurApp> {
        let t = self.lire(invite)?;
        t.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|m| !m.is_empty())
            .map(flottant)
            .collect()
    }

    fn lire_matrice(&mut self, nom: &str) -> Result<Matrice2, ErreurApp> {
        let mut m = [[0.0; 2]; 2];
        for (i, ligne) in m.iter_mut().enumerate() {
            for (j, case) in ligne.iter_mut().enumerate() {
                *case = self.lire_flottant(&format!("  {nom}[{}][{}] : ", i + 1, j + 1))?;
            }
        }
        Ok(Matrice2(m))
    }

    /* ------------------------ Affichage ------------------------ */

    fn doz(&self, x: f64) -> Result<String, ErreurDouze> {
        decimal_vers_douzenal(x, self.app.precision)
    }

    /// `libellé : x (décimal) = ... (douzénal)`
    fn ligne(&mut self, libelle: &str, x: f64) -> Result<(), ErreurApp> {
        let z = self.doz(x)?;
        writeln!(self.sortie, "  {libelle:<13}: {x} (décimal) = {z} (douzénal)")?;
        Ok(())
    }

    fn afficher_matrice(&mut self, m: &Matrice2) -> Result<(), ErreurApp> {
        for [a, b] in m.lignes() {
            let (za, zb) = (self.doz(*a)?, self.doz(*b)?);
            writeln!(self.sortie, "  [{a}, {b}]  =>  [{za}, {zb}]")?;
        }
        Ok(())
    }

    /* ------------------------ Commandes ------------------------ */

    fn aide(&mut self) -> Result<(), ErreurApp> {
        writeln!(self.sortie, "Commandes :")?;
        for (nom, aide) in OUTILS {
            writeln!(self.sortie, "  {nom:<11} {aide}")?;
        }
        Ok(())
    }

    fn inconnue(&mut self, commande: &str) -> Result<(), ErreurApp> {
        writeln!(
            self.sortie,
            "Commande inconnue : {commande:?}. Tapez 'help' pour la liste des commandes."
        )?;
        Ok(())
    }

    fn convertir(&mut self) -> Result<(), ErreurApp> {
        let p = self.app.precision;
        let choix = self.lire("Décimal -> douzénal (d) ou douzénal -> décimal (z) ? ")?;

        match choix.to_lowercase().as_str() {
            "d" => {
                let t = self.lire("Nombre décimal : ")?;
                let z = decimal_vers_douzenal(lire_decimal(&t)?, p)?;
                writeln!(self.sortie, "{t} (décimal) = {z} (douzénal)")?;
            }
            "z" => {
                let t = self.lire("Nombre douzénal : ")?;
                let r = douzenal_vers_decimal(&t)?;
                let d = decimal_texte(&r, chiffres_travail(p));
                writeln!(self.sortie, "{t} (douzénal) = {d} (décimal)")?;
            }
            _ => return Err(ErreurApp::Saisie(format!("choix inconnu : {choix:?}"))),
        }
        Ok(())
    }

    fn calculer(&mut self) -> Result<(), ErreurApp> {
        let p = self.app.precision;
        let expr = self.lire("Expression douzénale (ex. 1+2*3) : ")?;
        let res = calculer(&expr, p)?;
        writeln!(self.sortie, "  décimal  : {}", res.decimal_texte(p))?;
        writeln!(self.sortie, "  douzénal : {}", res.douzenal)?;
        Ok(())
    }

    fn table(&mut self) -> Result<(), ErreurApp> {
        let doz = |n: u32| vers_base12(&BigUint::from(n));

        write!(self.sortie, "   |")?;
        for j in 1..=12 {
            write!(self.sortie, "{:>4}", doz(j))?;
        }
        writeln!(self.sortie)?;
        writeln!(self.sortie, "{}", "-".repeat(4 + 12 * 4))?;

        for i in 1..=12 {
            write!(self.sortie, "{:>3}|", doz(i))?;
            for j in 1..=12 {
                write!(self.sortie, "{:>4}", doz(i * j))?;
            }
            writeln!(self.sortie)?;
        }
        Ok(())
    }

    fn suite(&mut self) -> Result<(), ErreurApp> {
        writeln!(
            self.sortie,
            "  1. comptage   2. puissances de 12   3. carrés   4. cubes"
        )?;
        let choix = self.lire("Choix (1-4) : ")?;
        let genre = match choix.as_str() {
            "1" => 1u8,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            _ => return Err(ErreurApp::Saisie(format!("choix inconnu : {choix:?}"))),
        };
        let n = self
            .lire_entier(&format!("Nombre de termes (max {TERMES_MAX}) : "))?
            .min(TERMES_MAX);

        writeln!(self.sortie, "{:>21} | Douzénal", "Décimal")?;
        writeln!(self.sortie, "{}", "-".repeat(40))?;
        for k in 1..=n as u32 {
            let base = BigUint::from(k);
            let terme = match genre {
                1 => base,
                2 => BigUint::from(12u32).pow(k - 1),
                3 => base.pow(2),
                _ => base.pow(3),
            };
            writeln!(self.sortie, "{:>21} | {}", terme, vers_base12(&terme))?;
        }
        Ok(())
    }

    fn comparer(&mut self) -> Result<(), ErreurApp> {
        let t = self.lire("Entier décimal : ")?;
        let n = match lire_decimal(&t)? {
            Valeur::Entier(n) => n,
            _ => return Err(ErreurApp::Saisie(format!("entier attendu : {t:?}"))),
        };
        let signe = if n.is_negative() { "-" } else { "" };
        let m = n.magnitude();

        writeln!(self.sortie, "  Binaire      : {signe}0b{}", m.to_str_radix(2))?;
        writeln!(self.sortie, "  Octal        : {signe}0o{}", m.to_str_radix(8))?;
        writeln!(self.sortie, "  Décimal      : {n}")?;
        writeln!(self.sortie, "  Douzénal     : {signe}{}", vers_base12(m))?;
        writeln!(self.sortie, "  Hexadécimal  : {signe}0x{}", m.to_str_radix(16))?;
        Ok(())
    }

    fn matrice(&mut self) -> Result<(), ErreurApp> {
        writeln!(
            self.sortie,
            "  1. somme   2. produit   3. déterminant   4. inverse   5. valeurs propres"
        )?;
        let choix = self.lire("Choix (1-5) : ")?;
        if !matches!(choix.as_str(), "1" | "2" | "3" | "4" | "5") {
            return Err(ErreurApp::Saisie(format!("choix inconnu : {choix:?}")));
        }

        let a = self.lire_matrice("A")?;
        match choix.as_str() {
            "1" | "2" => {
                let b = self.lire_matrice("B")?;
                let c = if choix == "1" { a.add(&b) } else { a.mul(&b) };
                writeln!(self.sortie, "Résultat :")?;
                self.afficher_matrice(&c)?;
            }
            "3" => self.ligne("Déterminant", a.determinant())?,
            "4" => {
                let inv = a.inverse()?;
                writeln!(self.sortie, "Inverse :")?;
                self.afficher_matrice(&inv)?;
            }
            _ => {
                // parties réelles (paire conjuguée si le discriminant est négatif)
                let [l1, l2] = a.valeurs_propres();
                self.ligne("λ1", l1)?;
                self.ligne("λ2", l2)?;
            }
        }
        Ok(())
    }

    fn eigen(&mut self) -> Result<(), ErreurApp> {
        let n = self.lire_entier(&format!("Dimension n (1-{DIMENSION_MAX}) : "))?;
        if !(1..=DIMENSION_MAX).contains(&n) {
            return Err(ErreurApp::Saisie(format!("dimension hors bornes : {n}")));
        }
        let mut lignes = Vec::with_capacity(n);
        for i in 1..=n {
            lignes.push(self.lire_flottants(&format!("  ligne {i} ({n} valeurs) : "))?);
        }

        for (i, l) in valeurs_propres(&lignes)?.into_iter().enumerate() {
            self.ligne(&format!("λ{}", i + 1), l)?;
        }
        Ok(())
    }

    fn fft(&mut self) -> Result<(), ErreurApp> {
        let valeurs = self.lire_flottants("Valeurs (séparées par espaces ou virgules) : ")?;
        for (k, m) in fft_modules(&valeurs)?.into_iter().enumerate() {
            self.ligne(&format!("|X{k}|"), m)?;
        }
        Ok(())
    }

    fn stats(&mut self) -> Result<(), ErreurApp> {
        let valeurs = self.lire_flottants("Valeurs (séparées par espaces ou virgules) : ")?;
        let s = statistiques(&valeurs)?;

        writeln!(self.sortie, "  {:<13}: {}", "Effectif", s.n)?;
        self.ligne("Somme", s.somme)?;
        self.ligne("Moyenne", s.moyenne)?;
        self.ligne("Médiane", s.mediane)?;
        self.ligne("Écart-type", s.ecart_type)?;
        self.ligne("Minimum", s.min)?;
        self.ligne("Maximum", s.max)?;
        Ok(())
    }

    fn trig(&mut self) -> Result<(), ErreurApp> {
        let x = self.lire_flottant("Angle (radians) : ")?;
        let t = trigo(x);
        self.ligne("sin", t.sin)?;
        self.ligne("cos", t.cos)?;
        self.ligne("tan", t.tan)?;
        Ok(())
    }

    fn poly(&mut self) -> Result<(), ErreurApp> {
        let coeffs = self.lire_flottants("Coefficients a0 a1 a2 ... : ")?;
        let x = self.lire_flottant("x : ")?;
        self.ligne("P(x)", polynome(&coeffs, x))?;
        Ok(())
    }

    fn regression(&mut self) -> Result<(), ErreurApp> {
        let xs = self.lire_flottants("Valeurs x : ")?;
        let ys = self.lire_flottants("Valeurs y : ")?;
        let r = regression_lineaire(&xs, &ys)?;
        self.ligne("Pente", r.pente)?;
        self.ligne("Ordonnée", r.ordonnee)?;
        self.ligne("R²", r.r2)?;
        Ok(())
    }

    fn precision(&mut self) -> Result<(), ErreurApp> {
        writeln!(self.sortie, "Précision actuelle : {}", self.app.precision)?;
        let t = self.lire(&format!("Nouvelle précision (0-{PRECISION_MAX}, vide = inchangée) : "))?;
        if t.is_empty() {
            return Ok(());
        }
        let voulu: usize = t
            .parse()
            .map_err(|_| ErreurApp::Saisie(format!("entier positif attendu : {t:?}")))?;
        let retenu = self.app.set_precision(voulu);
        if retenu < voulu {
            writeln!(self.sortie, "Précision : {retenu} (bornée à {PRECISION_MAX})")?;
        } else {
            writeln!(self.sortie, "Précision : {retenu}")?;
        }
        Ok(())
    }
}

fn flottant(t: &str) -> Result<f64, ErreurApp> {
    t.trim()
        .parse()
        .map_err(|_| ErreurApp::Saisie(format!("nombre attendu : {t:?}")))
}
