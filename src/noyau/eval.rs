//! Noyau: évaluation (pipeline réel)
//!
//! tokenize -> RPN -> valeur exacte -> texte douzénal (tronqué à `precision`)
//!
//! Aucun état entre deux appels : tout vit dans la pile d’appel.

use num_rational::BigRational;
use tracing::debug;

use super::conversion::formater_rationnel;
use super::erreurs::{ErreurDouze, ResultatDouze};
use super::jetons::{format_tokens, tokenize};
use super::lecture::{chiffres_travail, decimal_texte};
use super::rpn::{eval_rpn, to_rpn};

/// Résultat d’un calcul : valeur exacte + forme douzénale.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultatCalcul {
    pub decimal: BigRational,
    pub douzenal: String,
}

impl ResultatCalcul {
    /// Lecture décimale de la valeur exacte (tronquée si infinie).
    pub fn decimal_texte(&self, precision: usize) -> String {
        decimal_texte(&self.decimal, chiffres_travail(precision))
    }
}

/// API publique : évalue une expression douzénale.
pub fn calculer(expr_str: &str, precision: usize) -> ResultatDouze<ResultatCalcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurDouze::Syntaxe("expression vide".into()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    debug!(jetons = %format_tokens(&jetons), "jetons");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "rpn");

    // 3) Valeur exacte
    let decimal = eval_rpn(&rpn)?;

    // 4) Texte douzénal
    let douzenal = formater_rationnel(&decimal, precision);
    debug!(expr = s, valeur = %decimal, %douzenal, "calcul terminé");

    Ok(ResultatCalcul { decimal, douzenal })
}
