//! src/app/etat.rs
//!
//! État de session (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la console (précision, compteurs) et offrir
//! des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Défense en profondeur : bornes sur la précision fractionnaire.

use calculatrice_douze::PRECISION_DEFAUT;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const PRECISION_MAX: usize = 200;

#[derive(Clone, Debug)]
pub struct AppDouze {
    // --- paramètres ---
    pub precision: usize, // chiffres douzénaux après le point

    // --- bilan de session ---
    pub commandes: usize,
    pub erreurs: usize,
    pub derniere_erreur: String,
}

impl Default for AppDouze {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            commandes: 0,
            erreurs: 0,
            derniere_erreur: String::new(),
        }
    }
}

impl AppDouze {
    pub fn new(precision: usize) -> Self {
        let mut app = Self::default();
        app.set_precision(precision);
        app
    }

    pub fn noter_commande(&mut self) {
        self.commandes += 1;
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreurs += 1;
        self.derniere_erreur = msg.into();
    }

    /// Garde-fou : limite la précision. Renvoie la valeur retenue.
    pub fn set_precision(&mut self, precision: usize) -> usize {
        self.precision = precision.min(PRECISION_MAX);
        self.precision
    }
}
