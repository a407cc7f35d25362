// src/app.rs
//
// Calculatrice douzénale: module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (cli.rs + etat.rs + vue.rs)
// - Ré-exporter AppDouze (pour main.rs: use crate::app::AppDouze;)
// - Erreur commune de la couche App (noyau + outils + E/S)

pub mod cli;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppDouze;`
pub use etat::AppDouze;

use std::io;

use calculatrice_douze::noyau::ErreurDouze;
use calculatrice_douze::outils::ErreurOutil;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErreurApp {
    #[error(transparent)]
    Douze(#[from] ErreurDouze),

    #[error(transparent)]
    Outil(#[from] ErreurOutil),

    #[error("entrée/sortie : {0}")]
    Io(#[from] io::Error),

    /// Saisie utilisateur illisible (hors expressions douzénales).
    #[error("saisie invalide : {0}")]
    Saisie(String),
}
