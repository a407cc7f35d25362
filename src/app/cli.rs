// src/app/cli.rs
//
// Ligne de commande : une action ponctuelle (--to-doz / --to-dec / --calc-expr
// / --list-tools) ou la console interactive (par défaut).

use std::io::{BufRead, Write};

use clap::{ArgGroup, Parser};
use tracing::{debug, info};

use calculatrice_douze::noyau::{chiffres_travail, decimal_texte, lire_decimal};
use calculatrice_douze::{calculer, decimal_vers_douzenal, douzenal_vers_decimal, PRECISION_DEFAUT};

use super::vue::{Repl, OUTILS};
use super::{AppDouze, ErreurApp};

#[derive(Parser, Debug)]
#[command(
    name = "douze",
    version,
    about = "Conversions décimal <-> douzénal et calculatrice en base 12"
)]
#[command(group(
    ArgGroup::new("action").args(["to_doz", "to_dec", "calc_expr", "interactive", "list_tools"])
))]
pub struct Args {
    /// Nombre décimal à convertir en douzénal
    #[arg(long = "to-doz", value_name = "DECIMAL", allow_hyphen_values = true)]
    pub to_doz: Option<String>,

    /// Nombre douzénal à convertir en décimal
    #[arg(long = "to-dec", value_name = "DOUZENAL", allow_hyphen_values = true)]
    pub to_dec: Option<String>,

    /// Expression douzénale à évaluer (ex. "T+2", "(1+2)*3")
    #[arg(long = "calc-expr", value_name = "EXPR", allow_hyphen_values = true)]
    pub calc_expr: Option<String>,

    /// Console interactive (action par défaut)
    #[arg(short, long)]
    pub interactive: bool,

    /// Liste les commandes de la console
    #[arg(long)]
    pub list_tools: bool,

    /// Chiffres douzénaux après le point (borné à 200)
    #[arg(long = "frac-precision", value_name = "N", default_value_t = PRECISION_DEFAUT)]
    pub frac_precision: usize,

    /// Journal détaillé (niveau debug) sur stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Exécute l’action demandée. La console lit `entree` et écrit dans `sortie`.
pub fn executer<R: BufRead, W: Write>(
    args: &Args,
    entree: R,
    mut sortie: W,
) -> Result<(), ErreurApp> {
    let app = AppDouze::new(args.frac_precision);
    let p = app.precision;
    debug!(precision = p, "précision retenue");

    if let Some(texte) = &args.to_doz {
        let valeur = lire_decimal(texte)?;
        writeln!(sortie, "{}", decimal_vers_douzenal(valeur, p)?)?;
    } else if let Some(texte) = &args.to_dec {
        let r = douzenal_vers_decimal(texte)?;
        writeln!(sortie, "{}", decimal_texte(&r, chiffres_travail(p)))?;
    } else if let Some(expr) = &args.calc_expr {
        let res = calculer(expr, p)?;
        writeln!(sortie, "décimal  : {}", res.decimal_texte(p))?;
        writeln!(sortie, "douzénal : {}", res.douzenal)?;
    } else if args.list_tools {
        for (nom, aide) in OUTILS {
            writeln!(sortie, "{nom:<11} {aide}")?;
        }
    } else {
        info!("console interactive");
        Repl::new(app, entree, sortie).executer()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculatrice_douze::ErreurDouze;
    use std::io::Cursor;

    fn lancer(argv: &[&str], entree: &str) -> Result<String, ErreurApp> {
        let args = Args::try_parse_from(argv).unwrap();
        let mut sortie = Vec::new();
        executer(&args, Cursor::new(entree.to_string()), &mut sortie)?;
        Ok(String::from_utf8(sortie).unwrap())
    }

    #[test]
    fn vers_douzenal() {
        assert_eq!(lancer(&["douze", "--to-doz", "144"], "").unwrap(), "100\n");
        assert_eq!(lancer(&["douze", "--to-doz", "-10"], "").unwrap(), "-T\n");
        assert_eq!(
            lancer(&["douze", "--to-doz", "0.5", "--frac-precision", "3"], "").unwrap(),
            "0.6\n"
        );
    }

    #[test]
    fn vers_decimal() {
        assert_eq!(lancer(&["douze", "--to-dec", "E"], "").unwrap(), "11\n");
        assert_eq!(lancer(&["douze", "--to-dec", "10.6"], "").unwrap(), "12.5\n");
        assert_eq!(lancer(&["douze", "--to-dec", "-1"], "").unwrap(), "-1\n");
    }

    #[test]
    fn calcul() {
        let out = lancer(&["douze", "--calc-expr", "T+2"], "").unwrap();
        assert!(out.contains("décimal  : 12"));
        assert!(out.contains("douzénal : 10"));
    }

    #[test]
    fn erreurs_remontees() {
        assert!(matches!(
            lancer(&["douze", "--to-dec", "1Z"], ""),
            Err(ErreurApp::Douze(ErreurDouze::ChiffreInvalide('Z')))
        ));
        assert!(matches!(
            lancer(&["douze", "--to-dec", "1.2.3"], ""),
            Err(ErreurApp::Douze(ErreurDouze::FormatInvalide(_)))
        ));
        assert!(matches!(
            lancer(&["douze", "--calc-expr", "1/0"], ""),
            Err(ErreurApp::Douze(ErreurDouze::DivisionParZero))
        ));
    }

    #[test]
    fn actions_exclusives() {
        assert!(Args::try_parse_from(["douze", "--to-doz", "1", "--to-dec", "1"]).is_err());
        assert!(Args::try_parse_from(["douze", "--frac-precision", "x"]).is_err());
    }

    #[test]
    fn precision_bornee() {
        let args = Args::try_parse_from(["douze", "--frac-precision", "500"]).unwrap();
        assert_eq!(args.frac_precision, 500);
        assert_eq!(AppDouze::new(args.frac_precision).precision, 200);
    }

    #[test]
    fn console_par_defaut() {
        let out = lancer(&["douze"], "table\nquit\n").unwrap();
        assert!(out.contains("douze> "));
        assert!(out.contains("100"));
    }

    #[test]
    fn liste_des_outils() {
        let out = lancer(&["douze", "--list-tools"], "").unwrap();
        assert!(out.contains("regression"));
        assert!(out.contains("matrix"));
    }
}
