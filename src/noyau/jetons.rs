// src/noyau/jetons.rs

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::chiffres::est_chiffre;
use super::conversion::douzenal_vers_decimal;
use super::erreurs::{ErreurDouze, ResultatDouze};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Ce que la position courante de l'expression attend.
///
/// En `Operande`, `+`/`-` sont des signes unaires ; en `Operateur`, ce sont
/// des opérateurs binaires. Partagé avec rpn.rs pour la validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attente {
    Operande,
    Operateur,
}

/// Tokenize une expression douzénale en un seul passage.
/// Supporte:
/// - littéraux douzénaux 0-9, T, E (casse ignorée), avec un point optionnel
/// - opérateurs + - * /
/// - parenthèses ( )
/// - signe unaire devant un littéral (-T, 3*-2) ou une parenthèse (-(1+1))
///
/// Un signe unaire devant '(' est réécrit en `( 0 - ( ... ) )` : la
/// parenthèse supplémentaire est refermée avec la parenthèse correspondante.
pub fn tokenize(s: &str) -> ResultatDouze<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    let mut attente = Attente::Operande;
    let mut signe: Option<char> = None;
    // une entrée par '(' ouverte : true si doublée pour un moins unaire
    let mut groupes: Vec<bool> = Vec::new();

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            let moins = signe.take() == Some('-');
            if moins {
                out.push(Tok::LPar);
                out.push(Tok::Num(BigRational::zero()));
                out.push(Tok::Minus);
            }
            out.push(Tok::LPar);
            groupes.push(moins);
            attente = Attente::Operande;
            i += 1;
            continue;
        }
        if c == ')' {
            exiger_sans_signe(signe)?;
            out.push(Tok::RPar);
            if groupes.pop() == Some(true) {
                out.push(Tok::RPar);
            }
            attente = Attente::Operateur;
            i += 1;
            continue;
        }

        // Signe unaire
        if (c == '+' || c == '-') && attente == Attente::Operande {
            if signe.is_some() {
                return Err(ErreurDouze::Syntaxe("deux signes consécutifs".into()));
            }
            signe = Some(c);
            i += 1;
            continue;
        }

        // Opérateurs binaires
        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(op) = op {
            exiger_sans_signe(signe)?;
            out.push(op);
            attente = Attente::Operande;
            i += 1;
            continue;
        }

        // Littéral douzénal : chiffres, puis au plus un point suivi de chiffres.
        // Un point en tête ou un second point tombe sur CaractereInvalide.
        if est_chiffre(c) {
            let start = i;
            let chiffres = |i: &mut usize| {
                while *i < chars.len() && est_chiffre(chars[*i]) {
                    *i += 1;
                }
            };
            chiffres(&mut i);
            if chars.get(i) == Some(&'.') {
                i += 1;
                chiffres(&mut i);
            }
            let litteral: String = chars[start..i].iter().collect();
            let mut v = douzenal_vers_decimal(&litteral)?;
            if signe.take() == Some('-') {
                v = -v;
            }

            out.push(Tok::Num(v));
            attente = Attente::Operateur;
            continue;
        }

        return Err(ErreurDouze::CaractereInvalide(c));
    }

    exiger_sans_signe(signe)?;
    Ok(out)
}

fn exiger_sans_signe(signe: Option<char>) -> ResultatDouze<()> {
    match signe {
        Some(c) => Err(ErreurDouze::Syntaxe(format!("signe '{c}' sans opérande"))),
        None => Ok(()),
    }
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn num(n: i64) -> Tok {
        Tok::Num(BigRational::from_integer(BigInt::from(n)))
    }

    #[test]
    fn litteraux_et_operateurs() {
        let t = tokenize("T + 2*(e-1)").unwrap();
        assert_eq!(
            t,
            vec![
                num(10),
                Tok::Plus,
                num(2),
                Tok::Star,
                Tok::LPar,
                num(11),
                Tok::Minus,
                num(1),
                Tok::RPar,
            ]
        );
    }

    #[test]
    fn litteral_fractionnaire() {
        let t = tokenize("0.6").unwrap();
        assert_eq!(
            t,
            vec![Tok::Num(BigRational::new(BigInt::from(1), BigInt::from(2)))]
        );
    }

    #[test]
    fn signe_unaire_colle_au_litteral() {
        assert_eq!(tokenize("-T").unwrap(), vec![num(-10)]);
        assert_eq!(tokenize("3*-2").unwrap(), vec![num(3), Tok::Star, num(-2)]);
        assert_eq!(tokenize("1++2").unwrap(), vec![num(1), Tok::Plus, num(2)]);
        assert_eq!(
            tokenize("(-1)").unwrap(),
            vec![Tok::LPar, num(-1), Tok::RPar]
        );
    }

    #[test]
    fn moins_unaire_devant_parenthese() {
        let t = tokenize("-(1+1)").unwrap();
        assert_eq!(format_tokens(&t), "( 0 - ( 1 + 1 ) )");

        let t = tokenize("2/-(3)").unwrap();
        assert_eq!(format_tokens(&t), "2 / ( 0 - ( 3 ) )");

        // '+' unaire devant '(' : simplement ignoré
        let t = tokenize("+(1)").unwrap();
        assert_eq!(format_tokens(&t), "( 1 )");
    }

    #[test]
    fn erreurs_tokenize() {
        assert_eq!(tokenize("1 $ 2"), Err(ErreurDouze::CaractereInvalide('$')));
        assert_eq!(tokenize("2^3"), Err(ErreurDouze::CaractereInvalide('^')));
        assert!(matches!(tokenize("1+--2"), Err(ErreurDouze::Syntaxe(_))));
        assert!(matches!(tokenize("1*-"), Err(ErreurDouze::Syntaxe(_))));
        assert!(matches!(tokenize("(-)"), Err(ErreurDouze::Syntaxe(_))));
        assert!(matches!(tokenize("-*2"), Err(ErreurDouze::Syntaxe(_))));
    }

    #[test]
    fn point_hors_litteral() {
        // un seul point par littéral, jamais en tête
        assert_eq!(tokenize("1.2.3+1"), Err(ErreurDouze::CaractereInvalide('.')));
        assert_eq!(tokenize("1..2"), Err(ErreurDouze::CaractereInvalide('.')));
        assert_eq!(tokenize(".6+1"), Err(ErreurDouze::CaractereInvalide('.')));
        assert_eq!(tokenize("-.6"), Err(ErreurDouze::CaractereInvalide('.')));
        // point final toléré : "1." vaut 1
        assert_eq!(tokenize("1.+2").unwrap(), vec![num(1), Tok::Plus, num(2)]);
    }

    #[test]
    fn vide() {
        assert_eq!(tokenize("   ").unwrap(), vec![]);
    }
}
