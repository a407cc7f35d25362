// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la forme
//   (opérande / opérateur en alternance, parenthèses équilibrées)
// - Puis évaluer la RPN sur une pile de rationnels
//
// Règles:
// - * et / lient plus fort que + et - ; tous associatifs à gauche
// - les signes unaires ont déjà été absorbés par jetons.rs

use num_rational::BigRational;
use num_traits::Zero;

use super::erreurs::{ErreurDouze, ResultatDouze};
use super::jetons::{Attente, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

fn syntaxe(msg: &str) -> ErreurDouze {
    ErreurDouze::Syntaxe(msg.to_string())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> ResultatDouze<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    let mut attente = Attente::Operande;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if attente == Attente::Operateur {
                    return Err(syntaxe("deux opérandes sans opérateur"));
                }
                out.push(tok);
                attente = Attente::Operateur;
            }

            Tok::LPar => {
                if attente == Attente::Operateur {
                    return Err(syntaxe("opérateur manquant avant '('"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attente == Attente::Operande {
                    return Err(syntaxe("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(syntaxe("parenthèse fermante sans ouvrante")),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attente == Attente::Operande {
                    return Err(syntaxe("opérande manquant avant un opérateur"));
                }

                // dépile tant que le sommet lie au moins aussi fort (associativité à gauche)
                while ops
                    .last()
                    .is_some_and(|top| !matches!(top, Tok::LPar) && precedence(top) >= precedence(&tok))
                {
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                attente = Attente::Operande;
            }
        }
    }

    if attente == Attente::Operande {
        return Err(if tokens.is_empty() {
            syntaxe("expression vide")
        } else {
            syntaxe("opérande manquant en fin d’expression")
        });
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN en valeur exacte.
pub fn eval_rpn(rpn: &[Tok]) -> ResultatDouze<BigRational> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| syntaxe("expression incomplète"))?;
                let a = st.pop().ok_or_else(|| syntaxe("expression incomplète"))?;
                st.push(appliquer(tok, a, b)?);
            }

            Tok::LPar | Tok::RPar => return Err(syntaxe("parenthèse inattendue en RPN")),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(syntaxe("l’expression ne se réduit pas à une seule valeur")),
    }
}

fn appliquer(op: &Tok, a: BigRational, b: BigRational) -> ResultatDouze<BigRational> {
    match op {
        Tok::Plus => Ok(a + b),
        Tok::Minus => Ok(a - b),
        Tok::Star => Ok(a * b),
        Tok::Slash => {
            if b.is_zero() {
                return Err(ErreurDouze::DivisionParZero);
            }
            Ok(a / b)
        }
        _ => Err(syntaxe("opérateur attendu")),
    }
}
