//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> analyse -> éval -> formatage
//!
//! L'évaluation est une passe pure, post-ordre, sans état entre les
//! appels : même texte + même mode => même valeur, au bit près.

use tracing::debug;

use super::analyse::analyser;
use super::erreurs::{ErreurCalcul, ErreurNoyau};
use super::expr::{Expr, Fonction, OpBinaire};
use super::format::formater_valeur;
use super::jetons::tokenize;
use super::Mode;

/// Résultat d'une évaluation complète : la valeur brute et son
/// affichage (entiers sans point décimal, sinon décimal le plus court).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub affichage: String,
}

/// API publique : pipeline complet sur un texte d'expression.
pub fn evaluer_expression(texte: &str, mode: Mode) -> Result<Evaluation, ErreurNoyau> {
    let jetons = tokenize(texte, mode)?;
    let expr = analyser(&jetons)?;
    let valeur = evaluer(&expr)?;
    let affichage = formater_valeur(valeur);

    debug!(texte, affichage = %affichage, "expression évaluée");

    Ok(Evaluation { valeur, affichage })
}

/// Évalue un AST. Échoue avec l'erreur la plus SPÉCIFIQUE disponible :
/// division par zéro et domaine priment sur le dépassement générique,
/// parce qu'elles sont détectées sur les opérandes AVANT le calcul.
pub fn evaluer(expr: &Expr) -> Result<f64, ErreurCalcul> {
    let valeur = match expr {
        Expr::Nombre(v) => *v,

        Expr::Constante(c) => c.valeur(),

        Expr::Neg(x) => -evaluer(x)?,

        Expr::Binaire(op, a, b) => {
            let a = evaluer(a)?;
            let b = evaluer(b)?;
            appliquer_binaire(*op, a, b)?
        }

        Expr::Appel(f, x) => {
            let x = evaluer(x)?;
            appliquer_fonction(*f, x)?
        }
    };

    // Filet générique : tout résultat non fini restant est un dépassement.
    // (Couvre aussi un littéral trop long pour f64, devenu infini au parse.)
    if !valeur.is_finite() {
        return Err(ErreurCalcul::Debordement);
    }
    Ok(valeur)
}

fn appliquer_binaire(op: OpBinaire, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    match op {
        OpBinaire::Plus => Ok(a + b),
        OpBinaire::Moins => Ok(a - b),
        OpBinaire::Fois => Ok(a * b),

        OpBinaire::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Ok(a / b)
        }

        OpBinaire::Puissance => {
            // Base négative + exposant fractionnaire : résultat complexe,
            // hors du domaine réel de powf.
            if a < 0.0 && b.fract() != 0.0 {
                return Err(ErreurCalcul::Domaine { fonction: "^" });
            }
            Ok(a.powf(b))
        }
    }
}

fn appliquer_fonction(f: Fonction, x: f64) -> Result<f64, ErreurCalcul> {
    match f {
        Fonction::Sin => Ok(x.sin()),
        Fonction::Cos => Ok(x.cos()),
        Fonction::Tan => Ok(x.tan()),

        Fonction::Log => {
            if x <= 0.0 {
                return Err(ErreurCalcul::Domaine { fonction: f.nom() });
            }
            Ok(x.log10())
        }

        Fonction::Racine => {
            if x < 0.0 {
                return Err(ErreurCalcul::Domaine { fonction: f.nom() });
            }
            Ok(x.sqrt())
        }
    }
}
