//! src/noyau/erreurs.rs
//!
//! Taxonomie d'erreurs du noyau.
//!
//! Trois familles, toutes locales à UN appel d'évaluation :
//! - lexicale  : caractère ou mot hors alphabet (ou hors mode)
//! - syntaxe   : grammaire violée (avec l'index du jeton fautif)
//! - calcul    : division par zéro, domaine, dépassement
//!
//! Contrat : aucune erreur ne traverse la frontière du noyau autrement
//! que comme valeur typée (pas de panic), et aucune ne corrompt d'état
//! (le noyau n'en a pas).

use thiserror::Error;

/// Erreur de tokenisation : l'entrée contient quelque chose
/// qui n'appartient pas à l'alphabet du mode courant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurLexicale {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("mot inconnu: '{mot}' (position {position})")]
    MotInconnu { mot: String, position: usize },

    #[error("nombre mal formé (position {position})")]
    NombreInvalide { position: usize },

    /// Symbole légal seulement en mode scientifique (^, fonctions, constantes).
    #[error("'{symbole}' est réservé au mode scientifique (position {position})")]
    ReserveScientifique { symbole: String, position: usize },
}

/// Erreur d'analyse : la suite de jetons ne respecte pas la grammaire.
/// `index` désigne le jeton fautif dans la suite produite par le tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("jeton inattendu (jeton {index}, position {position})")]
    JetonInattendu { index: usize, position: usize },

    #[error("fin d'expression inattendue")]
    FinInattendue,

    #[error("parenthèse non fermée (jeton {index})")]
    ParentheseNonFermee { index: usize },

    #[error("fonction sans parenthèse ouvrante (jeton {index})")]
    FonctionSansParenthese { index: usize },

    /// Expression complète suivie de jetons en trop (ex: `2(3+4)` :
    /// la multiplication implicite est volontairement refusée).
    #[error("jetons en trop après l'expression (jeton {index}, position {position})")]
    JetonRestant { index: usize, position: usize },
}

/// Erreur numérique pendant l'évaluation de l'AST.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors du domaine mathématique de la fonction
    /// (sqrt d'un négatif, log d'un non-positif, base négative
    /// élevée à un exposant fractionnaire).
    #[error("argument hors domaine pour {fonction}")]
    Domaine { fonction: &'static str },

    #[error("dépassement de capacité (résultat non fini)")]
    Debordement,
}

/// Erreur unifiée du pipeline complet (tokenize -> analyse -> éval).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurNoyau {
    #[error(transparent)]
    Lexicale(#[from] ErreurLexicale),

    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error(transparent)]
    Calcul(#[from] ErreurCalcul),
}
