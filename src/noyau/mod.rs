//! Noyau d'évaluation d'expressions
//!
//! Organisation interne :
//! - erreurs.rs  : taxonomie typée (lexicale / syntaxe / calcul)
//! - jetons.rs   : tokenisation (positions incluses)
//! - expr.rs     : AST + fonctions/constantes
//! - analyse.rs  : descente récursive -> Expr
//! - eval.rs     : évaluation pure + pipeline complet
//! - format.rs   : affichage du résultat f64
//!
//! Le noyau est une bibliothèque feuille : pas d'E/S, pas d'état partagé,
//! chaque appel est indépendant et déterministe.

pub mod analyse;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurNoyau;
pub use eval::{evaluer_expression, Evaluation};

/// Mode de la calculatrice : filtre l'alphabet accepté par le tokenizer.
///
/// - `Basique`      : + - * / ( ) et nombres
/// - `Scientifique` : en plus ^, sin/cos/tan/log/sqrt, pi, e
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Basique,
    Scientifique,
}
