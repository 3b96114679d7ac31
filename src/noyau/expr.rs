// src/noyau/expr.rs
//
// AST du noyau + types de domaine (fonctions, constantes).
//
// L'arbre est construit bas-haut par l'analyseur, consommé haut-bas
// (post-ordre) par l'évaluateur, puis jeté. Propriétaire unique,
// aucun partage, aucun cycle.

/// Constante nommée reconnue par le tokenizer (mode scientifique).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }

}

/// Fonction unaire reconnue par le tokenizer (mode scientifique).
///
/// - trig en RADIANS (pas de mode degrés)
/// - `Log` = logarithme décimal (base 10), comme la touche `log`
///   d'une calculatrice de poche
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Racine,
}

impl Fonction {
    /// Nom tel que tapé (sensible à la casse).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Racine => "sqrt",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "sqrt" => Some(Fonction::Racine),
            _ => None,
        }
    }
}

/// Opérateur binaire infixe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

/// Nœud d'expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Constante(Constante),
    Neg(Box<Expr>),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
    Appel(Fonction, Box<Expr>),
}
