// src/noyau/analyse.rs
//
// Analyse descendante récursive -> AST
//
// Grammaire (du moins liant au plus liant, `^` associatif à droite) :
//
//   expression := terme (('+'|'-') terme)*
//   terme      := unaire (('*'|'/') unaire)*
//   unaire     := '-' unaire | puissance
//   puissance  := atome ('^' unaire)?
//   atome      := NOMBRE | CONSTANTE | '(' expression ')'
//               | FONCTION '(' expression ')'
//
// Choix assumé : PAS de multiplication implicite. `2(3+4)` ou `2pi`
// laissent des jetons après une expression complète => JetonRestant.
// Un opérateur explicite est toujours exigé.
//
// Déterminisme : même suite de jetons => arbre structurellement identique.

use super::erreurs::ErreurSyntaxe;
use super::expr::{Expr, OpBinaire};
use super::jetons::{Jeton, JetonPos};

/// Analyse une suite complète de jetons.
///
/// L'entrée vide est un garde-fou côté UI ; ici elle donne simplement
/// `FinInattendue` (jamais de panic).
pub fn analyser(jetons: &[JetonPos]) -> Result<Expr, ErreurSyntaxe> {
    let mut a = Analyseur { jetons, index: 0 };
    let expr = a.expression()?;

    if a.index < a.jetons.len() {
        return Err(ErreurSyntaxe::JetonRestant {
            index: a.index,
            position: a.jetons[a.index].position,
        });
    }
    Ok(expr)
}

struct Analyseur<'a> {
    jetons: &'a [JetonPos],
    index: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Jeton> {
        self.jetons.get(self.index).map(|j| &j.jeton)
    }

    fn avancer(&mut self) {
        self.index += 1;
    }

    /// expression := terme (('+'|'-') terme)*
    fn expression(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let mut gauche = self.terme()?;

        while let Some(op) = match self.courant() {
            Some(Jeton::Plus) => Some(OpBinaire::Plus),
            Some(Jeton::Moins) => Some(OpBinaire::Moins),
            _ => None,
        } {
            self.avancer();
            let droite = self.terme()?;
            gauche = Expr::Binaire(op, Box::new(gauche), Box::new(droite));
        }
        Ok(gauche)
    }

    /// terme := unaire (('*'|'/') unaire)*
    fn terme(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let mut gauche = self.unaire()?;

        while let Some(op) = match self.courant() {
            Some(Jeton::Fois) => Some(OpBinaire::Fois),
            Some(Jeton::Divise) => Some(OpBinaire::Divise),
            _ => None,
        } {
            self.avancer();
            let droite = self.unaire()?;
            gauche = Expr::Binaire(op, Box::new(gauche), Box::new(droite));
        }
        Ok(gauche)
    }

    /// unaire := '-' unaire | puissance
    ///
    /// `^` lie plus fort que le moins unaire : `-2^2` == `-(2^2)` == -4.
    fn unaire(&mut self) -> Result<Expr, ErreurSyntaxe> {
        if matches!(self.courant(), Some(Jeton::Moins)) {
            self.avancer();
            let operande = self.unaire()?;
            return Ok(Expr::Neg(Box::new(operande)));
        }
        self.puissance()
    }

    /// puissance := atome ('^' unaire)?
    ///
    /// L'exposant repasse par `unaire` : associativité à droite
    /// (`2^3^2` == `2^(3^2)`) et `2^-3` accepté.
    fn puissance(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let base = self.atome()?;

        if matches!(self.courant(), Some(Jeton::Puissance)) {
            self.avancer();
            let exposant = self.unaire()?;
            return Ok(Expr::Binaire(
                OpBinaire::Puissance,
                Box::new(base),
                Box::new(exposant),
            ));
        }
        Ok(base)
    }

    /// atome := NOMBRE | CONSTANTE | '(' expression ')' | FONCTION '(' expression ')'
    fn atome(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let Some(jeton) = self.courant() else {
            return Err(ErreurSyntaxe::FinInattendue);
        };

        match *jeton {
            Jeton::Nombre(v) => {
                self.avancer();
                Ok(Expr::Nombre(v))
            }

            Jeton::Constante(c) => {
                self.avancer();
                Ok(Expr::Constante(c))
            }

            Jeton::ParG => {
                self.avancer();
                let interieure = self.expression()?;
                self.exiger_par_fermante()?;
                Ok(interieure)
            }

            Jeton::Fonction(f) => {
                self.avancer();
                // Une fonction DOIT être immédiatement suivie de '('.
                if !matches!(self.courant(), Some(Jeton::ParG)) {
                    return Err(ErreurSyntaxe::FonctionSansParenthese {
                        index: self.index.saturating_sub(1),
                    });
                }
                self.avancer();
                let argument = self.expression()?;
                self.exiger_par_fermante()?;
                Ok(Expr::Appel(f, Box::new(argument)))
            }

            _ => Err(self.jeton_inattendu()),
        }
    }

    fn exiger_par_fermante(&mut self) -> Result<(), ErreurSyntaxe> {
        if matches!(self.courant(), Some(Jeton::ParD)) {
            self.avancer();
            return Ok(());
        }
        // Fin d'entrée OU autre jeton : dans les deux cas la parenthèse
        // ouverte n'est pas refermée là où on l'attend.
        match self.courant() {
            None => Err(ErreurSyntaxe::ParentheseNonFermee { index: self.index }),
            Some(_) => Err(self.jeton_inattendu()),
        }
    }

    /// Erreur "jeton inattendu" sur le jeton courant (qui existe).
    fn jeton_inattendu(&self) -> ErreurSyntaxe {
        ErreurSyntaxe::JetonInattendu {
            index: self.index,
            position: self.jetons[self.index].position,
        }
    }
}
