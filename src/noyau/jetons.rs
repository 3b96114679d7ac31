// src/noyau/jetons.rs
//
// Tokenisation.
//
// Un seul balayage gauche-droite, sans mutation de l'entrée, qui produit
// une suite de jetons en lecture seule. Chaque jeton retient sa position
// (index de caractère) pour les messages d'erreur.
//
// Le mode filtre l'alphabet DÈS ICI :
// - Basique      : chiffres, '.', + - * / ( ) et les glyphes × ÷
// - Scientifique : en plus ^ (ou **), sin cos tan log sqrt (ou √),
//                  pi (ou π), e — noms sensibles à la casse

use super::erreurs::ErreurLexicale;
use super::expr::{Constante, Fonction};
use super::Mode;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Constante(Constante),
    Fonction(Fonction),

    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,

    ParG,
    ParD,
}

/// Jeton + position (index de caractère dans l'entrée).
#[derive(Clone, Debug, PartialEq)]
pub struct JetonPos {
    pub jeton: Jeton,
    pub position: usize,
}

fn pousser(out: &mut Vec<JetonPos>, jeton: Jeton, position: usize) {
    out.push(JetonPos { jeton, position });
}

/// Tokenize une chaîne en jetons.
///
/// Littéraux numériques acceptés : `3`, `.5`, `2.`, `2.5`.
/// Glyphes d'affichage traduits au vol : × -> *, ÷ -> /, π -> pi,
/// √ -> sqrt, ** -> ^.
pub fn tokenize(s: &str, mode: Mode) -> Result<Vec<JetonPos>, ErreurLexicale> {
    let mut out: Vec<JetonPos> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            pousser(&mut out, Jeton::ParG, i);
            i += 1;
            continue;
        }
        if c == ')' {
            pousser(&mut out, Jeton::ParD, i);
            i += 1;
            continue;
        }

        // Opérateurs (glyphes × ÷ inclus)
        match c {
            '+' => {
                pousser(&mut out, Jeton::Plus, i);
                i += 1;
                continue;
            }
            '-' => {
                pousser(&mut out, Jeton::Moins, i);
                i += 1;
                continue;
            }
            '*' => {
                // "**" = puissance (notation alternative de ^)
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    exiger_scientifique(mode, "^", i)?;
                    pousser(&mut out, Jeton::Puissance, i);
                    i += 2;
                } else {
                    pousser(&mut out, Jeton::Fois, i);
                    i += 1;
                }
                continue;
            }
            '×' => {
                pousser(&mut out, Jeton::Fois, i);
                i += 1;
                continue;
            }
            '/' | '÷' => {
                pousser(&mut out, Jeton::Divise, i);
                i += 1;
                continue;
            }
            '^' => {
                exiger_scientifique(mode, "^", i)?;
                pousser(&mut out, Jeton::Puissance, i);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Constante π (glyphe)
        if c == 'π' {
            exiger_scientifique(mode, "pi", i)?;
            pousser(&mut out, Jeton::Constante(Constante::Pi), i);
            i += 1;
            continue;
        }

        // Racine carrée unicode : √ => sqrt
        if c == '√' {
            exiger_scientifique(mode, "sqrt", i)?;
            pousser(&mut out, Jeton::Fonction(Fonction::Racine), i);
            i += 1;
            continue;
        }

        // Identifiants ASCII : lettres seulement, SENSIBLES à la casse
        if c.is_ascii_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();

            // Mot inconnu d'abord (quel que soit le mode), garde de mode ensuite.
            let jeton = if mot == "pi" {
                Jeton::Constante(Constante::Pi)
            } else if mot == "e" {
                Jeton::Constante(Constante::E)
            } else if let Some(f) = Fonction::depuis_nom(&mot) {
                Jeton::Fonction(f)
            } else {
                return Err(ErreurLexicale::MotInconnu {
                    mot,
                    position: debut,
                });
            };

            exiger_scientifique(mode, &mot, debut)?;
            pousser(&mut out, jeton, debut);
            continue;
        }

        // Littéral numérique : chiffres, un seul point décimal optionnel.
        // `.5` et `2.` sont acceptés, `.` seul est refusé.
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let litteral: String = chars[debut..i].iter().collect();

            let valeur: f64 = litteral
                .parse()
                .map_err(|_| ErreurLexicale::NombreInvalide { position: debut })?;

            pousser(&mut out, Jeton::Nombre(valeur), debut);
            continue;
        }

        return Err(ErreurLexicale::CaractereInattendu {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Garde de mode : en Basique, tout symbole scientifique est hors alphabet.
fn exiger_scientifique(mode: Mode, symbole: &str, position: usize) -> Result<(), ErreurLexicale> {
    match mode {
        Mode::Scientifique => Ok(()),
        Mode::Basique => Err(ErreurLexicale::ReserveScientifique {
            symbole: symbole.to_string(),
            position,
        }),
    }
}
