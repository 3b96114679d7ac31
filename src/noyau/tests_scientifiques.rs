//! Tests du noyau : arithmétique, priorités, modes, erreurs typées.
//!
//! Tout passe par le pipeline public `evaluer_expression`, comme le fera
//! l'UI. Les valeurs trig sont vérifiées avec tolérance ; les affichages
//! entiers sont vérifiés au caractère près ("4", jamais "4.0").

use super::erreurs::{ErreurCalcul, ErreurLexicale, ErreurNoyau, ErreurSyntaxe};
use super::eval::Evaluation;
use super::{evaluer_expression, Mode};

fn ok(s: &str) -> Evaluation {
    evaluer_expression(s, Mode::Scientifique)
        .unwrap_or_else(|e| panic!("evaluer_expression({s:?}) erreur: {e}"))
}

fn ok_basique(s: &str) -> Evaluation {
    evaluer_expression(s, Mode::Basique)
        .unwrap_or_else(|e| panic!("evaluer_expression({s:?}) erreur: {e}"))
}

fn err(s: &str) -> ErreurNoyau {
    match evaluer_expression(s, Mode::Scientifique) {
        Ok(ev) => panic!("{s:?} aurait dû échouer, a donné {ev:?}"),
        Err(e) => e,
    }
}

fn proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "attendu {b}, obtenu {a}");
}

/* ------------------------ Arithmétique + priorités ------------------------ */

#[test]
fn addition_simple_affichage_entier() {
    let ev = ok_basique("2+2");
    assert_eq!(ev.affichage, "4");
    assert_eq!(ev.valeur, 4.0);
}

#[test]
fn priorite_multiplication_sur_addition() {
    assert_eq!(ok("2+3*4").valeur, 14.0);
    assert_eq!(ok("2*3+4").valeur, 10.0);
}

#[test]
fn parentheses_prennent_le_dessus() {
    let ev = ok("(2+3)*4");
    assert_eq!(ev.affichage, "20");
}

#[test]
fn puissance_2_10() {
    let ev = ok("2^10");
    assert_eq!(ev.affichage, "1024");
}

#[test]
fn puissance_associative_a_droite() {
    // 2^3^2 == 2^(3^2) == 512, pas (2^3)^2 == 64
    assert_eq!(ok("2^3^2").valeur, 512.0);
}

#[test]
fn puissance_lie_plus_fort_que_moins_unaire() {
    assert_eq!(ok("-2^2").valeur, -4.0);
    assert_eq!(ok("(-2)^2").valeur, 4.0);
}

#[test]
fn puissance_exposant_negatif_et_fractionnaire() {
    proche(ok("2^-3").valeur, 0.125);
    proche(ok("4^0.5").valeur, 2.0);
    proche(ok("9^(1/2)").valeur, 3.0);
}

#[test]
fn moins_unaire_simple_et_double() {
    assert_eq!(ok("-5+3").valeur, -2.0);
    assert_eq!(ok("--5").valeur, 5.0);
    assert_eq!(ok("-(1+2)").valeur, -3.0);
}

#[test]
fn division_decimale() {
    assert_eq!(ok("1/4").affichage, "0.25");
    assert_eq!(ok("8/2").affichage, "4");
    assert_eq!(ok("1/3").affichage, "0.3333333333333333");
}

#[test]
fn glyphes_affichage_et_double_etoile() {
    assert_eq!(ok_basique("6×7").affichage, "42");
    assert_eq!(ok_basique("9÷3").affichage, "3");
    assert_eq!(ok("2**5").affichage, "32");
}

#[test]
fn formes_de_litteraux() {
    assert_eq!(ok(".5").valeur, 0.5);
    assert_eq!(ok("2.").valeur, 2.0);
    assert_eq!(ok("2.5").valeur, 2.5);
}

#[test]
fn espaces_ignores() {
    assert_eq!(ok_basique("  1 + 2  ").affichage, "3");
}

#[test]
fn idempotence_meme_texte_meme_bits() {
    for s in ["1/3", "sin(1)+cos(2)", "2^0.5", "(7-2)*3"] {
        let a = ok(s).valeur;
        let b = ok(s).valeur;
        assert_eq!(a.to_bits(), b.to_bits(), "non déterministe pour {s:?}");
    }
}

/* ------------------------ Fonctions + constantes ------------------------ */

#[test]
fn constantes_pi_et_e() {
    proche(ok("pi").valeur, std::f64::consts::PI);
    proche(ok("2*e").valeur, 2.0 * std::f64::consts::E);
    proche(ok("π").valeur, std::f64::consts::PI);
}

#[test]
fn trig_en_radians() {
    proche(ok("sin(0)").valeur, 0.0);
    proche(ok("cos(0)").valeur, 1.0);
    proche(ok("sin(pi/2)").valeur, 1.0);
    proche(ok("tan(pi/4)").valeur, 1.0);
}

#[test]
fn log_decimal_et_racine() {
    proche(ok("log(1000)").valeur, 3.0);
    assert_eq!(ok("sqrt(16)").affichage, "4");
    assert_eq!(ok("√(9)").affichage, "3");
}

#[test]
fn noms_sensibles_a_la_casse() {
    assert!(matches!(
        err("SIN(1)"),
        ErreurNoyau::Lexicale(ErreurLexicale::MotInconnu { .. })
    ));
}

/* ------------------------ Erreurs de calcul ------------------------ */

#[test]
fn division_par_zero() {
    assert_eq!(
        err("1/0"),
        ErreurNoyau::Calcul(ErreurCalcul::DivisionParZero)
    );
    // Le diviseur nul prime sur le filet "non fini".
    assert_eq!(
        err("(2+3)/(1-1)"),
        ErreurNoyau::Calcul(ErreurCalcul::DivisionParZero)
    );
}

#[test]
fn racine_d_un_negatif() {
    assert_eq!(
        err("sqrt(-1)"),
        ErreurNoyau::Calcul(ErreurCalcul::Domaine { fonction: "sqrt" })
    );
}

#[test]
fn log_non_positif() {
    assert_eq!(
        err("log(0)"),
        ErreurNoyau::Calcul(ErreurCalcul::Domaine { fonction: "log" })
    );
    assert_eq!(
        err("log(-3)"),
        ErreurNoyau::Calcul(ErreurCalcul::Domaine { fonction: "log" })
    );
}

#[test]
fn puissance_complexe_refusee() {
    // (-8)^(1/3) serait complexe en convention powf : domaine, pas débordement.
    assert_eq!(
        err("(-8)^(1/3)"),
        ErreurNoyau::Calcul(ErreurCalcul::Domaine { fonction: "^" })
    );
}

#[test]
fn debordement() {
    assert_eq!(
        err("10^1000"),
        ErreurNoyau::Calcul(ErreurCalcul::Debordement)
    );
    assert_eq!(
        err("10^400*10^400"),
        ErreurNoyau::Calcul(ErreurCalcul::Debordement)
    );
}

/* ------------------------ Erreurs de syntaxe ------------------------ */

#[test]
fn fonction_non_terminee() {
    // "sin(" : ParseError propre, pas de panic.
    assert!(matches!(err("sin("), ErreurNoyau::Syntaxe(_)));
}

#[test]
fn fonction_sans_parenthese() {
    assert_eq!(
        err("sin 5"),
        ErreurNoyau::Syntaxe(ErreurSyntaxe::FonctionSansParenthese { index: 0 })
    );
}

#[test]
fn parenthese_non_fermee() {
    assert_eq!(
        err("(1+2"),
        ErreurNoyau::Syntaxe(ErreurSyntaxe::ParentheseNonFermee { index: 4 })
    );
}

#[test]
fn parenthese_fermante_orpheline() {
    assert_eq!(
        err(")"),
        ErreurNoyau::Syntaxe(ErreurSyntaxe::JetonInattendu {
            index: 0,
            position: 0
        })
    );
}

#[test]
fn operateur_sans_operande() {
    assert!(matches!(err("1+"), ErreurNoyau::Syntaxe(ErreurSyntaxe::FinInattendue)));
    assert!(matches!(
        err("*2"),
        ErreurNoyau::Syntaxe(ErreurSyntaxe::JetonInattendu { index: 0, .. })
    ));
}

#[test]
fn multiplication_implicite_refusee() {
    assert_eq!(
        err("2(3+4)"),
        ErreurNoyau::Syntaxe(ErreurSyntaxe::JetonRestant {
            index: 1,
            position: 1
        })
    );
    assert_eq!(
        err("2pi"),
        ErreurNoyau::Syntaxe(ErreurSyntaxe::JetonRestant {
            index: 1,
            position: 1
        })
    );
}

#[test]
fn entree_vide_est_une_fin_inattendue() {
    // Le garde-fou "entrée vide" vit côté UI ; le noyau, lui, répond
    // proprement au lieu de paniquer.
    assert!(matches!(err(""), ErreurNoyau::Syntaxe(ErreurSyntaxe::FinInattendue)));
}

/* ------------------------ Erreurs lexicales + modes ------------------------ */

#[test]
fn caractere_inconnu_avec_position() {
    assert_eq!(
        err("2$3"),
        ErreurNoyau::Lexicale(ErreurLexicale::CaractereInattendu {
            caractere: '$',
            position: 1
        })
    );
}

#[test]
fn point_seul_refuse() {
    assert!(matches!(
        err("."),
        ErreurNoyau::Lexicale(ErreurLexicale::NombreInvalide { position: 0 })
    ));
}

#[test]
fn mode_basique_rejette_le_scientifique() {
    for s in ["sin(1)", "2^3", "pi", "2**3", "√(4)"] {
        match evaluer_expression(s, Mode::Basique) {
            Err(ErreurNoyau::Lexicale(ErreurLexicale::ReserveScientifique { .. })) => {}
            autre => panic!("{s:?} en Basique: attendu ReserveScientifique, obtenu {autre:?}"),
        }
    }
}

#[test]
fn mode_basique_garde_l_arithmetique() {
    assert_eq!(ok_basique("(1+2)*3-4/2").affichage, "7");
}
