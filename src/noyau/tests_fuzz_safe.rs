//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - le générateur n'émet que des textes grammaticalement valides :
//!   seules les erreurs de CALCUL (division par zéro, domaine,
//!   dépassement) sont acceptées, jamais lexicales ni syntaxiques
//! - invariant clé : même texte évalué deux fois => mêmes bits

use std::time::{Duration, Instant};

use super::erreurs::ErreurNoyau;
use super::{evaluer_expression, Mode};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 => gen_nombre(rng),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        4 => format!("sqrt({})", rng.pick(20)),
        _ => format!("({})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("-({})", gen_expr(rng, depth - 1)),
        6 => format!("sin({})", gen_expr(rng, depth - 1)),
        7 => format!("cos({})", gen_expr(rng, depth - 1)),
        8 => format!("log({})", gen_expr(rng, depth - 1)),
        // exposant borné pour garder des sorties finies la plupart du temps
        _ => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_taxonomie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        let premier = evaluer_expression(&expr, Mode::Scientifique);
        let second = evaluer_expression(&expr, Mode::Scientifique);

        match (&premier, &second) {
            (Ok(a), Ok(b)) => {
                assert_eq!(
                    a.valeur.to_bits(),
                    b.valeur.to_bits(),
                    "non déterministe: {expr:?}"
                );
                assert!(a.valeur.is_finite(), "valeur non finie acceptée: {expr:?}");
                seen_ok += 1;
            }
            (Err(ea), Err(eb)) => {
                assert_eq!(ea, eb, "erreur non déterministe: {expr:?}");
                // Le générateur est grammaticalement correct : seules les
                // erreurs de calcul sont admissibles ici.
                assert!(
                    matches!(ea, ErreurNoyau::Calcul(_)),
                    "erreur inattendue pour {expr:?}: {ea}"
                );
                seen_err += 1;
            }
            _ => panic!("résultat instable entre deux appels: {expr:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_mode_basique_jamais_de_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        // En Basique le même texte peut être rejeté au lexique : tout est
        // accepté du moment que c'est une erreur typée, jamais un panic.
        let _ = evaluer_expression(&expr, Mode::Basique);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let ev = evaluer_expression(&expr, Mode::Basique).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400
    assert_eq!(ev.affichage, "400");
}

#[test]
fn parentheses_profondes_sans_debordement_de_pile() {
    let profondeur = 400;
    let expr = format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur));

    let ev = evaluer_expression(&expr, Mode::Basique).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(ev.affichage, "1");
}
