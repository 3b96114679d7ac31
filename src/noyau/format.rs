// src/noyau/format.rs
//
// Affichage d'un résultat f64.
//
// Règles :
// - valeur entière (et |v| < 1e15) : pas de point décimal ("4", pas "4.0")
// - sinon : représentation décimale la plus courte qui retraverse
//   le parse sans perte (Display de f64 en Rust)
// - très grand / très petit : notation exposant
// - -0.0 s'affiche "0"

/// Plancher/plafond au-delà desquels on bascule en notation exposant.
const SEUIL_EXPOSANT_HAUT: f64 = 1e15;
const SEUIL_EXPOSANT_BAS: f64 = 1e-9;

pub fn formater_valeur(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if abs >= SEUIL_EXPOSANT_HAUT || abs < SEUIL_EXPOSANT_BAS {
        return format!("{v:e}");
    }

    if v.fract() == 0.0 {
        // |v| < 1e15 : la conversion i64 est exacte.
        return format!("{}", v as i64);
    }

    format!("{v}")
}
