//! src/app/historique.rs
//!
//! Historique des calculs : liste bornée, en mémoire seulement.
//!
//! Contrats :
//! - ajout en tête (le plus récent d'abord)
//! - plafond de 50 entrées : au-delà, la plus ancienne est évincée
//! - ids monotones (jamais réutilisés), horodatage à la création
//! - aucune persistance disque

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Plafond d'entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 50;

/// Une évaluation réussie, telle qu'affichée dans le panneau historique.
#[derive(Clone, Debug)]
pub struct Calcul {
    pub id: u64,
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Local>,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<Calcul>,
    prochain_id: u64,
}

impl Historique {
    /// Ajoute une entrée en tête et évince la plus ancienne si le
    /// plafond est atteint.
    pub fn ajouter(&mut self, expression: String, resultat: String) {
        let calcul = Calcul {
            id: self.prochain_id,
            expression,
            resultat,
            horodatage: Local::now(),
        };
        self.prochain_id += 1;

        self.entrees.push_front(calcul);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    /// Itère du plus récent au plus ancien.
    pub fn iter(&self) -> impl Iterator<Item = &Calcul> {
        self.entrees.iter()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn longueur(&self) -> usize {
        self.entrees.len()
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }
}
