//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau embarqué).
//!
//! Rôle : contenir TOUT l'état de la calculatrice (entrée, résultat,
//! mode, historique, panneau assistant) en champs explicites, et offrir
//! des opérations simples. Le noyau et le client IA restent des services
//! purs appelés d'ici : aucun singleton mutable global.
//!
//! Contrats :
//! - aucune évaluation dans la vue : tout passe par `calculer()`
//! - une seule requête IA en vol (drapeau `en_cours` explicite)
//! - un échec de calcul affiche "Erreur" + le message typé, sans jamais
//!   corrompre l'historique ni l'état de l'assistant

use std::sync::mpsc;

use tracing::error;

use crate::ia::{EvenementIa, ReponseIa};
use crate::noyau::{self, Mode};

use super::historique::{Calcul, Historique};

/// Affiché à la place du résultat quand l'évaluation échoue.
const AFFICHAGE_ERREUR: &str = "Erreur";

/// État du panneau assistant.
///
/// `recepteur` ne porte jamais plus d'une complétion : le fil
/// d'arrière-plan envoie exactement un événement puis se termine.
#[derive(Debug, Default)]
pub struct EtatIa {
    pub en_cours: bool,
    pub analyse: Option<ReponseIa>,
    pub explication: Option<String>,
    pub recepteur: Option<mpsc::Receiver<EvenementIa>>,
}

#[derive(Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub mode: Mode,

    // --- sorties ---
    pub resultat: String, // affichage formaté, ou "Erreur"
    pub erreur: String,   // message typé détaillé (vide si tout va bien)

    // --- historique (plafonné, plus récent d'abord) ---
    pub historique: Historique,

    // --- assistant IA ---
    pub ia: EtatIa,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            mode: Mode::Basique,
            resultat: String::new(),
            erreur: String::new(),
            historique: Historique::default(),
            ia: EtatIa::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Ajoute du texte à l'entrée. Toute saisie invalide les panneaux
    /// assistant (ils décrivaient l'expression précédente).
    pub fn saisir(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.ia.analyse = None;
        self.ia.explication = None;
        self.focus_entree = true;
    }

    /// C : efface entrée + résultat + panneaux assistant.
    /// (L'historique survit, c'est son rôle.)
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.ia.analyse = None;
        self.ia.explication = None;
        self.focus_entree = true;
    }

    /// Retire d'un coup les motifs insérés par les boutons ("sin(",
    /// "pi", …), sinon un caractère.
    pub fn retour_arriere(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        for motif in ["sqrt(", "sin(", "cos(", "tan(", "log(", "pi"] {
            if self.entree.ends_with(motif) {
                for _ in 0..motif.chars().count() {
                    self.entree.pop();
                }
                self.focus_entree = true;
                return;
            }
        }

        self.entree.pop();
        self.focus_entree = true;
    }

    pub fn basculer_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue l'entrée via le noyau. Entrée vide = non-opération
    /// (garde-fou UI, pas une erreur).
    pub fn calculer(&mut self) {
        let texte = self.entree.trim();
        if texte.is_empty() {
            return;
        }

        match noyau::evaluer_expression(texte, self.mode) {
            Ok(ev) => {
                self.resultat = ev.affichage.clone();
                self.erreur.clear();
                self.historique.ajouter(self.entree.clone(), ev.affichage);
            }
            Err(e) => {
                self.resultat = AFFICHAGE_ERREUR.to_string();
                self.erreur = e.to_string();
            }
        }
        self.focus_entree = true;
    }

    /// Clic sur une entrée d'historique : restaure expression + résultat.
    pub fn rappeler(&mut self, calcul: &Calcul) {
        self.entree = calcul.expression.clone();
        self.resultat = calcul.resultat.clone();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /* ------------------------ Assistant IA ------------------------ */

    /// Lance UNE résolution structurée de l'entrée courante.
    /// Sans effet si une requête est déjà en vol ou si l'entrée est vide.
    pub fn demander_resolution(&mut self) {
        if self.ia.en_cours || self.entree.trim().is_empty() {
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.ia.en_cours = true;
            self.ia.analyse = None;
            self.ia.recepteur = Some(crate::ia::lancer_resolution(self.entree.clone()));
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.ia.explication = Some("Assistant indisponible dans la version web.".to_string());
        }
    }

    /// Lance UNE explication libre (de l'entrée, sinon du dernier résultat).
    pub fn demander_explication(&mut self) {
        if self.ia.en_cours {
            return;
        }
        let texte = if !self.entree.trim().is_empty() {
            self.entree.clone()
        } else if !self.resultat.is_empty() {
            self.resultat.clone()
        } else {
            return;
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.ia.en_cours = true;
            self.ia.recepteur = Some(crate::ia::lancer_explication(texte));
        }

        #[cfg(target_arch = "wasm32")]
        {
            let _ = texte;
            self.ia.explication = Some("Assistant indisponible dans la version web.".to_string());
        }
    }

    /// À appeler à chaque frame : dépouille la complétion éventuelle.
    /// Un échec de résolution laisse l'état précédent intact, on ne
    /// surface qu'un message générique (le détail part au journal).
    pub fn recevoir_evenements_ia(&mut self) {
        let Some(recepteur) = &self.ia.recepteur else {
            return;
        };

        match recepteur.try_recv() {
            Ok(evenement) => {
                self.ia.en_cours = false;
                self.ia.recepteur = None;

                match evenement {
                    EvenementIa::Resolution(Ok(reponse)) => {
                        self.resultat = reponse.solution.clone();
                        self.erreur.clear();
                        self.ia.analyse = Some(reponse);
                    }
                    EvenementIa::Resolution(Err(e)) => {
                        error!("résolution IA échouée: {e}");
                        self.erreur = "Le service IA n'a pas répondu.".to_string();
                    }
                    EvenementIa::Explication(texte) => {
                        self.ia.explication = Some(texte);
                    }
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                // Fil mort sans complétion : on libère le drapeau.
                error!("canal IA interrompu sans réponse");
                self.ia.en_cours = false;
                self.ia.recepteur = None;
                self.erreur = "Le service IA n'a pas répondu.".to_string();
            }
        }
    }
}
