// src/ia.rs
//
// Collaborateur IA (service de complétion de texte, API type Gemini)
// ------------------------------------------------------------------
// Deux appels, tous deux one-shot, sans état, sans streaming :
// - resoudre_probleme : réponse STRUCTURÉE (solution + explication +
//   étapes), obtenue en contraignant le service par un responseSchema
//   JSON puis en parsant le texte retourné
// - expliquer_concept : texte libre ; en cas d'échec on journalise UNE
//   ligne et on retourne une chaîne de repli (jamais d'erreur propagée)
//
// Contrat de concurrence (côté appelant) : une seule requête en vol par
// action utilisateur, bouton désactivé pendant ce temps, exactement une
// complétion livrée par canal mpsc, pas de reprise, pas d'annulation.
//
// Les requêtes HTTP n'existent qu'en natif ; la version wasm affiche
// l'assistant comme indisponible (voir etat.rs).

use serde::Deserialize;
use thiserror::Error;

/// Réponse structurée du service pour une résolution de problème.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReponseIa {
    /// La réponse finale, seule.
    pub solution: String,
    /// Brève explication conceptuelle.
    pub explication: String,
    /// Étapes ordonnées de la résolution.
    pub etapes: Vec<String>,
}

/// Chaîne de repli quand l'explication libre échoue.
pub const REPLI_EXPLICATION: &str =
    "Impossible de générer une explication pour le moment.";

/// Un événement = exactement une complétion (succès ou échec) d'une
/// requête lancée par l'utilisateur.
#[derive(Debug)]
pub enum EvenementIa {
    Resolution(Result<ReponseIa, ErreurIa>),
    Explication(String),
}

/// Échecs du client IA. Jamais fatals pour la calculatrice : l'appelant
/// journalise une ligne et l'utilisateur peut simplement réessayer.
#[derive(Debug, Error)]
pub enum ErreurIa {
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {statut}: {corps}")]
    Http { statut: u16, corps: String },

    #[error("réponse illisible: {0}")]
    Json(#[from] serde_json::Error),

    #[error("réponse vide du service")]
    ReponseVide,
}

/* ------------------------ Corps de réponse generateContent ------------------------ */

#[derive(Debug, Deserialize)]
struct ReponseBrute {
    #[serde(default)]
    candidates: Vec<Candidat>,
}

#[derive(Debug, Deserialize)]
struct Candidat {
    content: ContenuCandidat,
}

#[derive(Debug, Deserialize)]
struct ContenuCandidat {
    #[serde(default)]
    parts: Vec<PartieCandidat>,
}

#[derive(Debug, Deserialize)]
struct PartieCandidat {
    #[serde(default)]
    text: String,
}

/// Premier texte non vide de la réponse, sinon `ReponseVide`.
fn extraire_texte(brute: ReponseBrute) -> Result<String, ErreurIa> {
    brute
        .candidates
        .into_iter()
        .flat_map(|c| c.content.parts)
        .map(|p| p.text)
        .find(|t| !t.is_empty())
        .ok_or(ErreurIa::ReponseVide)
}

/* ------------------------ Client HTTP (natif seulement) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
pub use natif::{lancer_explication, lancer_resolution, ClientIa};

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::sync::mpsc;

    use serde_json::{json, Value};
    use tracing::error;

    use super::{extraire_texte, ErreurIa, EvenementIa, ReponseBrute, ReponseIa};

    const BASE_DEFAUT: &str = "https://generativelanguage.googleapis.com";
    const MODELE_DEFAUT: &str = "gemini-2.5-flash";

    /// Client du point d'accès `generateContent`.
    pub struct ClientIa {
        http: reqwest::blocking::Client,
        base: String,
        cle: String,
        modele: String,
    }

    impl ClientIa {
        /// Base et clé explicites (tests contre un serveur maquette).
        pub fn new(base: impl Into<String>, cle: impl Into<String>) -> Self {
            Self {
                http: reqwest::blocking::Client::new(),
                base: base.into(),
                cle: cle.into(),
                modele: MODELE_DEFAUT.to_string(),
            }
        }

        /// Client de production : clé lue dans `GEMINI_API_KEY`.
        pub fn depuis_env() -> Self {
            let cle = std::env::var("GEMINI_API_KEY").unwrap_or_default();
            Self::new(BASE_DEFAUT, cle)
        }

        /// Résolution structurée d'un problème (expression OU énoncé en
        /// toutes lettres). L'échec est propagé : c'est l'appelant qui
        /// décide quoi afficher, sans toucher à l'état précédent.
        pub fn resoudre_probleme(&self, probleme: &str) -> Result<ReponseIa, ErreurIa> {
            let invite = format!(
                "Résous ce problème mathématique : \"{probleme}\". Réponds avec \
                 la réponse finale, une brève explication conceptuelle et des \
                 étapes numérotées claires."
            );

            let schema = json!({
                "type": "OBJECT",
                "properties": {
                    "solution": { "type": "STRING", "description": "La réponse finale seulement" },
                    "explication": { "type": "STRING", "description": "Brève explication conceptuelle" },
                    "etapes": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Étapes ordonnées de la résolution"
                    }
                },
                "required": ["solution", "explication", "etapes"]
            });

            let texte = self.generer(&invite, Some(schema))?;
            Ok(serde_json::from_str(&texte)?)
        }

        /// Explication libre d'un concept. Ne propage JAMAIS l'échec :
        /// une ligne de journal + chaîne de repli.
        pub fn expliquer_concept(&self, texte: &str) -> String {
            let invite = format!(
                "Explique le concept mathématique derrière cette expression : \
                 {texte}. Comment la résoudrais-tu ?"
            );

            match self.generer(&invite, None) {
                Ok(reponse) => reponse,
                Err(e) => {
                    error!("explication IA échouée: {e}");
                    super::REPLI_EXPLICATION.to_string()
                }
            }
        }

        /// Un appel `generateContent`, texte brut en retour.
        fn generer(&self, invite: &str, schema: Option<Value>) -> Result<String, ErreurIa> {
            let mut corps = json!({
                "contents": [ { "parts": [ { "text": invite } ] } ]
            });
            if let Some(schema) = schema {
                corps["generationConfig"] = json!({
                    "responseMimeType": "application/json",
                    "responseSchema": schema,
                });
            }

            let url = format!(
                "{}/v1beta/models/{}:generateContent",
                self.base, self.modele
            );

            let reponse = self
                .http
                .post(url)
                .query(&[("key", self.cle.as_str())])
                .json(&corps)
                .send()?;

            if !reponse.status().is_success() {
                let statut = reponse.status().as_u16();
                let corps = reponse.text().unwrap_or_default();
                return Err(ErreurIa::Http { statut, corps });
            }

            let brute: ReponseBrute = reponse.json()?;
            extraire_texte(brute)
        }
    }

    /// Lance UNE résolution sur un fil d'arrière-plan ; exactement un
    /// événement sera déposé sur le canal retourné.
    pub fn lancer_resolution(probleme: String) -> mpsc::Receiver<EvenementIa> {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let client = ClientIa::depuis_env();
            let resultat = client.resoudre_probleme(&probleme);
            let _ = tx.send(EvenementIa::Resolution(resultat));
        });
        rx
    }

    /// Lance UNE explication sur un fil d'arrière-plan ; le repli est
    /// déjà appliqué, l'événement porte donc toujours un texte.
    pub fn lancer_explication(texte: String) -> mpsc::Receiver<EvenementIa> {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let client = ClientIa::depuis_env();
            let explication = client.expliquer_concept(&texte);
            let _ = tx.send(EvenementIa::Explication(explication));
        });
        rx
    }
}

/* ------------------------ Tests ------------------------ */
