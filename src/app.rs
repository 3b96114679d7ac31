// src/app.rs
//
// Calculatrice IA — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + historique.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).
// - Le dépouillement du canal IA se fait ici, une fois par frame, avec
//   un repaint programmé tant qu'une requête est en vol.

pub mod etat;
pub mod historique;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Exactement une complétion par requête lancée : on la dépouille
        // ici plutôt que d'attendre un événement d'entrée utilisateur.
        self.recevoir_evenements_ia();
        if self.ia.en_cours {
            ctx.request_repaint_after(std::time::Duration::from_millis(120));
        }

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
