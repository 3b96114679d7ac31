// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace retire un motif complet
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Glyphes d'affichage × ÷ insérés tels quels (le noyau les traduit)
//
// Aucune logique d'évaluation ici : tout passe par etat.rs.

use eframe::egui;

use crate::noyau::Mode;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice IA");
                ui.add_space(6.0);

                self.ui_modes(ui);

                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_assistant(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut mode = self.mode;
            ui.selectable_value(&mut mode, Mode::Basique, "Basique");
            ui.selectable_value(&mut mode, Mode::Scientifique, "Scientifique");
            if mode != self.mode {
                self.basculer_mode(mode);
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, sin(pi/2), 2^10")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / fonctions / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
        }

        ui.add_space(6.0);

        // Résultat + erreur typée éventuelle
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(8.0);

        // Rangée scientifique (mode Scientifique seulement)
        if self.mode == Mode::Scientifique {
            ui.horizontal_wrapped(|ui| {
                self.bouton_insert(ui, "sin", "sin(");
                self.bouton_insert(ui, "cos", "cos(");
                self.bouton_insert(ui, "tan", "tan(");
                self.bouton_insert(ui, "log", "log(");
                self.bouton_insert(ui, "π", "pi");
                self.bouton_insert(ui, "e", "e");
                self.bouton_insert(ui, "^", "^");
                self.bouton_insert(ui, "√", "sqrt(");
            });
            ui.add_space(4.0);
        }

        self.ui_pave_numerique(ui);

        ui.add_space(8.0);

        self.ui_boutons_ia(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_effacer(ui);
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                self.bouton_insert(ui, "÷", "÷");
                ui.end_row();

                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "×", "×");
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "-", "-");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "+", "+");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_retour_arriere(ui);
                self.bouton_egal(ui);
                ui.end_row();
            });
    }

    fn ui_boutons_ia(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Une requête en vol à la fois : boutons désactivés pendant ce temps.
            let resoudre_actif = !self.ia.en_cours && !self.entree.trim().is_empty();
            let resoudre = ui
                .add_enabled(resoudre_actif, egui::Button::new("Résoudre par IA"))
                .on_hover_text("Résolution structurée (solution + étapes)");
            if resoudre.clicked() {
                self.demander_resolution();
            }

            let expliquer_actif = !self.ia.en_cours
                && (!self.entree.trim().is_empty() || !self.resultat.is_empty());
            let expliquer = ui
                .add_enabled(expliquer_actif, egui::Button::new("Expliquer"))
                .on_hover_text("Explication libre du concept");
            if expliquer.clicked() {
                self.demander_explication();
            }

            if self.ia.en_cours {
                ui.spinner();
                ui.label("Analyse en cours…");
            }
        });
    }

    fn ui_assistant(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Assistant IA")
            .default_open(true)
            .show(ui, |ui| {
                if let Some(analyse) = &self.ia.analyse {
                    ui.label("Résumé :");
                    Self::champ_monospace(ui, "ia_resume", &analyse.explication, 2);

                    ui.add_space(4.0);
                    ui.label("Étapes :");
                    for (i, etape) in analyse.etapes.iter().enumerate() {
                        ui.label(format!("{}. {etape}", i + 1));
                    }
                } else if let Some(explication) = &self.ia.explication {
                    Self::champ_monospace(ui, "ia_explication", explication, 4);
                } else if self.ia.en_cours {
                    ui.label("Analyse en cours…");
                } else {
                    ui.weak("Saisis une expression puis « Résoudre par IA ».");
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.est_vide() {
                    ui.weak("Aucun calcul pour l'instant.");
                    return;
                }

                if ui.button("Vider l'historique").clicked() {
                    self.historique.vider();
                    return;
                }

                // On collecte le clic d'abord : rappeler() veut &mut self.
                let mut a_rappeler = None;
                for calcul in self.historique.iter() {
                    let libelle = format!("{} = {}", calcul.expression, calcul.resultat);
                    let resp = ui
                        .button(libelle)
                        .on_hover_text(calcul.horodatage.format("%H:%M:%S").to_string());
                    if resp.clicked() {
                        a_rappeler = Some(calcul.clone());
                    }
                }
                if let Some(calcul) = a_rappeler {
                    self.rappeler(&calcul);
                }
            });
    }

    /* ------------------------ Helpers boutons ------------------------ */

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, a_inserer: &str) {
        let resp = ui.add_sized([46.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.saisir(a_inserer);
        }
    }

    fn bouton_effacer(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized([46.0, 30.0], egui::Button::new("C"))
            .on_hover_text("Efface entrée + résultat");
        if resp.clicked() {
            self.effacer();
        }
    }

    fn bouton_retour_arriere(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized([46.0, 30.0], egui::Button::new("DEL"))
            .on_hover_text("Efface le dernier symbole (ou motif complet)");
        if resp.clicked() {
            self.retour_arriere();
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add_sized([46.0, 30.0], egui::Button::new("="));
        if resp.clicked() {
            self.calculer();
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule stable, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
