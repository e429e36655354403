use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use eframe::egui::{self, Color32, RichText};

use crate::io::{default_pdf_path, load_document};
use crate::model::{AppState, RunState};
use regdoc_common::{Locale, DEFAULT_PDF_FILENAME, SIGNATURE};

pub struct DesktopApp {
    state: AppState,
    run_rx: Option<Receiver<UiMessage>>,
    export_rx: Option<Receiver<UiMessage>>,
    exporting: bool,
    export_status: String,
}

enum UiMessage {
    RunDone {
        ok: bool,
        message: String,
        output: Option<PathBuf>,
    },
    ExportDone {
        message: String,
    },
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            run_rx: None,
            export_rx: None,
            exporting: false,
            export_status: String::new(),
        }
    }
}

impl DesktopApp {
    fn pick_base(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        {
            self.state.base_file = Some(path);
        }
    }

    fn pick_analysis(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_files()
        {
            if !paths.is_empty() {
                // replaced wholesale on re-selection
                self.state.analysis_files = paths;
            }
        }
    }

    fn run(&mut self) {
        if !self.state.can_run() {
            return;
        }
        let Some(base) = self.state.base_file.clone() else {
            return;
        };
        let Some(output) = rfd::FileDialog::new()
            .set_file_name("documento_unificado.md")
            .save_file()
        else {
            return;
        };

        // the prompt locale is fixed at run start; switching the UI locale
        // afterwards does not touch the in-flight child process
        let lang = self.state.locale.tag().to_string();
        let analysis = self.state.analysis_files.clone();

        self.state.begin_run();
        let (tx, rx) = mpsc::channel();
        self.run_rx = Some(rx);

        std::thread::spawn(move || {
            let mut args: Vec<String> = vec!["run".into(), base.display().to_string()];
            args.extend(analysis.iter().map(|p| p.display().to_string()));
            args.extend([
                "--lang".into(),
                lang,
                "--output".into(),
                output.display().to_string(),
            ]);

            let result = std::process::Command::new(resolve_cli_binary())
                .args(&args)
                .output();

            let message = match result {
                Ok(out) if out.status.success() => UiMessage::RunDone {
                    ok: true,
                    message: String::new(),
                    output: Some(output),
                },
                Ok(out) => {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    UiMessage::RunDone {
                        ok: false,
                        message: stderr.trim().to_string(),
                        output: None,
                    }
                }
                Err(err) => UiMessage::RunDone {
                    ok: false,
                    message: format!("{err}"),
                    output: None,
                },
            };
            let _ = tx.send(message);
        });
    }

    fn save_pdf(&mut self) {
        let Some(source) = self.state.source_path.clone() else {
            return;
        };
        let default_path = default_pdf_path(&source);
        let Some(output) = rfd::FileDialog::new()
            .set_file_name(
                default_path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or(DEFAULT_PDF_FILENAME),
            )
            .save_file()
        else {
            return;
        };

        let lang = self.state.locale.tag().to_string();
        let location = self.state.location.clone();
        let date = self.state.effective_date.clone();

        let (tx, rx) = mpsc::channel();
        self.export_rx = Some(rx);
        self.exporting = true;
        self.export_status.clear();

        std::thread::spawn(move || {
            let result = std::process::Command::new(resolve_cli_binary())
                .args([
                    "export",
                    source.display().to_string().as_str(),
                    "--output",
                    output.display().to_string().as_str(),
                    "--location",
                    location.as_str(),
                    "--date",
                    date.as_str(),
                    "--lang",
                    lang.as_str(),
                ])
                .output();

            let message = match result {
                Ok(out) if out.status.success() => UiMessage::ExportDone {
                    message: format!("✔ {}", output.display()),
                },
                Ok(out) => {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    UiMessage::ExportDone {
                        message: stderr.trim().to_string(),
                    }
                }
                Err(err) => UiMessage::ExportDone {
                    message: format!("{err}"),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn poll_messages(&mut self) {
        if let Some(rx) = &self.run_rx {
            if let Ok(msg) = rx.try_recv() {
                if let UiMessage::RunDone {
                    ok,
                    message,
                    output,
                } = msg
                {
                    self.run_rx = None;
                    let strings = self.state.locale.strings();
                    if ok {
                        match output.as_deref().map(load_document) {
                            Some(Ok(document)) => {
                                let path = output.unwrap_or_default();
                                self.state.complete_success(document, path);
                            }
                            Some(Err(err)) => {
                                self.state.complete_failure(format!("{err}"));
                            }
                            None => {
                                self.state
                                    .complete_failure(strings.error_generic.to_string());
                            }
                        }
                    } else {
                        let message = if message.is_empty() {
                            strings.error_generic.to_string()
                        } else {
                            message
                        };
                        self.state.complete_failure(message);
                    }
                }
            }
        }

        if let Some(rx) = &self.export_rx {
            if let Ok(msg) = rx.try_recv() {
                if let UiMessage::ExportDone { message } = msg {
                    self.export_status = message;
                    self.exporting = false;
                    self.export_rx = None;
                }
            }
        }
    }

    fn render_file_list(ui: &mut egui::Ui, files: &[PathBuf]) {
        for file in files {
            let name = file
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            ui.label(RichText::new(name).color(Color32::from_gray(170)).size(12.0));
        }
    }

    fn render_upload_cards(&mut self, ui: &mut egui::Ui) {
        let strings = self.state.locale.strings();
        let mut pick_base = false;
        let mut pick_analysis = false;

        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.heading(strings.base_file_title);
                ui.label(strings.base_file_desc);
                if ui.button(strings.upload_base).clicked() {
                    pick_base = true;
                }
                if let Some(base) = &self.state.base_file {
                    Self::render_file_list(ui, std::slice::from_ref(base));
                }
            });
            columns[1].group(|ui| {
                ui.heading(strings.analysis_files_title);
                ui.label(strings.analysis_files_desc);
                if ui.button(strings.upload_analysis).clicked() {
                    pick_analysis = true;
                }
                Self::render_file_list(ui, &self.state.analysis_files);
            });
        });

        if pick_base {
            self.pick_base();
        }
        if pick_analysis {
            self.pick_analysis();
        }
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        let strings = self.state.locale.strings();

        ui.horizontal(|ui| {
            ui.heading(strings.result_title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.exporting, egui::Button::new(strings.save_pdf))
                    .clicked()
                {
                    self.save_pdf();
                }
                if !self.export_status.is_empty() {
                    ui.label(
                        RichText::new(&self.export_status).color(Color32::from_rgb(246, 196, 69)),
                    );
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(&self.state.generated_doc);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.label(strings.location_label);
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.location).desired_width(160.0),
                    );
                    ui.label(strings.date_label);
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.effective_date)
                            .desired_width(100.0),
                    );
                });

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(SIGNATURE).strong());
                });
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.run_state == RunState::Running || self.exporting {
            ctx.request_repaint();
        }
        self.poll_messages();

        let strings = self.state.locale.strings();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(strings.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.state.locale == Locale::En, strings.lang_en)
                        .clicked()
                    {
                        self.state.locale = Locale::En;
                    }
                    if ui
                        .selectable_label(self.state.locale == Locale::Pt, strings.lang_pt)
                        .clicked()
                    {
                        self.state.locale = Locale::Pt;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_upload_cards(ui);
            ui.add_space(8.0);

            let strings = self.state.locale.strings();
            let running = self.state.run_state == RunState::Running;
            let label = if running {
                strings.analyzing
            } else {
                strings.analyze_btn
            };
            ui.vertical_centered(|ui| {
                if ui
                    .add_enabled(self.state.can_run(), egui::Button::new(label))
                    .clicked()
                {
                    self.run();
                }
            });

            if running {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label(strings.analyzing);
                });
            }

            if !self.state.error.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&self.state.error).color(Color32::from_rgb(220, 80, 80)),
                    );
                });
            }

            if self.state.has_result() {
                ui.add_space(8.0);
                self.render_result(ui);
            }
        });
    }
}

fn resolve_cli_binary() -> PathBuf {
    let name = format!("regdoc-ai{}", std::env::consts::EXE_SUFFIX);
    let exe = std::env::current_exe().ok();
    if let Some(base_dir) = exe.as_ref().and_then(|p| p.parent()) {
        let local = base_dir.join(&name);
        if local.exists() {
            return local;
        }
        if let Some(target_dir) = base_dir.parent() {
            for profile in ["debug", "release"] {
                let candidate = target_dir.join(profile).join(&name);
                if candidate.exists() {
                    return candidate;
                }
            }
        }
    }
    PathBuf::from("regdoc-ai")
}
