use egui::{
    Area,
    Button,
    CentralPanel,
    Color32,
    Context,
    Frame,
    Id,
    Label,
    Margin,
    Order,
    RichText,
    ScrollArea,
    Sense,
    Stroke,
    Window,
    text::{CCursor, CCursorRange},
};

use app_api::UiApp;
use core_types::{FieldIndex, Point, SurfaceKind};
use form::{FormPhase, HostForm};
use input_core::{SelectionRange, byte_offset_for_char, char_offset_for_byte};
use keyboard::{FocusedTarget, Key, KeyLayout, KeyOutcome, KeyboardOverlay};

use crate::config::Config;

const KEY_UNIT: f32 = 36.0;
const KEY_HEIGHT: f32 = 36.0;
const KEY_FILL: Color32 = Color32::from_gray(68);
const KEY_LATCHED_FILL: Color32 = Color32::from_rgb(45, 110, 170);
const PANEL_FILL: Color32 = Color32::from_gray(51);

fn field_id(index: FieldIndex) -> Id {
    Id::new(("vkeyboard-field", index))
}

/// The host form with its on-screen keyboard.
pub struct KeyboardFormApp {
    form: HostForm,
    overlay: KeyboardOverlay<FieldIndex>,
    rows: usize,
    message: Option<String>,
}

impl Default for KeyboardFormApp {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl KeyboardFormApp {
    pub fn from_config(config: &Config) -> Self {
        let overlay = KeyboardOverlay::new(KeyLayout::qwerty())
            .with_visible(config.keyboard.visible)
            .with_position(config.keyboard.position())
            .with_tab_caret(config.keyboard.tab_caret);

        Self {
            form: HostForm::new(config.form.field_count),
            overlay,
            rows: config.form.rows,
            message: None,
        }
    }

    pub fn form(&self) -> &HostForm {
        &self.form
    }

    pub fn overlay(&self) -> &KeyboardOverlay<FieldIndex> {
        &self.overlay
    }

    /// Focus-in from one of the text areas.
    fn field_focused(&mut self, index: FieldIndex) {
        if let Err(err) = self.form.focus(index) {
            log::warn!(target: "form_ui", "focus rejected: {err}");
            return;
        }
        self.overlay.focus_in(index, SurfaceKind::MultiLineInput);
    }

    /// Route one key press from the overlay into the focused field.
    ///
    /// Returns the field and caret to restore when the value changed.
    pub fn press_key(&mut self, key: Key) -> Option<(FieldIndex, usize)> {
        let focused = self.overlay.focused().filter(|_| !self.form.is_submitted());
        let snapshot = focused.and_then(|index| {
            let value = self.form.value(index)?.to_owned();
            let range = self.form.caret_range(index)?;
            Some((index, value, range))
        });
        let target = snapshot
            .as_ref()
            .map(|(_, value, range)| FocusedTarget::new(value, *range));
        let edit_index = snapshot.as_ref().map(|(index, _, _)| *index);

        let form = &mut self.form;
        let mut applied = None;
        let outcome = self.overlay.press(key, target, |edit| {
            let Some(index) = edit_index else {
                return;
            };
            match form.apply_edit(index, edit.value.clone(), edit.caret) {
                Ok(()) => applied = Some((index, edit.caret)),
                Err(err) => log::warn!(target: "form_ui", "edit rejected: {err}"),
            }
        });

        if outcome == KeyOutcome::Dropped {
            log::debug!(target: "form_ui", "{key} dropped: no focused field");
        }
        applied
    }

    /// Record the widget's caret, given in chars, as the field's byte range.
    fn sync_caret(&mut self, index: FieldIndex, text: &str, anchor: usize, caret: usize) {
        let range = SelectionRange::new(
            byte_offset_for_char(text, anchor),
            byte_offset_for_char(text, caret),
        );
        if let Err(err) = self.form.set_caret_range(index, range) {
            log::warn!(target: "form_ui", "caret sync rejected: {err}");
        }
    }

    fn ui_fields(&mut self, ui: &mut egui::Ui) {
        for index in 0..self.form.len() {
            let mut text = self.form.value(index).unwrap_or_default().to_owned();
            let output = egui::TextEdit::multiline(&mut text)
                .id(field_id(index))
                .hint_text(format!("Text Field {}", index + 1))
                .desired_rows(self.rows)
                .desired_width(f32::INFINITY)
                .show(ui);
            let response = &output.response;

            if response.gained_focus() {
                self.field_focused(index);
            }
            if response.changed() {
                if let Err(err) = self.form.set_value(index, text.clone()) {
                    log::warn!(target: "form_ui", "typing rejected: {err}");
                }
            }
            if response.has_focus() {
                if let Some(range) = output.state.cursor.char_range() {
                    self.sync_caret(index, &text, range.secondary.index, range.primary.index);
                }
            }

            if ui.button(format!("Show Value {}", index + 1)).clicked() {
                match self.form.value_message(index) {
                    Ok(message) => self.message = Some(message),
                    Err(err) => log::warn!(target: "form_ui", "{err}"),
                }
            }
            ui.add_space(8.0);
        }

        if ui.button("Submit Form").clicked() {
            self.form.submit();
        }
    }

    fn ui_submitted(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Submitted Values:").strong());
        for line in self.form.submitted_lines() {
            ui.label(format!("• {line}"));
        }
        ui.add_space(8.0);
        if ui.button("Reset Form").clicked() {
            self.form.reset();
        }
    }

    fn ui_message(&mut self, ctx: &Context) {
        let Some(message) = self.message.as_deref() else {
            return;
        };
        let mut close = false;
        Window::new("Show Value")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close {
            self.message = None;
        }
    }

    fn ui_overlay(&mut self, ctx: &Context) {
        if !self.overlay.is_visible() {
            return;
        }

        let modifiers = self.overlay.modifiers();
        let origin = self.overlay.position();
        let mut pressed = None;
        let mut handle = None;

        Area::new(Id::new("vkeyboard-overlay"))
            .order(Order::Foreground)
            .fixed_pos(egui::pos2(origin.x, origin.y))
            .show(ctx, |ui| {
                Frame::new()
                    .fill(PANEL_FILL)
                    .stroke(Stroke::new(1.0, Color32::from_gray(90)))
                    .corner_radius(6.0)
                    .inner_margin(Margin::symmetric(10, 10))
                    .show(ui, |ui| {
                        handle = Some(ui.add(
                            Label::new(RichText::new("⠿ Keyboard").color(Color32::LIGHT_GRAY))
                                .sense(Sense::drag()),
                        ));

                        for row in self.overlay.layout().rows() {
                            ui.horizontal(|ui| {
                                for &key in row {
                                    let latched =
                                        key.modifier().is_some_and(|m| modifiers.is_active(m));
                                    let button = Button::new(
                                        RichText::new(key.caption(modifiers)).color(Color32::WHITE),
                                    )
                                    .fill(if latched { KEY_LATCHED_FILL } else { KEY_FILL })
                                    .min_size(egui::vec2(key.width_units() * KEY_UNIT, KEY_HEIGHT));

                                    if ui.add(button).clicked() {
                                        pressed = Some(key);
                                    }
                                }
                            });
                        }
                    });
            });

        if let Some(handle) = handle {
            let pointer = ctx
                .pointer_interact_pos()
                .map(|p| Point::new(p.x, p.y));
            if handle.drag_started() {
                if let Some(pointer) = pointer {
                    self.overlay.pointer_down(pointer);
                }
            }
            if handle.dragged() {
                if let Some(pointer) = pointer {
                    self.overlay.pointer_move(pointer);
                }
            }
            if handle.drag_stopped() {
                self.overlay.pointer_up();
            }
        }

        if let Some(key) = pressed {
            if let Some((index, caret)) = self.press_key(key) {
                self.restore_focus(ctx, index, caret);
            }
        }
    }

    /// Put keyboard focus back on the edited field with the caret at `caret`.
    fn restore_focus(&self, ctx: &Context, index: FieldIndex, caret: usize) {
        let id = field_id(index);
        let value = self.form.value(index).unwrap_or_default();
        let cursor = CCursor::new(char_offset_for_byte(value, caret));

        let mut state = egui::TextEdit::load_state(ctx, id).unwrap_or_default();
        state.cursor.set_char_range(Some(CCursorRange::one(cursor)));
        state.store(ctx, id);
        ctx.memory_mut(|mem| mem.request_focus(id));
    }
}

impl UiApp for KeyboardFormApp {
    fn ui(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Virtual Keyboard Form Example");
            ui.add_space(4.0);

            let toggle = if self.overlay.is_visible() {
                "⌨ Hide Keyboard"
            } else {
                "⌨ Show Keyboard"
            };
            if ui.button(toggle).clicked() {
                self.overlay.toggle_visible();
            }
            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                match self.form.phase() {
                    FormPhase::Editing => self.ui_fields(ui),
                    FormPhase::Submitted => self.ui_submitted(ui),
                }
            });
        });

        self.ui_message(ctx);
        self.ui_overlay(ctx);
    }

    fn title(&self) -> String {
        "Virtual Keyboard Form".to_string()
    }
}
