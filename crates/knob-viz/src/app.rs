//! Main application state and rendering logic.

use eframe::{App, CreationContext};
use egui::{Context, Pos2, Rect, Sense, Ui};
use knob_core::{KnobController, KnobEffect, KnobEvent, KnobGeometry, Point};
use tracing::debug;

use crate::gesture::{PointerGesture, PointerPhase};
use crate::host::HostView;
use crate::settings::ViewSettings;
use crate::ui::{draw_knob, draw_readout, draw_switch};

/// The knob screen.
pub struct KnobApp {
    /// Gesture math and state
    controller: KnobController,
    /// What the controller last told us to show
    view: HostView,
    /// Active pointer gesture
    gesture: PointerGesture,
    /// Layout settings
    settings: ViewSettings,
}

impl KnobApp {
    /// Create the app with the stock knob.
    pub fn new(cc: &CreationContext<'_>) -> Self {
        Self::from_controller(cc, KnobController::new())
    }

    /// Create the app around an existing controller.
    pub fn from_controller(cc: &CreationContext<'_>, controller: KnobController) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_controller(controller)
    }

    fn with_controller(mut controller: KnobController) -> Self {
        let mut view = HostView::new(controller.config());
        KnobEffect::apply_all(&controller.load(), &mut view);
        Self {
            controller,
            view,
            gesture: PointerGesture::default(),
            settings: ViewSettings::default(),
        }
    }

    pub fn settings_mut(&mut self) -> &mut ViewSettings {
        &mut self.settings
    }

    fn toggle_switch(&mut self) {
        self.gesture.clear();
        let effects = self.controller.toggle_switch();
        debug!(on = self.controller.state().is_on, "Switch toggled");
        KnobEffect::apply_all(&effects, &mut self.view);
    }

    fn dispatch(&mut self, event: KnobEvent, geometry: &KnobGeometry) {
        self.controller.dispatch(event, geometry, &mut self.view);
    }

    /// Rect of the switch button, centered at the top.
    fn switch_rect(&self, area: Rect) -> Rect {
        Rect::from_center_size(
            Pos2::new(
                area.center().x,
                area.top() + self.settings.switch_margin + self.settings.switch_size.y / 2.0,
            ),
            self.settings.switch_size,
        )
    }

    /// Square view holding the knob, centered below the switch.
    fn knob_rect(&self, area: Rect, switch: Rect) -> Rect {
        let below = Rect::from_min_max(Pos2::new(area.left(), switch.bottom()), area.max);
        let side = self.settings.knob_side(below.size());
        Rect::from_center_size(below.center(), egui::vec2(side, side))
    }

    fn show_switch(&mut self, ui: &mut Ui, rect: Rect) {
        let response = ui.interact(rect, ui.id().with("switch"), Sense::click());
        if response.clicked() {
            self.toggle_switch();
        }
        draw_switch(
            ui.painter(),
            rect,
            self.view.switch_selected,
            response.hovered(),
        );
    }

    fn show_knob(&mut self, ui: &mut Ui, rect: Rect) {
        let side = f64::from(rect.width());
        let Ok(geometry) = KnobGeometry::from_bounds(side, side) else {
            return;
        };

        let to_local = |pos: Pos2| {
            Point::new(
                f64::from(pos.x - rect.left()),
                f64::from(pos.y - rect.top()),
            )
        };

        let pointer = ui.input(|i| i.pointer.clone());
        let mut events = Vec::new();
        if let Some(pos) = pointer.interact_pos() {
            let inside = rect.contains(pos);
            if pointer.primary_pressed() {
                events.extend(self.gesture.translate(PointerPhase::Pressed, to_local(pos), inside));
            } else if pointer.primary_down() {
                events.extend(self.gesture.translate(PointerPhase::Moved, to_local(pos), inside));
            }
            if pointer.primary_released() {
                events.extend(self.gesture.translate(PointerPhase::Released, to_local(pos), inside));
            }
        } else if pointer.primary_released() {
            let last = self.gesture.last_point.unwrap_or_default();
            events.extend(self.gesture.translate(PointerPhase::Released, last, false));
        }

        for event in events {
            self.dispatch(event, &geometry);
        }

        if self.view.knob_visible {
            draw_knob(
                ui.painter(),
                rect.center(),
                rect.width() / 2.0,
                &self.view.knob_rotation,
                &self.settings,
            );
        }
    }

    fn readout(&self) -> String {
        let state = self.controller.state();
        if !state.is_on {
            return "off".to_string();
        }
        format!(
            "{:7.2}°  hue {:.3}  {}",
            state.current_angle_deg(),
            self.controller.hue_for_angle(state.current_angle),
            self.view.background.to_hex()
        )
    }
}

impl App for KnobApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let (toggle, readout) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
            )
        });
        if toggle {
            self.toggle_switch();
        }
        if readout {
            self.settings.show_readout = !self.settings.show_readout;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.view.background_color()))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let switch = self.switch_rect(area);
                let knob = self.knob_rect(area, switch);

                self.show_switch(ui, switch);
                self.show_knob(ui, knob);

                if self.settings.show_readout {
                    draw_readout(ui.painter(), area, &self.readout());
                }
            });
    }
}
