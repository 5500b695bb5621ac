use crate::anim::{Axis, TransMode};
use crate::frame::FrameState;
use crate::gasket::MAX_DIVISION;
use crate::math::{srgb_bytes, srgb_to_rgba};
use crate::session::ControlEvent;

const HEADING: egui::Color32 = egui::Color32::from_rgb(74, 158, 255);
const START: egui::Color32 = egui::Color32::from_rgb(0x11, 0x7A, 0x65);
const STOP: egui::Color32 = egui::Color32::from_rgb(0xB0, 0x3A, 0x2E);

/// Draw the settings window and collect whatever the user changed this frame
pub fn show(ctx: &egui::Context, frame: &FrameState<'_>, fps: f32, events: &mut Vec<ControlEvent>) {
    let obj = frame.object;
    let status = frame.status;

    egui::Window::new("Gasket")
        .title_bar(true)
        .resizable(false)
        .default_pos(egui::pos2(10.0, 10.0))
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!status.inputs_locked, |ui| {
                let mut division = obj.division;
                if ui
                    .add(egui::Slider::new(&mut division, 0..=MAX_DIVISION).text("Division"))
                    .changed()
                {
                    events.push(ControlEvent::SetDivision(division));
                }

                let mut speed = obj.speed;
                if ui
                    .add(egui::Slider::new(&mut speed, 10.0..=1000.0).text("Speed"))
                    .changed()
                {
                    events.push(ControlEvent::SetSpeed(speed));
                }

                let mut degree = obj.degree;
                if ui
                    .add(egui::Slider::new(&mut degree, 0.0..=360.0).text("Degree"))
                    .changed()
                {
                    events.push(ControlEvent::SetDegree(degree));
                }

                let mut scale_fac = obj.scale_fac;
                if ui
                    .add(egui::Slider::new(&mut scale_fac, 0.5..=5.0).text("Scale factor"))
                    .changed()
                {
                    events.push(ControlEvent::SetScaleFac(scale_fac));
                }

                let mut mode = obj.trans_mode;
                egui::ComboBox::from_label("Free roam")
                    .selected_text(mode.label())
                    .show_ui(ui, |ui| {
                        for option in TransMode::ALL {
                            ui.selectable_value(&mut mode, option, option.label());
                        }
                    });
                if mode != obj.trans_mode {
                    events.push(ControlEvent::SetTransMode(mode));
                }

                ui.horizontal(|ui| {
                    for axis in Axis::ALL {
                        let mut enabled = obj.is_axis_enabled(axis);
                        let label = format!("Rotate {}", axis.label());
                        if ui.checkbox(&mut enabled, label).changed() {
                            events.push(ControlEvent::SetAxis(axis, enabled));
                        }
                    }
                });

                ui.horizontal(|ui| {
                    for (face, rgba) in frame.palette.iter().enumerate() {
                        let mut rgb = srgb_bytes(*rgba);
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            events.push(ControlEvent::SetFaceColor(face, srgb_to_rgba(rgb)));
                        }
                    }
                });
            });

            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let (label, color) = if status.paused {
                    ("Start", START)
                } else {
                    ("Stop", STOP)
                };
                if ui.add(egui::Button::new(label).fill(color)).clicked() {
                    events.push(ControlEvent::ToggleStart);
                }
                if ui
                    .add_enabled(status.restart_enabled, egui::Button::new("Restart"))
                    .clicked()
                {
                    events.push(ControlEvent::Restart);
                }
            });

            ui.add_space(5.0);
            ui.separator();

            ui.label(egui::RichText::new(format!("{:.0} FPS", fps)).color(HEADING));
            ui.monospace(format!("Phase: {}", status.phase.label()));
            ui.monospace(format!("Queue: {}", status.queue_len));
            ui.monospace(format!("Triangles: {}", frame.mesh.len()));
            let t = frame.transform;
            ui.monospace(format!(
                "Theta: ({:.0}, {:.0}, {:.0})",
                t.theta[0], t.theta[1], t.theta[2]
            ));
            ui.monospace(format!("Scale: {:.2}", t.scale));
            ui.monospace(format!("Trans: ({:.3}, {:.3})", t.trans[0], t.trans[1]));
        });
}
