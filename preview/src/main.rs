//! Desktop simulator for myrtio-light-runtime
//!
//! Drives a [`LightController`] from a synthetic clock and talks to it only
//! through the wire protocol, the same way a remote client would.

use std::collections::VecDeque;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_light_runtime::{
    ClockMs, ConnectionId, ControllerConfig, EffectId, LightController, MessageChannel,
    MessageSender, MessageSink, OutputDriver, Rgb, channel::SendTextError,
    math8::scale8,
};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Inbound message queue size
const INBOX_SIZE: usize = 16;

/// Responses kept in the log
const LOG_CAPACITY: usize = 64;

/// The simulator is the only client
const CLIENT: ConnectionId = ConnectionId(1);

/// How far before the clock overflow the "near overflow" jump lands
const OVERFLOW_LEAD_MS: u32 = 10_000;

static INBOX: MessageChannel<INBOX_SIZE> = MessageChannel::<INBOX_SIZE>::new();

/// Strip that keeps the last frame and brightness for drawing
#[derive(Default)]
struct PreviewStrip {
    frame: Vec<Rgb>,
    brightness: u8,
}

impl OutputDriver for PreviewStrip {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

impl PreviewStrip {
    fn displayed(&self, pixel: Rgb) -> egui::Color32 {
        egui::Color32::from_rgb(
            scale8(pixel.r, self.brightness),
            scale8(pixel.g, self.brightness),
            scale8(pixel.b, self.brightness),
        )
    }
}

/// Messages sent back to the client, newest last
#[derive(Default)]
struct ResponseLog {
    lines: VecDeque<String>,
}

impl MessageSink for ResponseLog {
    fn send(&mut self, connection: ConnectionId, message: &str) {
        if self.lines.len() == LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(format!("[{}] {message}", connection.0));
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Light Runtime Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-light-runtime-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    controller: LightController<'static, PreviewStrip, LED_COUNT, INBOX_SIZE>,
    sender: MessageSender<'static, INBOX_SIZE>,
    log: ResponseLog,

    // Control values, sent as commands when they change
    effect_id: EffectId,
    hue: u8,
    brightness: u8,
    speed_ms: u16,
    sleep_ms: u32,
    /// Free-form message typed by the user
    raw_message: String,

    /// Synthetic clock, wraps like the device clock
    t_ms: u32,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let config = ControllerConfig::default();
        let mut log = ResponseLog::default();
        let mut controller = LightController::new(INBOX.receiver(), PreviewStrip::default(), &config);
        controller.on_connect(CLIENT, &mut log);

        Self {
            controller,
            sender: INBOX.sender(),
            log,
            effect_id: config.effect,
            hue: config.hue,
            brightness: config.brightness,
            speed_ms: config.speed_ms,
            sleep_ms: 5_000,
            raw_message: String::new(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
        }
    }

    /// Queue a wire message as if it came from the client
    fn send(&mut self, message: &str) {
        match self.sender.try_send_text(CLIENT, message) {
            Ok(()) => {}
            Err(SendTextError::TooLong) => {
                self.log.send(CLIENT, &format!("(not sent, too long: {message})"));
            }
            Err(SendTextError::Full) => {
                self.log.send(CLIENT, &format!("(not sent, queue full: {message})"));
            }
        }
    }

    fn jump_near_overflow(&mut self) {
        self.t_ms = u32::MAX - OVERFLOW_LEAD_MS;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = if delta_ms.is_finite() {
                delta_ms.clamp(0.0, f64::from(u32::MAX)) as u32
            } else {
                0
            };
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.t_ms = 0;
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui.button("Near overflow").clicked() {
                    self.jump_near_overflow();
                }
            });

            ui.add_space(4.0);
            ui.label(format!("Clock: {} ms", self.t_ms));

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Time scale:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.horizontal(|ui| {
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });
        });
    }

    fn command_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label("Effect:");
                let mut selected = self.effect_id;
                egui::ComboBox::from_id_salt("effect_selector")
                    .selected_text(self.effect_id.as_str())
                    .show_ui(ui, |ui| {
                        for effect in EffectId::ALL {
                            ui.selectable_value(&mut selected, effect, effect.as_str());
                        }
                    });
                if selected != self.effect_id {
                    self.effect_id = selected;
                    self.send(&format!("-e{}", selected.as_raw()));
                }
                if ui.button("Next palette").clicked() {
                    self.send(&format!("-e{}", self.effect_id.as_raw()));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Hue:");
                if ui.add(egui::Slider::new(&mut self.hue, 0..=255)).changed() {
                    self.send(&format!("-h{:x}", self.hue));
                }
                if ui.button("Toggle rotation").clicked() {
                    self.send("-a");
                }
            });

            ui.horizontal(|ui| {
                ui.label("Brightness:");
                if ui.add(egui::Slider::new(&mut self.brightness, 0..=255)).changed() {
                    self.send(&format!("-b{:x}", self.brightness));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Speed (ms):");
                if ui
                    .add(egui::Slider::new(&mut self.speed_ms, 5..=1000).logarithmic(true))
                    .changed()
                {
                    self.send(&format!("-t{:x}", self.speed_ms));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Sleep (ms):");
                ui.add(egui::DragValue::new(&mut self.sleep_ms).range(0..=600_000));
                if ui.button("Arm").clicked() {
                    self.send(&format!("-s{:x}", self.sleep_ms));
                }
                if ui.button("Cancel").clicked() {
                    self.send("-s0");
                }
            });

            ui.horizontal(|ui| {
                if ui.button("List effects").clicked() {
                    self.send("-*");
                }
                if ui.button("Status").clicked() {
                    self.send("-!");
                }
                ui.label("Raw:");
                let response = ui.text_edit_singleline(&mut self.raw_message);
                if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter))
                {
                    let message = std::mem::take(&mut self.raw_message);
                    self.send(&message);
                }
            });
        });
    }

    fn draw_strip(&self, ui: &mut egui::Ui) {
        let strip = self.controller.output();
        let available_width = ui.available_width();
        let led_pitch = self.led_size + LED_GAP;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = LED_COUNT.div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in strip.frame.iter().enumerate() {
            let row = i / leds_per_row;
            let col = i % leds_per_row;
            let x = origin.x + col as f32 * led_pitch;
            let y = origin.y + row as f32 * led_pitch;

            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(self.led_size, self.led_size),
            );
            painter.rect_filled(rect, 3.0, strip.displayed(*pixel));
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.controller.poll(ClockMs(self.t_ms), &mut self.log);

        // Pick up changes the runtime made on its own
        let state = self.controller.state();
        self.hue = state.hue();
        self.brightness = state.brightness();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.playback_controls(ui);
                ui.add_space(16.0);
                self.command_controls(ui);
            });

            ui.add_space(16.0);
            self.draw_strip(ui);
            ui.add_space(16.0);

            ui.label("Responses:");
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &self.log.lines {
                        ui.monospace(line);
                    }
                });
        });
    }
}
