//! The application state and event loop.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::{Paragraph, Tabs},
};
use spaceapps_background::{AnimatorConfig, Backdrop, CellCanvas, NebulaSpawn, StarSpawn};
use spaceapps_config::{BackgroundConfig, Config};
use tracing::{debug, info};

use crate::content::{self, FAQS};
use crate::faq::FaqState;
use crate::page::{self, Section};

/// Input poll timeout while no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Section currently shown.
    section: Section,
    /// FAQ accordion.
    faq: FaqState,
    /// Background animation lifecycle.
    backdrop: Backdrop,
    /// The user paused the background.
    paused: bool,
    /// Terminal-sized drawing surface the background paints into.
    canvas: CellCanvas,
    /// Random source for populating the background.
    rng: StdRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let background = &config.background;
        let rng = match background.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            running: false,
            section: Section::default(),
            faq: FaqState::new(FAQS.len()),
            backdrop: Backdrop::new(
                animator_config(background),
                background.speed,
                background.layers,
            ),
            paused: false,
            canvas: CellCanvas::new(0, 0, background.cell_width, background.cell_height),
            rng,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.canvas.resize(size.width, size.height);
        self.mount_background(Instant::now());

        while self.running {
            self.backdrop.tick(&mut self.canvas, Instant::now());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.backdrop.unmount();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(&self.canvas, area);

        let [nav, body, footer, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let selected = Section::ALL
            .iter()
            .position(|&s| s == self.section)
            .unwrap_or(0);
        let tabs = Tabs::new(Section::ALL.iter().map(|s| s.title()))
            .select(selected)
            .style(Style::new().white())
            .highlight_style(Style::new().bold().light_blue());
        frame.render_widget(tabs, nav);

        page::render_section(frame, body, self.section, &self.faq);

        frame.render_widget(
            Paragraph::new(content::FOOTER.dark_gray()).centered(),
            footer,
        );

        let state = if self.paused { "paused" } else { "running" };
        let status = Line::from(vec![
            "q".bold().light_blue(),
            " quit  ".dark_gray(),
            "tab".bold().light_blue(),
            " section  ".dark_gray(),
            "↑↓ enter".bold().light_blue(),
            " faq  ".dark_gray(),
            "c".bold().light_blue(),
            " contact  ".dark_gray(),
            "b".bold().light_blue(),
            format!(" layers:{}  ", self.backdrop.layers().label()).dark_gray(),
            "s".bold().light_blue(),
            format!(" speed:{}  ", self.backdrop.speed().label()).dark_gray(),
            "p".bold().light_blue(),
            format!(" {state}  ").dark_gray(),
            "r".bold().light_blue(),
            " reseed".dark_gray(),
        ])
        .centered();
        frame.render_widget(status, help);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Blocks no longer than the time left until the next background frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.backdrop.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab | KeyCode::Right) => self.show(self.section.next()),
            (_, KeyCode::BackTab | KeyCode::Left) => self.show(self.section.previous()),
            (_, KeyCode::Char('c')) => self.show(Section::Team),
            (_, KeyCode::Down) if self.section == Section::Faq => self.faq.select_next(),
            (_, KeyCode::Up) if self.section == Section::Faq => self.faq.select_previous(),
            (_, KeyCode::Enter | KeyCode::Char(' ')) if self.section == Section::Faq => {
                self.faq.toggle_selected()
            }
            (_, KeyCode::Char('b')) => self.cycle_layers(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('p')) => self.toggle_pause(),
            (_, KeyCode::Char('r')) => self.reseed(),
            _ => {}
        }
    }

    /// Resize the drawing surface and forward the new bounds. A background
    /// that never mounted for lack of space mounts once there is some.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
        if self.backdrop.is_mounted() {
            self.backdrop.resize(self.canvas.viewport());
        } else if !self.paused {
            self.mount_background(Instant::now());
        }
    }

    /// Switch sections. The FAQ gets the twinkling field.
    fn show(&mut self, section: Section) {
        self.section = section;
        self.backdrop.set_twinkle(section == Section::Faq);
    }

    fn mount_background(&mut self, now: Instant) {
        self.backdrop.mount(self.canvas.viewport(), &mut self.rng, now);
    }

    /// Cycle through background layer selections.
    fn cycle_layers(&mut self) {
        self.backdrop.set_layers(self.backdrop.layers().next());
    }

    /// Cycle through frame cadences.
    fn cycle_speed(&mut self) {
        self.backdrop.set_speed(self.backdrop.speed().next());
    }

    /// Unmount a running background or mount a fresh one.
    fn toggle_pause(&mut self) {
        if self.paused {
            self.paused = false;
            self.mount_background(Instant::now());
        } else {
            self.paused = true;
            self.backdrop.unmount();
        }
    }

    /// Remount with a newly drawn seed, logged so the run can be reproduced.
    fn reseed(&mut self) {
        let seed: u64 = rand::rng().random();
        info!(seed, "reseeding background");
        self.rng = StdRng::seed_from_u64(seed);
        self.paused = false;
        self.mount_background(Instant::now());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        debug!("quit requested");
        self.running = false;
    }
}

/// Translate configured spawn ranges into animator parameters.
fn animator_config(background: &BackgroundConfig) -> AnimatorConfig {
    let [star_min, star_max] = background.stars.radius_range();
    let [blob_min, blob_max] = background.nebula.radius_range();

    AnimatorConfig {
        star_count: background.star_count,
        blob_count: background.blob_count,
        twinkle_count: background.twinkle_count,
        stars: StarSpawn {
            radius: (star_min, star_max),
            max_speed: background.stars.speed_limit(),
        },
        nebula: NebulaSpawn {
            radius: (blob_min, blob_max),
            max_speed: background.nebula.speed_limit(),
            palette: background.nebula.palette_colors(),
        },
    }
}
