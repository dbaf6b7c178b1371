use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, layout::Rect};
use tokei_config::Config;
use tokei_face::{FaceGeometry, Step, Ticker, draw_face};

mod logging;
mod surface;

use surface::Surface;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Everything drawn so far; copied to the terminal on each flush.
    surface: Surface,
    ticker: Ticker,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let surface = Surface::new(
            Rect::default(),
            config.glyph_char(),
            config.color_theme.color(),
        );
        let geometry = FaceGeometry::fit(0, 0, config.radius_ratio);
        let ticker = Ticker::new(geometry, config.hour_hand);
        Self {
            running: false,
            config,
            surface,
            ticker,
        }
    }

    /// Run the application's main loop.
    ///
    /// Each pass paints the hands, flushes the frame, waits one tick and
    /// erases the hands again.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.layout(size.width, size.height);

        self.running = true;
        while self.running {
            let now = Local::now().time();
            match self.ticker.advance(&mut self.surface, &now) {
                Step::Flush => {
                    terminal.draw(|frame| frame.render_widget(&self.surface, frame.area()))?;
                }
                Step::Wait => self.wait(Duration::from_millis(self.config.tick_ms))?,
                Step::Erased => {}
            }
        }
        Ok(())
    }

    /// Rebuild the surface for a `width` x `height` terminal and draw the
    /// static dial on it.
    fn layout(&mut self, width: u16, height: u16) {
        let geometry = FaceGeometry::fit(width, height, self.config.radius_ratio);
        self.surface.resize(Rect::new(0, 0, width, height));
        draw_face(&mut self.surface, &geometry, self.config.show_outline);
        self.ticker.reset(geometry);
        log::info!("dial laid out for {width}x{height}, radius {}", geometry.radius);
    }

    /// Hold the current frame for `interval`.
    ///
    /// Returns early on quit or resize; after a resize the next pass paints
    /// a fresh dial.
    fn wait(&mut self, interval: Duration) -> color_eyre::Result<()> {
        let deadline = Instant::now() + interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(key) {
                        self.quit();
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    self.layout(width, height);
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        log::debug!("quit requested");
        self.running = false;
    }
}

/// Raw mode swallows SIGINT, so these keys stand in for it.
fn is_quit(key: KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
    )
}
