//! Application: wires the actors, the page and the screen together.
//!
//! The main loop owns all drawing. It selects over three channels (input,
//! cycler frames, blink ticks), updates the [`PageView`] and presents a new
//! frame only when something changed.

use crate::actor::{
    CyclerActor, CyclerFrame, InputActor, InputEvent, KeyCode, KeyModifiers, Tick, TickerActor,
};
use crate::buffer::{Buffer, Modifiers, Style};
use crate::config::AppConfig;
use crate::cycler::TitleCycler;
use crate::error::FolioError;
use crate::layout::Rect;
use crate::portfolio::{Page, Portfolio, Section, Theme};
use crate::terminal::{Screen, ScreenConfig};
use crate::widget::{Align, TitleWidget, TitleWidgetConfig, Widget};
use crossbeam_channel::{bounded, select, Receiver};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{info, warn};

/// How long shutdown of the input thread can go unnoticed.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the main loop.
    Quit,
}

/// Load the portfolio and run the page (or the headless animation).
pub fn run(config: &AppConfig) -> Result<(), FolioError> {
    let portfolio = Portfolio::load(&config.data_path)?;
    let cycler = TitleCycler::new(portfolio.titles(), config.cycler.clone())?;
    info!(
        path = %config.data_path.display(),
        titles = cycler.titles().len(),
        headless = config.headless,
        "starting"
    );

    if config.headless {
        let stdout = io::stdout();
        run_headless(cycler, &mut stdout.lock())
    } else {
        run_interactive(&portfolio, cycler, config)
    }
}

/// Print each cycler frame on one rewritten line until the cycler settles.
///
/// A looping cycler never settles, so this runs until the process is
/// interrupted.
pub fn run_headless<W: Write>(cycler: TitleCycler, out: &mut W) -> Result<(), FolioError> {
    let actor = CyclerActor::spawn(cycler);
    for frame in actor.receiver() {
        write!(out, "\r\x1b[K{}", frame.text)?;
        out.flush()?;
        if frame.settled {
            break;
        }
    }
    writeln!(out)?;
    actor.stop();
    Ok(())
}

fn run_interactive(portfolio: &Portfolio, cycler: TitleCycler, config: &AppConfig) -> Result<(), FolioError> {
    let mut screen = Screen::enter(ScreenConfig::default())?;
    let mut view = PageView::new(portfolio, Theme::default(), screen.width(), screen.height());

    let (input_tx, input_rx) = bounded::<InputEvent>(64);
    let input = InputActor::spawn(input_tx, INPUT_POLL);
    let cycler = CyclerActor::spawn(cycler);
    let ticker = TickerActor::spawn(config.blink_interval);

    let result = event_loop(&mut screen, &mut view, &input_rx, &cycler, &ticker);

    // Actors first, so nothing is mid-send when the terminal is restored.
    cycler.stop();
    ticker.join();
    drop(input_rx);
    input.join();
    drop(screen);

    info!("stopped");
    result
}

fn event_loop(
    screen: &mut Screen,
    view: &mut PageView,
    input_rx: &Receiver<InputEvent>,
    cycler: &CyclerActor,
    ticker: &TickerActor,
) -> Result<(), FolioError> {
    view.draw(screen.buffer_mut());
    screen.present()?;

    loop {
        select! {
            recv(input_rx) -> event => match event {
                Ok(InputEvent::Resize { width, height }) => {
                    screen.resize(width, height);
                    view.resize(screen.width(), screen.height());
                }
                Ok(event) => {
                    if view.handle_event(&event) == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(_) => return Ok(()),
            },
            recv(cycler.receiver()) -> frame => {
                if let Ok(frame) = frame {
                    view.apply_frame(&frame);
                }
            }
            recv(ticker.receiver()) -> tick => {
                if let Ok(tick) = tick {
                    view.blink(&tick);
                }
            }
        }

        if view.needs_redraw() {
            view.draw(screen.buffer_mut());
            screen.present()?;
        }
    }
}

/// The scrollable page plus the live title, sized to the terminal.
pub struct PageView {
    portfolio: Portfolio,
    theme: Theme,
    page: Page,
    title: TitleWidget,
    viewport: Rect,
    scroll: usize,
    dirty: bool,
}

impl PageView {
    /// Lay out `portfolio` for a `width` x `height` viewport.
    pub fn new(portfolio: &Portfolio, theme: Theme, width: u16, height: u16) -> Self {
        let viewport = Rect::from_size(width, height);
        let page = Page::layout(portfolio, width, theme);
        let title = TitleWidget::with_config(page.title_bounds(viewport, 0), title_config(theme));
        Self {
            portfolio: portfolio.clone(),
            theme,
            page,
            title,
            viewport,
            scroll: 0,
            dirty: true,
        }
    }

    /// Current scroll offset in lines.
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// The laid-out page.
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// The title widget.
    pub const fn title(&self) -> &TitleWidget {
        &self.title
    }

    /// Whether the next frame differs from the last one drawn.
    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.title.needs_redraw()
    }

    /// Re-lay out for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::from_size(width, height);
        if self.page.width() != width {
            self.page = Page::layout(&self.portfolio, width, self.theme);
        }
        self.scroll_to(self.scroll);
        self.dirty = true;
    }

    /// Mirror a cycler frame into the title widget.
    pub fn apply_frame(&mut self, frame: &CyclerFrame) {
        self.title.apply_frame(frame);
    }

    /// Advance the cursor blink.
    pub fn blink(&mut self, tick: &Tick) {
        self.title.blink(tick);
    }

    /// React to one input event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Flow {
        match event {
            InputEvent::Key { code, modifiers } => return self.handle_key(*code, *modifiers),
            InputEvent::Scroll(notches) => self.scroll_by(-isize::from(*notches) * WHEEL_STEP),
            InputEvent::Resize { width, height } => self.resize(*width, *height),
            InputEvent::Error(message) => warn!(%message, "input error"),
            InputEvent::Shutdown => return Flow::Quit,
        }
        Flow::Continue
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Flow {
        let screen = isize::try_from(self.viewport.height.max(1)).unwrap_or(isize::MAX);
        match code {
            KeyCode::Char('c') if modifiers.control => return Flow::Quit,
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::Char(' ') | KeyCode::PageDown => self.scroll_by(screen),
            KeyCode::PageUp => self.scroll_by(-screen),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0),
            KeyCode::Char('G') | KeyCode::End => self.scroll_to(usize::MAX),
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_digit(c) {
                    self.scroll_to(self.page.anchor(section));
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_to(self.scroll.saturating_add_signed(delta));
    }

    fn scroll_to(&mut self, line: usize) {
        let line = line.min(self.page.max_scroll(self.viewport.height));
        if line != self.scroll {
            self.scroll = line;
            self.dirty = true;
        }
        self.title.set_bounds(self.page.title_bounds(self.viewport, self.scroll));
    }

    /// Draw the page and the title into `buffer`.
    pub fn draw(&mut self, buffer: &mut Buffer) {
        self.page.render(buffer, self.viewport, self.scroll);
        self.title.render(buffer);
        self.title.clear_redraw();
        self.dirty = false;
    }
}

fn title_config(theme: Theme) -> TitleWidgetConfig {
    TitleWidgetConfig {
        style: Style::new(theme.text, theme.background).with_modifiers(Modifiers::BOLD),
        cursor_style: theme.accent(),
        align: Align::Center,
        ..TitleWidgetConfig::default()
    }
}
