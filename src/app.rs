use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error};

use crate::{
    action::Action,
    cli::Cli,
    components::{
        footer::FooterComponent, form::ContactForm, header::HeaderComponent, Component,
    },
    config::Config,
    tui::{Event, EventResponse, Frame, Tui},
};

pub struct App {
    pub config: Config,
    header: HeaderComponent,
    form: ContactForm,
    footer: FooterComponent,
    should_quit: bool,
    should_suspend: bool,
    tick_rate: f64,
    frame_rate: f64,
}

impl App {
    pub fn new(args: Cli) -> Result<Self> {
        crate::config::ensure_data_and_config_dirs_exist()?;
        let config = Config::new()?;
        Ok(Self {
            config,
            header: HeaderComponent::new(),
            form: ContactForm::new(),
            footer: FooterComponent::new(),
            should_quit: false,
            should_suspend: false,
            tick_rate: args.tick_rate,
            frame_rate: args.frame_rate,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        debug!(config = ?self.config, "starting contact form");
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        self.header.init()?;
        self.form.init()?;
        self.footer.init()?;

        loop {
            if let Some(e) = tui.next().await {
                // The form gets first crack at every event; a `Stop`
                // response keeps the event from the global fallbacks.
                let stop_event_propagation = match self.form.handle_events(e.clone())? {
                    Some(EventResponse::Continue(action)) => {
                        action_tx.send(action)?;
                        false
                    }
                    Some(EventResponse::Stop(action)) => {
                        action_tx.send(action)?;
                        true
                    }
                    None => false,
                };

                if !stop_event_propagation {
                    match e {
                        Event::Quit => action_tx.send(Action::Quit)?,
                        Event::Tick => action_tx.send(Action::Tick)?,
                        Event::Render => action_tx.send(Action::Render)?,
                        Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                        Event::Key(key) => self.handle_global_key(key, &action_tx)?,
                        _ => {}
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    debug!("{action:?}");
                }
                match action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .unwrap();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .unwrap();
                            })
                        })?;
                    }
                    Action::Error(ref msg) => error!("{msg}"),
                    _ => {}
                }

                if let Some(next) = self.form.update(action.clone())? {
                    action_tx.send(next)?;
                }
                if let Some(next) = self.header.update(action.clone())? {
                    action_tx.send(next)?;
                }
                if let Some(next) = self.footer.update(action.clone())? {
                    action_tx.send(next)?;
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn handle_global_key(
        &mut self,
        key: KeyEvent,
        action_tx: &UnboundedSender<Action>,
    ) -> Result<()> {
        match key.code {
            KeyCode::Esc => action_tx.send(Action::Quit)?,
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                action_tx.send(Action::Suspend)?
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let layout = Layout::vertical([
            self.header.height_constraint(),
            self.form.height_constraint(),
            self.footer.height_constraint(),
        ])
        .split(frame.area());

        self.header.draw(frame, layout[0])?;
        self.form.draw(frame, layout[1])?;
        self.footer.draw(frame, layout[2])?;
        Ok(())
    }
}
