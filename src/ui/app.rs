use crate::config::UiConfig;
use crate::lookup::{FetchCommand, FetchCommandSender, LookupCompletion, LookupFailure, Pokemon};
use crate::ui::boundary::{Guarded, RecoveryBoundary};
use crate::ui::form::InputForm;
use crate::ui::info::{LookupView, PokemonInfo};

/// What one render pass produced, owned so it can outlive the borrow of
/// the app during drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Idle,
    Loading { name: String },
    Data(Pokemon),
    Fallback(LookupFailure),
}

impl Screen {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// The container: holds the lookup key and composes the recovery boundary
/// around the pokemon info component.
pub struct App {
    should_quit: bool,
    form: InputForm,
    /// Current lookup key; also the boundary's only reset key.
    pokemon_name: String,
    info: PokemonInfo,
    boundary: RecoveryBoundary<String>,
    fetch_sender: Option<FetchCommandSender>,
    animation_tick: u8,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            form: InputForm::new(config.suggestions.clone()),
            pokemon_name: String::new(),
            info: PokemonInfo::new(),
            boundary: RecoveryBoundary::new(),
            fetch_sender: None,
            animation_tick: 0,
        }
    }

    pub fn set_fetch_sender(&mut self, sender: FetchCommandSender) {
        self.fetch_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn pokemon_name(&self) -> &str {
        &self.pokemon_name
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn info(&self) -> &PokemonInfo {
        &self.info
    }

    pub fn boundary(&self) -> &RecoveryBoundary<String> {
        &self.boundary
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.info.state().is_pending() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Submit whatever is in the input form.
    pub fn submit_form(&mut self) {
        let name = self.form.submission();
        self.submit(&name);
    }

    /// Change the lookup key.
    pub fn submit(&mut self, name: &str) {
        self.form.set_text(name);
        self.pokemon_name = name.to_string();
        self.sync_info();
    }

    /// The fallback's "Try again" control: clears the boundary and the
    /// lookup key, which returns the tree to idle.
    pub fn retry(&mut self) -> bool {
        let name = &mut self.pokemon_name;
        let form = &mut self.form;
        let reset = self.boundary.reset(|| {
            name.clear();
            form.clear();
        });
        if reset {
            tracing::info!("Lookup retry requested, key cleared");
            self.sync_info();
        }
        reset
    }

    pub fn on_lookup_complete(&mut self, completion: LookupCompletion) {
        self.info.complete(completion);
    }

    /// Explicit render step: runs the info component through the boundary.
    pub fn view(&mut self) -> Screen {
        let reset_keys = [self.pokemon_name.clone()];
        let info = &self.info;
        match self.boundary.render(&reset_keys, || info.render()) {
            Guarded::Children(LookupView::Idle) => Screen::Idle,
            Guarded::Children(LookupView::Loading { key }) => Screen::Loading {
                name: key.to_string(),
            },
            Guarded::Children(LookupView::Data(pokemon)) => Screen::Data(pokemon.clone()),
            Guarded::Fallback(error) => Screen::Fallback(error),
        }
    }

    /// Push the current key into the info component and forward its effect.
    ///
    /// A fetch the worker never receives is rejected on the spot.
    fn sync_info(&mut self) {
        self.boundary
            .observe_reset_keys(std::slice::from_ref(&self.pokemon_name));
        let Some(command) = self.info.set_key(&self.pokemon_name) else {
            return;
        };

        let request = match &command {
            FetchCommand::Fetch(request) => Some(request.clone()),
            FetchCommand::Cancel => None,
        };
        if let Err(message) = self.send_command(command) {
            if let Some(request) = request {
                self.info.complete(LookupCompletion::rejected(
                    &request,
                    LookupFailure::new(message),
                ));
            }
        }
    }

    fn send_command(&self, command: FetchCommand) -> Result<(), String> {
        let Some(sender) = &self.fetch_sender else {
            tracing::error!("No fetch worker to dispatch to");
            return Err("Fetch dispatch failed: no fetch worker".to_string());
        };

        sender.try_send(command).map_err(|err| {
            tracing::error!(error = %err, "Failed to dispatch fetch command");
            format!("Fetch dispatch failed: {}", err)
        })
    }
}
