//! Interactive terminal front end for the client screens.
//!
//! Each route maps to one screen. Screens request redirects through
//! [`CliNavigator`]; the loop in [`run_cli`] follows them.

pub mod io;
pub mod output;

use std::cell::RefCell;

use clients_config::{Config, ConfigError, ConfigManager};
use clients_domain::ClientId;
use dialoguer::theme::ColorfulTheme;
use thiserror::Error;

use crate::{
    api::LocalClientStore,
    cache::InMemoryClientListCache,
    errors::{ApiError, ListError},
    screens::{
        load_client_list, refresh_client_list, EditClientScreen, NewClientScreen, Navigator,
        Notice, Notifier, Route, ScreenContext, SubmitOutcome,
    },
    time::SystemClock,
    timer::TimerQueue,
};

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Remembers the last redirect requested by a screen.
#[derive(Debug, Default)]
pub struct CliNavigator {
    requested: RefCell<Option<Route>>,
}

impl CliNavigator {
    pub fn take(&self) -> Option<Route> {
        self.requested.borrow_mut().take()
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigation requested");
        *self.requested.borrow_mut() = Some(route);
    }
}

/// Prints confirmations inline.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliNotifier;

impl Notifier for CliNotifier {
    fn notify(&self, notice: &Notice) {
        io::print_success(format!("{}: {}", notice.title, notice.message));
    }
}

/// Loads configuration, opens the local store and runs the screen loop.
pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::platform_default()?.load()?;
    crate::init_with_filter(&config.log_filter);

    let store = LocalClientStore::open(config.clients_file())?;
    let cache = InMemoryClientListCache::new();
    let navigator = CliNavigator::default();
    let notifier = CliNotifier;
    let clock = SystemClock;
    let timers = TimerQueue::new();
    let ctx = ScreenContext {
        api: &store,
        cache: &cache,
        navigator: &navigator,
        notifier: &notifier,
        clock: &clock,
        timers: &timers,
    };
    let theme = ColorfulTheme::default();

    let mut route = Route::ClientList;
    loop {
        route = match route {
            Route::ClientList => match list_screen(&ctx, &theme)? {
                Some(next) => next,
                None => break,
            },
            Route::NewClient => new_client_screen(&ctx, &config, &theme, &navigator)?,
            Route::EditClient(id) => edit_client_screen(&ctx, id, &theme, &navigator)?,
        };
    }
    Ok(())
}

fn list_screen(ctx: &ScreenContext<'_>, theme: &ColorfulTheme) -> Result<Option<Route>, CliError> {
    let clients = load_client_list(ctx.api, ctx.cache)?;
    output::section("Clients");
    if clients.is_empty() {
        io::print_info("No clients yet.");
    } else {
        for line in output::client_table(&clients) {
            println!("{line}");
        }
    }

    let mut items = vec!["New client".to_string()];
    items.extend(
        clients
            .iter()
            .map(|client| format!("Edit {} <{}>", client.display_name(), client.email)),
    );
    items.push("Refresh".to_string());
    items.push("Quit".to_string());

    let choice = io::choose(theme, "Choose an action", &items)?;
    let route = if choice == 0 {
        Some(Route::NewClient)
    } else if choice <= clients.len() {
        Some(Route::EditClient(clients[choice - 1].id.clone()))
    } else if choice == clients.len() + 1 {
        refresh_client_list(ctx.api, ctx.cache)?;
        Some(Route::ClientList)
    } else {
        None
    };
    Ok(route)
}

fn new_client_screen(
    ctx: &ScreenContext<'_>,
    config: &Config,
    theme: &ColorfulTheme,
    navigator: &CliNavigator,
) -> Result<Route, CliError> {
    let mut screen = NewClientScreen::new(config);
    output::section("New client");

    let mut first_pass = true;
    loop {
        ctx.timers.run_due(ctx.clock.now());
        if let Some(message) = screen.banner().message() {
            output::banner(message);
        }
        if !first_pass && !io::confirm_action(theme, "Edit the form again?", true)? {
            navigator.navigate(Route::ClientList);
            break;
        }
        first_pass = false;

        io::fill_form(theme, screen.form_mut())?;
        match screen.submit(ctx) {
            SubmitOutcome::Created(record) => {
                io::print_success(format!("Registered {}", record.display_name()));
                break;
            }
            SubmitOutcome::Blocked { invalid } => {
                io::print_warning(format!("{invalid} field(s) need attention"));
                io::print_visible_errors(screen.form());
            }
            SubmitOutcome::Failed(_) => {}
            SubmitOutcome::NotReady | SubmitOutcome::Updated(_) => break,
        }
    }
    Ok(navigator.take().unwrap_or(Route::ClientList))
}

fn edit_client_screen(
    ctx: &ScreenContext<'_>,
    id: ClientId,
    theme: &ColorfulTheme,
    navigator: &CliNavigator,
) -> Result<Route, CliError> {
    let mut screen = EditClientScreen::mount(id);
    output::section("Edit client");
    if !screen.load(ctx.api) {
        io::print_warning("Loading client...");
        return Ok(Route::ClientList);
    }

    while let Some(form) = screen.form_mut() {
        io::fill_form(theme, form)?;
        match screen.submit(ctx) {
            SubmitOutcome::Blocked { invalid } => {
                io::print_warning(format!("{invalid} field(s) need attention"));
                if let Some(form) = screen.form() {
                    io::print_visible_errors(form);
                }
            }
            _ => break,
        }
    }
    Ok(navigator.take().unwrap_or(Route::ClientList))
}
