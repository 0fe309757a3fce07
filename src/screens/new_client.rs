use chrono::Duration;
use clients_config::Config;
use tracing::{debug, warn};

use crate::{forms::FormController, pipeline};

use super::{Banner, ScreenContext, SubmitOutcome};

const DEFAULT_BANNER_TIMEOUT_MS: i64 = 2000;

/// State of a mounted "new client" screen.
///
/// Dropping the screen cancels a pending banner clear.
#[derive(Debug)]
pub struct NewClientScreen {
    form: FormController,
    banner: Banner,
}

impl NewClientScreen {
    pub fn new(config: &Config) -> Self {
        let timeout = Duration::from_std(config.banner_timeout()).unwrap_or_else(|_| {
            warn!(
                banner_timeout_ms = config.banner_timeout_ms,
                "banner timeout out of range, using default"
            );
            Duration::milliseconds(DEFAULT_BANNER_TIMEOUT_MS)
        });
        Self::with_banner_timeout(timeout)
    }

    pub fn with_banner_timeout(timeout: Duration) -> Self {
        Self {
            form: FormController::empty(),
            banner: Banner::new(timeout),
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Validates and, when the form is valid, creates the client.
    ///
    /// A failed mutation puts its message in the banner.
    pub fn submit(&mut self, ctx: &ScreenContext<'_>) -> SubmitOutcome {
        let Some(input) = self.form.submit() else {
            let invalid = self.form.current_errors().len();
            debug!(invalid, "new client submit blocked by validation");
            return SubmitOutcome::Blocked { invalid };
        };

        match pipeline::submit_create(ctx, &input) {
            Ok(record) => SubmitOutcome::Created(record),
            Err(err) => {
                let message = err.to_string();
                debug!(error = %message, "client creation failed");
                self.banner.show(message.clone(), ctx.timers, ctx.clock.now());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

impl Default for NewClientScreen {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
