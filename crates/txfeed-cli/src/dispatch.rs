use tracing::debug;
use txfeed_client::commands;
use txfeed_client::settings::{self, FeedSettings, SettingsOverrides};
use txfeed_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, DisplayArgs};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    let settings = resolve_settings(cli.command.display())?;
    debug!(
        command = cli.command.name(),
        locale = settings.time.locale.tag(),
        zone = %settings.time.zone,
        "dispatching"
    );

    match &cli.command {
        Commands::Show { path, .. } => commands::feed::run(path.clone(), settings),
        Commands::Demo { .. } => commands::demo::run(settings),
    }
}

fn resolve_settings(display: &DisplayArgs) -> ClientResult<FeedSettings> {
    settings::resolve(&SettingsOverrides {
        locale: display.locale.clone(),
        timezone: display.timezone.clone(),
    })
}
