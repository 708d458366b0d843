// Copyright: (c) 2024, J. Zane Cook <z@agentartificial.com>
// GNU General Public License v3.0+ (see COPYING or https://www.gnu.org/licenses/gpl-3.0.txt)

use std::process::ExitCode;

use dotenv::dotenv;
use log::{error, info};

use subnet_launcher::error::display_chain;
use subnet_launcher::{DeployPlan, Settings, ToolingClient};

#[tokio::main]
async fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "subnet_launcher=info")
    }
    env_logger::init();
    info!("Initializing...");
    dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            error!("Failed to load settings: {}", display_chain(&err));
            return ExitCode::FAILURE;
        }
    };
    info!("main::network({})::endpoint({})", settings.network, settings.endpoint);

    let plan = DeployPlan::example().with_chain_name(settings.chain_name.clone());
    match subnet_launcher::run(&settings, &plan, ToolingClient::from_settings, |progress| {
        println!("{}", progress)
    })
    .await
    {
        Ok(deployment) => {
            info!("main::done::{:?}", deployment);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", display_chain(&err));
            ExitCode::FAILURE
        }
    }
}
