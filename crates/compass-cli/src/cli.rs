pub(crate) mod report;
mod run;

use crate::opt::Commands;
use anyhow::Error;
use run::run;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Run(o) => run(o).await,
    }
}
