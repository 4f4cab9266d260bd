//! Hot Potato in a terminal.
//!
//! Every line names the acting user, so several people can share one
//! keyboard:
//!
//! ```text
//! console-room#general> alice toss bob
//! @alice grabbed a **baked 🔥 potato 🥔** fresh out of the oven and tossed it to @bob!
//! ```
//!
//! Configuration comes from `HOTPOTATO_*` variables, optionally loaded from
//! a `.env` file.

mod command;
mod replies;
mod session;

use std::io::Write;

use hotpotato::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{Command, ParseError};
use session::{Outcome, Session};

#[tokio::main]
async fn main() -> Result<(), HotPotatoError> {
    dotenvy::dotenv().ok();

    let config = HotPotatoConfig::from_env()?;
    init_tracing(&config.log_filter)?;

    let game = HotPotato::builder().config(config).build();
    let mut session = Session::new(game.config());

    tracing::info!(namespace = %game.namespace(), "console started, type 'help'");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", session.prompt());
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stdin");
                break;
            }
        };

        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.dispatch(game.master().as_ref(), cmd).await {
            Outcome::Reply(text) => println!("{text}"),
            Outcome::Quit => break,
        }
    }

    tracing::info!("console stopped");
    Ok(())
}
