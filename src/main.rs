use anyhow::{Context, Result};
use clap::Parser;
use hn_positivity::{init_tracing_once, BotOptions, PositivityBot};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hacker News Positivity Bot", long_about = None)]
struct Args {
    /// Session cookie (value of the "user" cookie on news.ycombinator.com when logged in)
    session: String,

    /// Validate session cookie only, then exit
    #[arg(long)]
    validate: bool,

    /// Draw a progress bar over the posts being processed
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing_once();

    let opts = BotOptions::from_env()
        .context("reading NUM_POSTS / NUM_COMMENTS / UPVOTE_ENABLED / VOTE_DELAY")?
        .with_progress(args.progress);
    tracing::debug!("options: {:?}", opts);

    let mut bot = PositivityBot::connect(args.session, opts).context("building HTTP client")?;

    if !bot.validate().context("validating session")? {
        tracing::error!("Error: session is invalid!");
        std::process::exit(1);
    }
    if args.validate {
        return Ok(());
    }

    let report = bot.run().context("positivity run aborted")?;
    let n = report.upvotes().count();
    tracing::info!("Done: {} posts processed, {} upvotes", report.posts.len(), n);
    Ok(())
}
