use super::Session;
use crate::{
    libs::{messages::Message, repository::TaskRepository, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in task names, case-insensitive
    term: String,
}

/// Prints tasks whose names contain the term.
pub fn cmd<R: TaskRepository>(args: SearchArgs, session: &Session<R>) -> Result<()> {
    if args.term.trim().is_empty() {
        msg_info!(Message::SearchTermEmpty);
        return Ok(());
    }

    let results = session.registry.search_by_name(&args.term);
    if results.is_empty() {
        msg_info!(Message::SearchNoMatches(args.term));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(args.term), true);
    View::task_list(&results, &session.config.date_format);
    Ok(())
}
