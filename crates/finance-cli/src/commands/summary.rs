use crate::output::render_summary;
use crate::session::Session;

pub fn handle_summary(session: &mut Session) -> anyhow::Result<()> {
    let summaries = session.manager.account_summary()?;
    session.say(&render_summary(&session.ui, &summaries));
    Ok(())
}
