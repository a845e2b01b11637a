use crate::output::render_categories;
use crate::session::Session;
use crate::ui::{notice, Badge};

/// List the catalog, then optionally add a category or sub-item.
pub fn handle_manage(session: &mut Session) -> anyhow::Result<()> {
    let categories = session.manager.categories();
    session.say(&render_categories(&session.ui, &categories));

    let category = session
        .prompter
        .text("Enter category to add (blank to return)")?;
    if category.is_empty() {
        return Ok(());
    }
    let item = session.prompter.text("Enter sub-item (optional)")?;

    session.manager.add_category(&category, Some(&item))?;
    session.say(&notice(&session.ui, Badge::Ok, "Category saved."));
    Ok(())
}
