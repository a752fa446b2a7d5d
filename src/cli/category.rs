//! Category CLI commands

use crate::display::format_category_list;
use crate::error::FintrackResult;
use crate::storage::Storage;

/// Handle the `categories` command
pub fn handle_categories_command(storage: &Storage) -> FintrackResult<()> {
    let categories = storage.list_categories();
    print!("{}", format_category_list(&categories));
    Ok(())
}
