//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
}

/// Format categories as a table in stored order
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'pocket init' to create default categories."
            .to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.short(),
        name: &c.name,
    });

    Table::new(rows).with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    #[test]
    fn test_lists_every_category() {
        let text = format_category_list(&default_categories());
        assert!(text.contains("Salary"));
        assert!(text.contains("Freelance"));
    }

    #[test]
    fn test_empty_hint() {
        assert!(format_category_list(&[]).contains("pocket init"));
    }
}
