//! Rendering helpers for operator-facing status lines and listings.
//!
//! Status lines carry a leading glyph so outcomes are scannable at a
//! glance: `✓` for success, `⚠` for warnings. Exact wording is cosmetic,
//! not a compatibility surface.

use colored::Colorize;

use crate::core::inventory::Inventory;

const RULE_WIDTH: usize = 50;
const TABLE_WIDTH: usize = 48;

/// Success status line, `✓` prefixed.
pub fn ok_line(message: &str) -> String {
    format!("{} {}", "✓".bright_green(), message)
}

/// Warning status line, `⚠` prefixed.
pub fn warn_line(message: &str) -> String {
    format!("{} {}", "⚠".bright_yellow(), message)
}

/// The five-option menu, rendered fresh on every pass of the loop.
pub fn render_menu() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\n\
         {:^width$}\n\
         {:^width$}\n\
         {rule}\n\
         1. Reload Inventory\n\
         2. Add Product\n\
         3. Update Stock\n\
         4. Show Inventory\n\
         5. Save and Exit\n\
         {rule}\n",
        "INVENTORY MANAGEMENT SYSTEM",
        "TechStore",
        width = RULE_WIDTH,
    )
}

/// Numbered listing table plus the computed summary footer.
pub fn render_listing(inventory: &Inventory) -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<20} {:<12} {:<10}\n",
        "NO.", "NAME", "PRICE", "QUANTITY"
    ));
    out.push_str(&rule);
    out.push('\n');
    for (index, product) in inventory.products().iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<20} ${:<11.2} {:<10}\n",
            index + 1,
            product.name,
            product.price,
            product.quantity
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    let summary = inventory.summary();
    out.push_str(&format!("Total products: {}\n", summary.count));
    out.push_str(&format!(
        "Total inventory value: ${:.2}\n",
        summary.total_value
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_numbers_rows_and_totals() {
        let mut inventory = Inventory::new();
        inventory.add("Mouse", 10.50, 5).expect("add");
        inventory.add("Keyboard", 25.00, 2).expect("add");

        let listing = render_listing(&inventory);
        assert!(listing.contains("1    Mouse"));
        assert!(listing.contains("2    Keyboard"));
        assert!(listing.contains("$10.50"));
        assert!(listing.contains("Total products: 2"));
        assert!(listing.contains("Total inventory value: $102.50"));
    }

    #[test]
    fn menu_lists_all_five_options() {
        let menu = render_menu();
        for option in [
            "1. Reload Inventory",
            "2. Add Product",
            "3. Update Stock",
            "4. Show Inventory",
            "5. Save and Exit",
        ] {
            assert!(menu.contains(option), "menu missing: {option}");
        }
    }
}
