use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::entry::IncomeDraft;
use crate::services::calculator::TotalRender;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub fn format_amount(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}

/// Terminal mapping of the render result's tone pair: the green pair
/// becomes green text, the red pair red text.
pub fn styled_total(render: &TotalRender) -> String {
    if render.is_positive() {
        style(&render.value).green().bold().to_string()
    } else {
        style(&render.value).red().bold().to_string()
    }
}

pub fn format_breakdown_table(draft: &IncomeDraft) -> String {
    let rows = vec![
        BreakdownRow {
            field: "Product subtotal".to_string(),
            amount: format_amount(draft.product_subtotal),
        },
        BreakdownRow {
            field: "Discount".to_string(),
            amount: format_amount(draft.discount),
        },
        BreakdownRow {
            field: "Shipping cost".to_string(),
            amount: format_amount(draft.shipping_cost),
        },
        BreakdownRow {
            field: format!("Total ({})", draft.currency),
            amount: format_amount(draft.total),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}
