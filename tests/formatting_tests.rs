use pretty_assertions::assert_eq;

use income_entry_cli::models::entry::{Currency, IncomeDraft, StoreIncomeRequest};
use income_entry_cli::models::field::{FieldId, FormFields};
use income_entry_cli::services::calculator::{Calculator, TotalRender};
use income_entry_cli::utils::formatting::{format_amount, format_breakdown_table, styled_total};

fn render_for(subtotal: &str, discount: &str, shipping: &str) -> TotalRender {
    let fields = FormFields::new()
        .with_field(FieldId::ProductSubtotal, subtotal)
        .with_field(FieldId::Discount, discount)
        .with_field(FieldId::ShippingCost, shipping)
        .with_field(FieldId::Total, "");
    Calculator::initialize(&fields).unwrap().recompute(&fields)
}

#[test]
fn test_format_amount_two_decimals() {
    assert_eq!(format_amount(90.0), "90.00");
    assert_eq!(format_amount(2.5), "2.50");
    assert_eq!(format_amount(-5.0), "-5.00");
    assert_eq!(format_amount(-0.0), "0.00");
}

#[test]
fn test_styled_total_maps_sign_to_green_or_red() {
    console::set_colors_enabled(true);

    let positive = styled_total(&render_for("100", "20", "10"));
    assert!(positive.contains("90.00"));
    assert!(positive.contains("[32m"), "positive total should render green");

    let negative = styled_total(&render_for("10", "15", "0"));
    assert!(negative.contains("-5.00"));
    assert!(negative.contains("[31m"), "non-positive total should render red");

    let zero = styled_total(&render_for("10", "10", ""));
    assert!(zero.contains("0.00"));
    assert!(zero.contains("[31m"), "zero total should render red");
}

#[test]
fn test_breakdown_table_lists_all_four_fields() {
    let draft = IncomeDraft::new(StoreIncomeRequest {
        order_number: Some("A-1001".to_string()),
        currency: Currency::Usd,
        product_subtotal: 100.0,
        discount: 20.0,
        shipping_cost: 10.0,
        total: 90.0,
    })
    .unwrap();

    let table = format_breakdown_table(&draft);

    assert!(table.contains("Product subtotal"));
    assert!(table.contains("100.00"));
    assert!(table.contains("Discount"));
    assert!(table.contains("20.00"));
    assert!(table.contains("Shipping cost"));
    assert!(table.contains("10.00"));
    assert!(table.contains("Total (USD)"));
    assert!(table.contains("90.00"));
}
