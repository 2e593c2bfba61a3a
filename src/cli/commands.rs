use anyhow::Result;
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::{error, info};

use crate::{
    cli::args::*,
    models::{
        entry::{Currency, IncomeDraft, StoreIncomeRequest},
        field::{parse_amount, FieldEvent, FieldId, FormFields},
    },
    services::{
        calculator::{guard_submit, Calculator, SubmitDecision, TotalRender},
        session::{FieldSink, FormSession},
    },
    utils::{
        config::Config,
        formatting::{format_amount, format_breakdown_table, styled_total},
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");

/// Sink that renders the total onto the terminal. Input, change, and blur
/// may all fire for one commit; identical consecutive renders are printed
/// once.
#[derive(Default)]
pub struct TerminalSink {
    last_value: Option<String>,
}

impl FieldSink for TerminalSink {
    fn apply_total(&mut self, render: &TotalRender) {
        if self.last_value.as_deref() == Some(render.value.as_str()) {
            return;
        }
        self.last_value = Some(render.value.clone());
        println!("Total: {}", styled_total(render));
    }

    fn alert(&mut self, message: &str) {
        println!("{} {}", CROSS, style(message).red());
    }
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Fill {
                currency,
                output,
                json,
            } => self.handle_fill(currency, output, json),
            Commands::Total {
                subtotal,
                discount,
                shipping,
            } => self.handle_total(subtotal, discount, shipping),
            Commands::Check { total } => self.handle_check(total),
        }
    }

    fn handle_fill(
        &self,
        currency: Option<String>,
        output: Option<String>,
        json: bool,
    ) -> Result<()> {
        println!("{} {}", ROCKET, style("Income Entry").bold().cyan());

        let theme = ColorfulTheme::default();

        let order_number: String = Input::with_theme(&theme)
            .with_prompt("Order number (optional)")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().len() > 30 {
                    Err("Order number must be at most 30 characters")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let currency = match currency {
            Some(code) => match Currency::from_code(&code) {
                Some(currency) => currency,
                None => {
                    println!(
                        "{} Unknown currency code '{}'",
                        WARNING,
                        style(&code).yellow()
                    );
                    self.select_currency(&theme)?
                }
            },
            None => self.select_currency(&theme)?,
        };

        let mut fields = FormFields::new();
        for field in FieldId::ALL {
            fields.register(field, "");
        }
        let mut session = FormSession::initialize(fields, TerminalSink::default());

        for field in FieldId::OPERANDS {
            let value: String = Input::with_theme(&theme)
                .with_prompt(field.label())
                .allow_empty(true)
                .interact_text()?;
            commit_field(&mut session, field, value);
        }

        loop {
            let confirmed = Confirm::with_theme(&theme)
                .with_prompt("Submit this entry?")
                .default(true)
                .interact()?;

            if confirmed && session.submit() {
                break;
            }
            // Blocked or declined: let the operator rework a field, the
            // total included (a manual total edit is what the guard reads).
            let labels: Vec<&str> = FieldId::ALL.iter().map(|field| field.label()).collect();
            let index = Select::with_theme(&theme)
                .with_prompt("Which field do you want to edit?")
                .items(&labels)
                .default(0)
                .interact()?;
            let field = FieldId::ALL[index];

            let value: String = Input::with_theme(&theme)
                .with_prompt(field.label())
                .allow_empty(true)
                .interact_text()?;
            commit_field(&mut session, field, value);
        }

        let request = StoreIncomeRequest {
            order_number: Some(order_number).filter(|n| !n.trim().is_empty()),
            currency,
            product_subtotal: session.fields().amount(FieldId::ProductSubtotal),
            discount: session.fields().amount(FieldId::Discount),
            shipping_cost: session.fields().amount(FieldId::ShippingCost),
            total: parse_amount(session.total_text().unwrap_or("")),
        };

        match IncomeDraft::new(request) {
            Ok(draft) => {
                println!("{} Entry confirmed!", CHECKMARK);
                println!("{}", format_breakdown_table(&draft));
                info!(
                    "Income entry {} confirmed with total {}",
                    draft.id,
                    format_amount(draft.total)
                );

                if let Some(path) = output {
                    std::fs::write(&path, serde_json::to_string_pretty(&draft)?)?;
                    println!("{} Saved to {}", INFO, style(&path).cyan());
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&draft)?);
                }
            }
            Err(e) => {
                println!("{} Failed to build entry: {}", CROSS, style(&e).red());
                error!("Failed to build entry: {}", e);
            }
        }

        Ok(())
    }

    fn handle_total(&self, subtotal: String, discount: String, shipping: String) -> Result<()> {
        let fields = FormFields::new()
            .with_field(FieldId::ProductSubtotal, subtotal)
            .with_field(FieldId::Discount, discount)
            .with_field(FieldId::ShippingCost, shipping)
            .with_field(FieldId::Total, "");

        match Calculator::initialize(&fields) {
            Some(calculator) => {
                let render = calculator.recompute(&fields);
                println!("Total: {}", styled_total(&render));
            }
            None => {
                println!("{} Calculator unavailable: form is incomplete", WARNING);
            }
        }

        Ok(())
    }

    fn handle_check(&self, total: String) -> Result<()> {
        match guard_submit(&total) {
            SubmitDecision::Allow => {
                println!("{} Submission allowed", CHECKMARK);
            }
            SubmitDecision::Block { message } => {
                println!("{} {}", CROSS, style(message).red());
            }
        }

        Ok(())
    }

    fn select_currency(&self, theme: &ColorfulTheme) -> Result<Currency> {
        let items: Vec<String> = Currency::ALL
            .iter()
            .map(|currency| format!("{} ({})", currency.code(), currency.name()))
            .collect();
        let default = Currency::ALL
            .iter()
            .position(|currency| *currency == self.config.currency)
            .unwrap_or(0);

        let index = Select::with_theme(theme)
            .with_prompt("Currency")
            .items(&items)
            .default(default)
            .interact()?;

        Ok(Currency::ALL[index])
    }
}

// A committed line from the terminal plays the same event burst a browser
// field would emit; each one triggers the same idempotent recomputation.
fn commit_field(session: &mut FormSession<TerminalSink>, field: FieldId, value: String) {
    session.dispatch(field, FieldEvent::Input, value.clone());
    session.dispatch(field, FieldEvent::Change, value.clone());
    session.dispatch(field, FieldEvent::Blur, value);
}
