//! Summary metrics for the budget page.

use maud::{Markup, html};

use crate::{
    html::{METRIC_CARD_STYLE, format_currency},
    ledger::Summary,
};

const METRIC_LABEL_STYLE: &str = "text-sm text-gray-500 dark:text-gray-400";
const METRIC_VALUE_STYLE: &str = "text-2xl font-semibold";
const METRIC_DELTA_STYLE: &str = "text-sm text-red-600 dark:text-red-400";

fn metric_card(label: &str, help: &str, value: &str, delta: Option<&str>) -> Markup {
    html! {
        div class=(METRIC_CARD_STYLE) title=(help)
        {
            span class=(METRIC_LABEL_STYLE) { (label) }
            span class=(METRIC_VALUE_STYLE) data-metric=(label) { (value) }

            @if let Some(delta) = delta {
                span class=(METRIC_DELTA_STYLE) { "↓ " (delta) }
            }
        }
    }
}

/// The totals of the session's ledger as a grid of cards.
pub(super) fn summary_view(summary: &Summary, period_label: &str) -> Markup {
    let expense_delta = format!("-{}", format_currency(summary.total_expense));

    html! {
        section class="w-full mt-8"
        {
            h3 class="text-xl font-semibold mb-4" { "📊 Summary" }

            div class="grid grid-cols-2 md:grid-cols-3 gap-4"
            {
                (metric_card(
                    "💰 Income",
                    "Total money earned",
                    &format_currency(summary.total_income),
                    None,
                ))
                (metric_card(
                    "💸 Expenses",
                    "Total money spent",
                    &format_currency(summary.total_expense),
                    Some(expense_delta.as_str()),
                ))
                (metric_card(
                    "🏦 Savings",
                    "Money set aside",
                    &format_currency(summary.total_saving),
                    None,
                ))
                (metric_card(
                    "📈 Net Balance",
                    "Income - Expenses",
                    &format_currency(summary.net_balance),
                    None,
                ))
                (metric_card(
                    "📊 Available",
                    "Income - Expenses - Savings",
                    &format_currency(summary.available_balance),
                    None,
                ))
                (metric_card("📅 Period", "The dates the summary covers", period_label, None))
            }

            details class="mt-4" open
            {
                summary class="cursor-pointer font-semibold" { "📘 What do these mean?" }

                ul class="mt-2 space-y-1 list-disc list-inside"
                {
                    li { strong { "💰 Income" } ": Total money earned (e.g. salary, bonus)." }
                    li { strong { "💸 Expense" } ": Money spent (e.g. food, rent, transport)." }
                    li { strong { "🏦 Saving" } ": Money you've set aside and not meant to spend now." }
                    li { strong { "📈 Net Balance" } ": Income - Expenses (shows overall flow)." }
                    li {
                        strong { "📊 Available Balance" }
                        ": Income - Expenses - Savings (your usable money now)."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};

    use crate::{budget::summary::summary_view, ledger::Summary};

    fn metric(html: &Html, label: &str) -> String {
        let selector = Selector::parse(&format!("[data-metric=\"{label}\"]")).unwrap();

        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("No metric labelled {label}"))
            .text()
            .collect()
    }

    #[test]
    fn shows_formatted_totals() {
        let summary = Summary {
            total_income: Decimal::new(250000, 2),
            total_expense: Decimal::new(120050, 2),
            total_saving: Decimal::new(30000, 2),
            net_balance: Decimal::new(129950, 2),
            available_balance: Decimal::new(99950, 2),
        };

        let html = Html::parse_fragment(&summary_view(&summary, "This Month").into_string());

        assert_eq!(metric(&html, "💰 Income"), "$2,500.00");
        assert_eq!(metric(&html, "💸 Expenses"), "$1,200.50");
        assert_eq!(metric(&html, "🏦 Savings"), "$300.00");
        assert_eq!(metric(&html, "📈 Net Balance"), "$1,299.50");
        assert_eq!(metric(&html, "📊 Available"), "$999.50");
        assert_eq!(metric(&html, "📅 Period"), "This Month");
    }

    #[test]
    fn shows_negative_balances() {
        let summary = Summary {
            total_expense: Decimal::new(1200, 2),
            net_balance: Decimal::new(-1200, 2),
            available_balance: Decimal::new(-1200, 2),
            ..Default::default()
        };

        let html = Html::parse_fragment(&summary_view(&summary, "All Time").into_string());

        assert_eq!(metric(&html, "📈 Net Balance"), "-$12.00");
        assert_eq!(metric(&html, "📊 Available"), "-$12.00");
    }
}
