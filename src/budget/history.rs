//! The transaction history table.

use std::borrow::Cow;

use maud::{Markup, html};

use crate::{
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
        truncate_graphemes,
    },
    ledger::{Transaction, TransactionType},
};

/// Notes longer than this are cut short in the table, the full note is kept
/// in the cell's tooltip.
const MAX_NOTE_GRAPHEMES: usize = 32;

fn type_icon(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "🟢",
        TransactionType::Expense => "🔴",
        TransactionType::Saving => "💙",
    }
}

fn note_cell(note: &str) -> Markup {
    match truncate_graphemes(note, MAX_NOTE_GRAPHEMES) {
        Cow::Borrowed(note) => html! { td class=(TABLE_CELL_STYLE) { (note) } },
        Cow::Owned(shortened) => html! {
            td class=(TABLE_CELL_STYLE) title=(note) { (shortened) }
        },
    }
}

/// Renders `transactions`, which should already be sorted newest first.
pub(super) fn history_view(transactions: &[&Transaction]) -> Markup {
    html! {
        section class="w-full mt-8"
        {
            h3 class="text-xl font-semibold mb-4" { "📋 Transaction History" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class="px-6 py-4 text-right" { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Note" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class="px-6 py-4 whitespace-nowrap" { (transaction.date) }
                                td class="px-6 py-4 whitespace-nowrap"
                                {
                                    span aria-hidden="true" { (type_icon(transaction.transaction_type)) }
                                    " " (transaction.transaction_type)
                                }
                                td class=(TABLE_CELL_STYLE) { (transaction.category) }
                                td class="px-6 py-4 text-right" { (format_currency(transaction.amount)) }
                                (note_cell(&transaction.note))
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        budget::history::history_view,
        ledger::{Transaction, TransactionType},
    };

    fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
        row.select(&Selector::parse("td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    fn render(transactions: &[Transaction]) -> Html {
        let sorted: Vec<&Transaction> = transactions.iter().collect();

        Html::parse_fragment(&history_view(&sorted).into_string())
    }

    #[test]
    fn renders_one_row_per_transaction_in_order() {
        let transactions = [
            Transaction::new(
                date!(2025 - 03 - 14),
                TransactionType::Saving,
                "TFSA",
                Decimal::new(5000, 2),
            ),
            Transaction::new(
                date!(2025 - 03 - 02),
                TransactionType::Income,
                "Salary",
                Decimal::new(123400, 2),
            )
            .note("March pay"),
        ];

        let html = render(&transactions);
        let rows: Vec<Vec<String>> = html
            .select(&Selector::parse("tbody tr").unwrap())
            .map(cell_texts)
            .collect();

        assert_eq!(
            rows,
            [
                ["2025-03-14", "💙 Saving", "TFSA", "$50.00", ""],
                ["2025-03-02", "🟢 Income", "Salary", "$1,234.00", "March pay"],
            ]
        );
    }

    #[test]
    fn shortens_long_notes_with_tooltip() {
        let long_note = "Dinner with the whole extended family at the new place";
        let transactions = [Transaction::new(
            date!(2025 - 03 - 14),
            TransactionType::Expense,
            "Food",
            Decimal::new(9900, 2),
        )
        .note(long_note)];

        let html = render(&transactions);
        let note_cell = html
            .select(&Selector::parse("td[title]").unwrap())
            .next()
            .expect("No note cell with a tooltip");

        assert_eq!(note_cell.value().attr("title"), Some(long_note));
        assert_eq!(
            note_cell.text().collect::<String>(),
            "Dinner with the whole extended f…"
        );
    }

    #[test]
    fn expense_rows_use_red_icon() {
        let transactions = [Transaction::new(
            date!(2025 - 03 - 14),
            TransactionType::Expense,
            "Bills",
            Decimal::ONE,
        )];

        let html = render(&transactions);
        let type_cell = html
            .select(&Selector::parse("tbody td:nth-child(2)").unwrap())
            .next()
            .unwrap();

        assert_eq!(type_cell.text().collect::<String>(), "🔴 Expense");
    }
}
