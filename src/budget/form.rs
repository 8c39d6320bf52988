//! The entry form for adding transactions.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        loading_spinner,
    },
    ledger::{TransactionType, categories_for, default_category, is_valid_category},
};

/// The ID of the element wrapping the category selector, swapped by htmx
/// when the transaction type changes.
pub(super) const CATEGORY_FIELD_ID: &str = "category-field";

/// What the entry form should show when it is rendered.
pub(super) struct EntryFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub category: Option<&'a str>,
    pub date: Date,
    pub current_month_only: bool,
}

pub(super) fn entry_form_view(defaults: &EntryFormDefaults) -> Markup {
    let spinner = loading_spinner();

    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "➕ Add Transaction" }

                div
                {
                    label
                        for="transaction_type"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Transaction Type"
                    }

                    select
                        name="transaction_type"
                        id="transaction_type"
                        required
                        hx-get=(endpoints::CATEGORIES_API)
                        hx-trigger="change"
                        hx-target={ "#" (CATEGORY_FIELD_ID) }
                        hx-swap="outerHTML"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for transaction_type in TransactionType::ALL {
                            option
                                value=(transaction_type)
                                selected[transaction_type == defaults.transaction_type]
                            {
                                (transaction_type)
                            }
                        }
                    }
                }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(defaults.date)
                        class=(FORM_TEXT_INPUT_STYLE);

                    @if defaults.current_month_only {
                        p class="mt-1 text-sm text-gray-500 dark:text-gray-400"
                        {
                            "The free version only accepts dates in the current month."
                        }
                    }
                }

                (category_field_view(defaults.transaction_type, defaults.category))

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    // w-full needed to ensure input takes the full width when prefilled with a value
                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.00"
                            required
                            autofocus
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label
                        for="note"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Note (optional)"
                    }

                    input
                        name="note"
                        id="note"
                        type="text"
                        placeholder="Note"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Transaction"
                }
            }
        }
    }
}

/// The category selector for `transaction_type`.
///
/// `selected` is pre-selected if it is one of the type's categories,
/// otherwise the type's first category is.
pub(super) fn category_field_view(
    transaction_type: TransactionType,
    selected: Option<&str>,
) -> Markup {
    let selected = selected
        .filter(|category| is_valid_category(transaction_type, category))
        .unwrap_or_else(|| default_category(transaction_type));

    html! {
        div id=(CATEGORY_FIELD_ID)
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in categories_for(transaction_type) {
                    option value=(category) selected[*category == selected] { (category) }
                }
            }
        }
    }
}
