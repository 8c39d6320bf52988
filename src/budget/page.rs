//! Defines the route handler for the budget page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    alert::Alert,
    budget::{
        BudgetState,
        form::{EntryFormDefaults, entry_form_view},
        history::history_view,
        summary::summary_view,
        teaser::{premium_features_view, upgrade_teaser_view},
    },
    endpoints,
    html::{BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    session::Session,
    tier::Tier,
    timezone::local_today,
};

fn how_to_view(tier: Tier) -> Markup {
    html! {
        details class="w-full max-w-md mb-4"
        {
            summary class="cursor-pointer font-semibold" { "❓ How to Use This App" }

            p class="mt-2" { "Here's how to use it:" }

            ul class="mt-2 space-y-1 list-disc list-inside"
            {
                li { "➕ Add your income, expenses, or savings using the form below." }
                li { "📈 View your financial summary at a glance." }
                li { "📋 Scroll down to see your transaction history." }

                @if tier.allows_export() {
                    li { "⬇️ Download your transactions as a CSV file." }
                }
            }

            @if tier.shows_upgrade_teaser() {
                (premium_features_view())
            }
        }
    }
}

fn ledger_actions_view() -> Markup {
    html! {
        div class="flex w-full justify-end gap-4 mt-4"
        {
            a href=(endpoints::EXPORT_TRANSACTIONS) download="transactions.csv" class=(LINK_STYLE)
            {
                "⬇️ Export CSV"
            }

            button
                type="button"
                hx-post=(endpoints::RESET_TRANSACTIONS)
                hx-confirm="Delete all of your transactions? This cannot be undone."
                hx-target-error="#alert-container"
                class=(BUTTON_DELETE_STYLE)
            {
                "🗑️ Reset"
            }
        }
    }
}

fn budget_view(session: &Session, tier: Tier, today: Date, alert: Option<Alert>) -> Markup {
    let title = tier.page_title();
    let form_defaults = EntryFormDefaults {
        transaction_type: session.selected_type,
        category: session.ledger.last_category(session.selected_type),
        date: session.form_date.unwrap_or(today),
        current_month_only: tier.constraints().current_period_only,
    };

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl flex flex-col items-center"
            {
                h1 class="text-3xl font-bold mb-4" { "💰 " (title) }

                (how_to_view(tier))

                @if let Some(alert) = alert {
                    div class="w-full max-w-md" { (alert.into_html()) }
                }

                (entry_form_view(&form_defaults))

                @if session.ledger.is_empty() {
                    p class="w-full max-w-md mt-8 p-4 rounded-lg text-blue-800 bg-blue-50 dark:bg-gray-800 dark:text-blue-400"
                    {
                        "No transactions yet. Add your first one above!"
                    }
                } @else {
                    (summary_view(&session.ledger.summarize(), tier.period_label()))
                    (history_view(&session.ledger.list_sorted()))

                    @if tier.allows_export() || tier.allows_reset() {
                        (ledger_actions_view())
                    }
                }

                @if tier.shows_upgrade_teaser() {
                    (upgrade_teaser_view())
                }
            }
        }
    };

    base(title, &content)
}

/// Renders the budget page for the session in the request's cookie, starting
/// a new session if there is none.
pub async fn get_budget_page(
    State(state): State<BudgetState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let tier = state.tier;

    let (jar, page) = state.sessions.with_session(jar, |session| {
        let alert = session.flash.take();
        budget_view(session, tier, today, alert)
    })?;

    Ok((jar, page).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};
    use time::{OffsetDateTime, macros::date};

    use crate::{
        alert::Alert,
        budget::{BudgetState, get_budget_page},
        endpoints,
        ledger::{Transaction, TransactionType},
        test_utils::{
            assert_content_type, assert_status_ok, assert_valid_html, get_header,
            parse_html_document, test_budget_state, test_cookie_jar,
        },
        tier::Tier,
    };

    async fn render_page(state: &BudgetState, jar: PrivateCookieJar) -> Html {
        let response = get_budget_page(State(state.clone()), jar).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        document
    }

    fn add_transactions(state: &BudgetState, jar: PrivateCookieJar, transactions: Vec<Transaction>) {
        let today = OffsetDateTime::now_utc().date();
        let constraints = state.tier.constraints();

        state
            .sessions
            .with_session(jar, |session| {
                for transaction in transactions {
                    session.ledger.add(transaction, &constraints, today).unwrap();
                }
            })
            .unwrap();
    }

    fn count(document: &Html, selector: &str) -> usize {
        document.select(&Selector::parse(selector).unwrap()).count()
    }

    fn text_of(document: &Html, selector: &str) -> String {
        document
            .select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("Nothing matches {selector}"))
            .text()
            .collect()
    }

    #[tokio::test]
    async fn new_visitor_gets_session_cookie() {
        let state = test_budget_state(Tier::Free);

        let response = get_budget_page(State(state.clone()), PrivateCookieJar::new(Key::generate()))
            .await
            .unwrap();

        assert!(get_header(&response, "set-cookie").starts_with("session_id="));
        assert_eq!(state.sessions.active_sessions().unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_free_page_shows_form_and_teaser() {
        let state = test_budget_state(Tier::Free);
        let jar = test_cookie_jar(&state);

        let document = render_page(&state, jar).await;

        assert_eq!(text_of(&document, "title"), "Simple Budget Tracker (Free Version)");
        assert_eq!(count(&document, "form"), 1);
        assert!(
            document
                .root_element()
                .text()
                .any(|text| text.contains("No transactions yet"))
        );
        assert_eq!(count(&document, "table"), 1, "want only the teaser table");
        assert_eq!(count(&document, "#upgrade"), 1);
        assert_eq!(count(&document, "#alert-container"), 1);
    }

    #[tokio::test]
    async fn shows_summary_and_history() {
        let state = test_budget_state(Tier::Free);
        let jar = test_cookie_jar(&state);
        let today = OffsetDateTime::now_utc().date();
        add_transactions(
            &state,
            jar.clone(),
            vec![
                Transaction::new(today, TransactionType::Income, "Salary", Decimal::new(100000, 2)),
                Transaction::new(today, TransactionType::Expense, "Food", Decimal::new(2550, 2)),
            ],
        );

        let document = render_page(&state, jar).await;

        assert_eq!(text_of(&document, "[data-metric=\"💰 Income\"]"), "$1,000.00");
        assert_eq!(text_of(&document, "[data-metric=\"📊 Available\"]"), "$974.50");
        assert_eq!(text_of(&document, "[data-metric=\"📅 Period\"]"), "This Month");
        assert_eq!(count(&document, "section:not(#upgrade) tbody tr"), 2);
        assert_eq!(
            count(&document, &format!("a[href=\"{}\"]", endpoints::EXPORT_TRANSACTIONS)),
            0
        );
    }

    #[tokio::test]
    async fn unrestricted_page_has_ledger_actions_and_no_teaser() {
        let state = test_budget_state(Tier::Unrestricted);
        let jar = test_cookie_jar(&state);
        add_transactions(
            &state,
            jar.clone(),
            vec![Transaction::new(
                date!(2020 - 01 - 05),
                TransactionType::Saving,
                "TFSA",
                Decimal::TEN,
            )],
        );

        let document = render_page(&state, jar).await;

        assert_eq!(text_of(&document, "title"), "Budget Tracker");
        assert_eq!(text_of(&document, "[data-metric=\"📅 Period\"]"), "All Time");
        assert_eq!(
            count(&document, &format!("a[href=\"{}\"]", endpoints::EXPORT_TRANSACTIONS)),
            1
        );
        assert_eq!(
            count(&document, &format!("button[hx-post=\"{}\"][hx-confirm]", endpoints::RESET_TRANSACTIONS)),
            1
        );
        assert_eq!(count(&document, "#upgrade"), 0);
    }

    #[tokio::test]
    async fn form_remembers_session_choices() {
        let state = test_budget_state(Tier::Unrestricted);
        let jar = test_cookie_jar(&state);
        add_transactions(
            &state,
            jar.clone(),
            vec![Transaction::new(
                date!(2024 - 06 - 30),
                TransactionType::Expense,
                "Travel",
                Decimal::ONE,
            )],
        );
        state
            .sessions
            .with_session(jar.clone(), |session| {
                session.selected_type = TransactionType::Expense;
                session.form_date = Some(date!(2024 - 06 - 30));
            })
            .unwrap();

        let document = render_page(&state, jar).await;

        assert_eq!(
            text_of(&document, "select[name=transaction_type] option[selected]"),
            "Expense"
        );
        assert_eq!(text_of(&document, "select[name=category] option[selected]"), "Travel");
        let date_input = document
            .select(&Selector::parse("input[name=date]").unwrap())
            .next()
            .unwrap();
        assert_eq!(date_input.value().attr("value"), Some("2024-06-30"));
    }

    #[tokio::test]
    async fn flash_alert_is_shown_once() {
        let state = test_budget_state(Tier::Free);
        let jar = test_cookie_jar(&state);
        state
            .sessions
            .with_session(jar.clone(), |session| {
                session.flash = Some(Alert::success("Transaction added!", ""));
            })
            .unwrap();

        let first = render_page(&state, jar.clone()).await;
        let second = render_page(&state, jar).await;

        assert_eq!(text_of(&first, "[role=alert] p"), "Transaction added!");
        assert_eq!(count(&second, "[role=alert]"), 0);
    }
}
