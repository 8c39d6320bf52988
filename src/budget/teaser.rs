//! The upgrade teaser shown on the free tier.

use maud::{Markup, html};

use crate::html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE};

/// Feature, free version, premium version.
const FEATURE_COMPARISON: [(&str, &str, &str); 10] = [
    (
        "Add income, expenses, savings",
        "✅ Limited entries, current month only",
        "✅ Unlimited, full history",
    ),
    ("Financial summary dashboard", "✅", "✅"),
    (
        "Transaction history",
        "✅ Basic for current month",
        "✅ Filterable & detailed full history",
    ),
    ("Income/Expense Trends", "❌", "✅ Interactive charts"),
    ("Pie and Bar Breakdown", "❌", "✅"),
    ("Financial insights & projections", "❌", "✅"),
    ("Debt tracking (Snowball/Avalanche)", "❌", "✅"),
    ("Export CSV, Excel, PDF", "❌", "✅"),
    ("Import CSV", "❌", "✅"),
    ("Priority Support", "❌", "✅"),
];

pub(super) fn upgrade_teaser_view() -> Markup {
    html! {
        section class="w-full mt-8 mb-8" id="upgrade"
        {
            h2 class="text-2xl font-bold mb-4" { "🚀 Upgrade to Premium for More Features!" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Feature" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Free Version ✅" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Premium Version 🚀" }
                        }
                    }

                    tbody
                    {
                        @for (feature, free, premium) in FEATURE_COMPARISON {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th scope="row" class=(TABLE_CELL_STYLE) { (feature) }
                                td class=(TABLE_CELL_STYLE) { (free) }
                                td class=(TABLE_CELL_STYLE) { (premium) }
                            }
                        }
                    }
                }
            }

            p class="mt-4 font-semibold"
            {
                "🔓 Want to unlock unlimited tracking and all features? \
                Upgrade to Premium now or start a free trial!"
            }
        }
    }
}

/// The list of premium features in the "How to use" section.
pub(super) fn premium_features_view() -> Markup {
    html! {
        h4 class="mt-4 font-semibold" { "🔓 Want More Power? Upgrade to Premium for:" }

        ul class="mt-2 space-y-1 list-disc list-inside"
        {
            li { "📈 Income/Expense Trends" }
            li { "🧮 Pie and Bar Breakdown (Income, Expense, Saving)" }
            li { "📋 Filterable Transaction History" }
            li { "🔮 Financial insights with alerts and projections" }
            li { "🎯 Debt tracking (Snowball/Avalanche strategies)" }
            li { "📁 CSV, Excel, and PDF export and import" }
        }
    }
}
