use contracts::domain::a004_finance_entry::summary::FinanceSummary;
use leptos::prelude::*;

/// Income / Expense / Balance totals above the finance list.
#[component]
pub fn FinanceSummaryStrip(#[prop(into)] summary: Signal<Option<FinanceSummary>>) -> impl IntoView {
    let total = move |pick: fn(&FinanceSummary) -> String| {
        move || summary.get().map(|s| pick(&s)).unwrap_or_else(|| "0.00".to_string())
    };
    let balance_class = move || {
        let negative = summary.get().map(|s| s.balance() < 0.0).unwrap_or(false);
        if negative {
            "finance-summary__value finance-summary__value--negative"
        } else {
            "finance-summary__value"
        }
    };

    view! {
        <div class="finance-summary">
            <div class="finance-summary__item">
                <span class="finance-summary__label">"Income"</span>
                <span class="finance-summary__value" id="finance-income">
                    {total(FinanceSummary::income_text)}
                </span>
            </div>
            <div class="finance-summary__item">
                <span class="finance-summary__label">"Expense"</span>
                <span class="finance-summary__value" id="finance-expense">
                    {total(FinanceSummary::expense_text)}
                </span>
            </div>
            <div class="finance-summary__item">
                <span class="finance-summary__label">"Balance"</span>
                <span class=balance_class id="finance-balance">
                    {total(FinanceSummary::balance_text)}
                </span>
            </div>
        </div>
    }
}
