//! Finance transactions and monthly summaries.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub date: String,
    #[serde(deserialize_with = "de::float")]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Amount with the sign implied by `kind`.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount.abs(),
            TransactionKind::Expense => -self.amount.abs(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub date: String,
    pub amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub kind: TransactionKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    #[serde(deserialize_with = "de::float")]
    pub total: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    #[serde(default)]
    pub month: String,
    #[serde(default, deserialize_with = "de::float")]
    pub income: f64,
    #[serde(default, deserialize_with = "de::float")]
    pub expense: f64,
    #[serde(default)]
    pub by_category: Vec<CategoryTotal>,
}

/// Summarise a month locally when the service has no summary endpoint.
#[must_use]
pub fn summarize(month: &str, transactions: &[Transaction]) -> MonthlySummary {
    let mut summary = MonthlySummary { month: month.to_owned(), ..MonthlySummary::default() };
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => summary.income += tx.amount.abs(),
            TransactionKind::Expense => {
                summary.expense += tx.amount.abs();
                match summary.by_category.iter_mut().find(|c| c.category == tx.category) {
                    Some(cat) => cat.total += tx.amount.abs(),
                    None => summary
                        .by_category
                        .push(CategoryTotal { category: tx.category.clone(), total: tx.amount.abs() }),
                }
            }
        }
    }
    summary
        .by_category
        .sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    summary
}
