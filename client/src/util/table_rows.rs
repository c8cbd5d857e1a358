//! [`TableRow`] views of the backend records shown in data tables.

#[cfg(test)]
#[path = "table_rows_test.rs"]
mod table_rows_test;

use super::table::{CellValue, TableRow};
use crate::net::types::catalog::ServiceInfo;
use crate::net::types::docs::DocPage;
use crate::net::types::efficiency::EfficiencyEvaluation;
use crate::net::types::files::FileEntry;
use crate::net::types::finance::{Transaction, TransactionKind};
use crate::net::types::homework::HomeworkRecord;
use crate::net::types::persons::{Address, BankAccount, Contact, Document, Person};
use crate::net::types::skills::Skill;
use crate::net::types::wake::WakeDevice;

fn yes_no(flag: bool) -> CellValue {
    if flag { CellValue::text("yes") } else { CellValue::Empty }
}

#[allow(clippy::cast_precision_loss)]
fn int(value: i64) -> CellValue {
    CellValue::number(value as f64)
}

impl TableRow for Person {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => CellValue::text(&self.name),
            "relation" => CellValue::opt_text(self.relation.as_deref()),
            "gender" => CellValue::opt_text(self.gender.as_deref()),
            "birth_date" => CellValue::opt_text(self.birth_date.as_deref()),
            "phone" => CellValue::opt_text(self.phone.as_deref()),
            "email" => CellValue::opt_text(self.email.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Document {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "doc_type" => CellValue::text(&self.doc_type),
            "number" => CellValue::text(&self.number),
            "issuer" => CellValue::opt_text(self.issuer.as_deref()),
            "issued_at" => CellValue::opt_text(self.issued_at.as_deref()),
            "expires_at" => CellValue::opt_text(self.expires_at.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Address {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "label" => CellValue::opt_text(self.label.as_deref()),
            "address" => CellValue::text(self.one_line()),
            "postal_code" => CellValue::opt_text(self.postal_code.as_deref()),
            "is_primary" => yes_no(self.is_primary),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for BankAccount {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "bank_name" => CellValue::text(&self.bank_name),
            "account_number" => CellValue::text(self.masked_number()),
            "account_type" => CellValue::opt_text(self.account_type.as_deref()),
            "currency" => CellValue::opt_text(self.currency.as_deref()),
            "branch" => CellValue::opt_text(self.branch.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Contact {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "kind" => CellValue::text(self.kind.as_str()),
            "value" => CellValue::text(&self.value),
            "label" => CellValue::opt_text(self.label.as_deref()),
            "is_primary" => yes_no(self.is_primary),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for HomeworkRecord {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "subject" => CellValue::text(&self.subject),
            "grade" => CellValue::text(&self.grade),
            "topic" => CellValue::opt_text(self.topic.as_deref()),
            "problem_count" => int(self.problem_count),
            "created_at" => CellValue::opt_text(self.created_at.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for ServiceInfo {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => CellValue::text(&self.name),
            "description" => CellValue::opt_text(self.description.as_deref()),
            "port" => match self.port.as_deref().map(str::parse::<f64>) {
                Some(Ok(port)) => CellValue::number(port),
                _ => CellValue::opt_text(self.port.as_deref()),
            },
            "status" => CellValue::opt_text(self.status.as_deref()),
            "depends_on" => CellValue::text(self.depends_on.join(", ")),
            "tags" => CellValue::text(self.tags.join(", ")),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for FileEntry {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => CellValue::text(if self.is_dir { format!("{}/", self.file_name()) } else { self.file_name().to_owned() }),
            "size" if self.is_dir => CellValue::Empty,
            "size" => int(self.size),
            "content_type" => CellValue::opt_text(self.content_type.as_deref()),
            "updated_at" => CellValue::opt_text(self.updated_at.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Transaction {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "date" => CellValue::text(&self.date),
            "kind" => CellValue::text(match self.kind {
                TransactionKind::Income => "income",
                TransactionKind::Expense => "expense",
            }),
            "amount" => CellValue::number(self.signed_amount()),
            "category" => CellValue::text(&self.category),
            "account" => CellValue::opt_text(self.account.as_deref()),
            "note" => CellValue::opt_text(self.note.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for EfficiencyEvaluation {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "task" => CellValue::text(&self.task),
            "minutes" => int(self.minutes),
            "score" => CellValue::number(self.score),
            "feedback" => CellValue::opt_text(self.feedback.as_deref()),
            "created_at" => CellValue::opt_text(self.created_at.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for DocPage {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "title" => CellValue::text(&self.title),
            "tags" => CellValue::text(self.tags.join(", ")),
            "updated_at" => CellValue::opt_text(self.updated_at.as_deref()),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for WakeDevice {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => CellValue::text(&self.name),
            "mac" => CellValue::text(&self.mac),
            "ip" => CellValue::opt_text(self.ip.as_deref()),
            "online" => match self.online {
                Some(true) => CellValue::text("online"),
                Some(false) => CellValue::text("offline"),
                None => CellValue::Empty,
            },
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Skill {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => CellValue::text(&self.name),
            "description" => CellValue::opt_text(self.description.as_deref()),
            "tags" => CellValue::text(self.tags.join(", ")),
            _ => CellValue::Empty,
        }
    }
}
