//! Cache key taxonomy.
//!
//! Every list key is a prefix of the keys below it, so invalidating a list
//! also invalidates the details cached under it.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use super::key::QueryKey;

pub mod persons {
    use super::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::root("persons")
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with(id)
    }

    pub fn documents(id: &str) -> QueryKey {
        detail(id).with("documents")
    }

    pub fn addresses(id: &str) -> QueryKey {
        detail(id).with("addresses")
    }

    pub fn bank_accounts(id: &str) -> QueryKey {
        detail(id).with("bank-accounts")
    }

    pub fn contacts(id: &str) -> QueryKey {
        detail(id).with("contacts")
    }
}

pub mod homework {
    use super::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::root("homework")
    }

    pub fn records() -> QueryKey {
        all().with("records")
    }

    pub fn record(id: &str) -> QueryKey {
        records().with(id)
    }

    pub fn submission(id: &str) -> QueryKey {
        all().with("submissions").with(id)
    }
}

pub mod wordbook {
    use super::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::root("wordbook")
    }

    pub fn stats() -> QueryKey {
        all().with("stats")
    }

    pub fn due() -> QueryKey {
        all().with("due")
    }
}

pub mod ai_weekly {
    use super::QueryKey;

    pub fn reports() -> QueryKey {
        QueryKey::root("ai-weekly").with("reports")
    }

    pub fn report(id: &str) -> QueryKey {
        reports().with(id)
    }
}

pub mod catalog {
    use super::QueryKey;

    pub fn services() -> QueryKey {
        QueryKey::root("catalog").with("services")
    }

    pub fn health(name: &str) -> QueryKey {
        services().with(name).with("health")
    }
}

pub mod files {
    use super::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::root("files")
    }

    pub fn list(prefix: &str) -> QueryKey {
        all().with(prefix)
    }
}

pub mod finance {
    use super::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::root("finance")
    }

    pub fn transactions(month: &str) -> QueryKey {
        all().with(month).with("transactions")
    }

    pub fn summary(month: &str) -> QueryKey {
        all().with(month).with("summary")
    }
}

pub mod efficiency {
    use super::QueryKey;

    pub fn history() -> QueryKey {
        QueryKey::root("efficiency").with("history")
    }
}

pub mod docs {
    use super::QueryKey;

    pub fn pages() -> QueryKey {
        QueryKey::root("docs").with("pages")
    }

    pub fn page(id: &str) -> QueryKey {
        pages().with(id)
    }
}

pub mod wake {
    use super::QueryKey;

    pub fn devices() -> QueryKey {
        QueryKey::root("wake").with("devices")
    }
}

pub mod skills {
    use super::QueryKey;

    pub fn all() -> QueryKey {
        QueryKey::root("skills")
    }

    pub fn detail(id: &str) -> QueryKey {
        all().with(id)
    }
}
